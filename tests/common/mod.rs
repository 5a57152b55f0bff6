#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const INDEX_FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
            <div class="services-grid">
                <!-- GALLERY:START -->
                <div class="service-card">hand written placeholder</div>
                <!-- GALLERY:END -->
            </div>
<script>
const translations = {
    en: {
        'nav.home': 'Home',
        'gallery.sold': 'Sold',
        'radio1.desc': 'placeholder one',
        'radio2.desc': 'placeholder two',
        'radio3.desc': 'placeholder three',
        'radio9.desc': 'retired card'
    },
    es: {
        'nav.home': 'Inicio',
        'gallery.sold': 'Vendido',
        'radio1.desc': 'marcador uno',
        'radio2.desc': 'marcador dos',
        'radio3.desc': 'marcador tres'
    }
};
</script>
</body>
</html>
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub radios: PathBuf,
    pub index: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let radios = root.join("radios");
        fs::create_dir_all(&radios).expect("create radios dir");
        let index = root.join("index.html");
        fs::write(&index, INDEX_FIXTURE).expect("write index fixture");
        Self {
            _tmp: tmp,
            root,
            radios,
            index,
        }
    }

    /// Three radios covering sale, sold and collection, plus a quote in
    /// the third description.
    pub fn with_fixture_radios() -> Self {
        let env = Self::new();
        env.write_radio(
            "01-philco.json",
            serde_json::json!({
                "year": 1940,
                "model": "Philco Model 40-180",
                "image": "radio-1-philco.jpg",
                "price": 850,
                "status": "sale",
                "description_en": "Walnut cabinet with magic eye tuning.",
                "description_es": "Mueble de nogal con ojo mágico."
            }),
        );
        env.write_radio(
            "02-zenith.json",
            serde_json::json!({
                "year": 1942,
                "model": "Zenith Trans-Oceanic",
                "image": "radio-2-zenith.jpg",
                "price": 125000,
                "status": "sold",
                "description_en": "Portable shortwave receiver.",
                "description_es": "Receptor portátil de onda corta."
            }),
        );
        env.write_radio(
            "03-telefunken.json",
            serde_json::json!({
                "year": 1955,
                "model": "Telefunken Opus",
                "image": "radio-3-telefunken.jpg",
                "status": "collection",
                "description_en": "My grandfather's radio.",
                "description_es": "La radio de mi abuelo."
            }),
        );
        env
    }

    pub fn write_radio(&self, name: &str, value: Value) {
        fs::write(self.radios.join(name), value.to_string()).expect("write radio");
    }

    pub fn index_html(&self) -> String {
        fs::read_to_string(&self.index).expect("read index")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("radio-gallery");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Value of `'<key>': '...'` inside the `<lang>: {` block, unescaped.
pub fn translation(html: &str, lang: &str, key: &str) -> Option<String> {
    let block_start = html.find(&format!("{}: {{", lang))?;
    let block = &html[block_start..];
    let block = &block[..block.find("\n    }")?];
    let needle = format!("'{}': '", key);
    let value_start = block.find(&needle)? + needle.len();

    let mut out = String::new();
    let mut chars = block[value_start..].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                other => out.push(other),
            },
            '\'' => return Some(out),
            c => out.push(c),
        }
    }
    None
}
