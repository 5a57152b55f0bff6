//! Keeps the `en: { ... }` / `es: { ... }` dictionaries in the document in
//! step with the card descriptions.
//!
//! Only values of keys that already exist are rewritten; keys are never
//! added or removed, and everything outside the matched values is left
//! byte-for-byte alone.

use crate::domain::constants::{Language, LANGUAGES};
use crate::domain::models::Radio;
use crate::services::render::desc_key;
use regex::Regex;
use std::ops::Range;

/// `radio<n>.desc` entries for one language, in card order.
pub fn build_entries(radios: &[Radio], lang: Language) -> Vec<(String, String)> {
    radios
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let text = match lang {
                Language::En => &r.description_en,
                Language::Es => &r.description_es,
            };
            (desc_key(i + 1), text.clone())
        })
        .collect()
}

/// Byte range of the `{ ... }` object that follows the first `<lang>: {`,
/// braces included. Nested objects are skipped by depth counting.
///
/// The first match anywhere in the document wins, so card text containing
/// `es: {` shadows the real block.
pub fn find_lang_block(html: &str, lang: &str) -> Option<Range<usize>> {
    let marker = format!("{}: {{", lang);
    let start = html.find(&marker)?;
    let brace_start = start + marker.len() - 1;

    let mut depth = 0usize;
    for (i, b) in html.bytes().enumerate().skip(brace_start) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(brace_start..i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Escapes `value` for use inside a single-quoted JS string literal.
pub fn escape_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Rewrites the value of every `'<key>': '<value>'` pair in `block`.
/// Returns the new block and how many values were replaced.
pub fn replace_keys_in_block(
    block: &str,
    entries: &[(String, String)],
) -> anyhow::Result<(String, usize)> {
    let mut out = block.to_string();
    let mut replaced = 0;
    for (key, value) in entries {
        let pattern = format!(
            r"(?s)('{}'\s*:\s*')((?:[^'\\]|\\.)*)(')",
            regex::escape(key)
        );
        let re = Regex::new(&pattern)?;
        let escaped = escape_single_quoted(value);
        replaced += re.find_iter(&out).count();
        out = re
            .replace_all(&out, |caps: &regex::Captures| {
                format!("{}{}{}", &caps[1], escaped, &caps[3])
            })
            .into_owned();
    }
    Ok((out, replaced))
}

/// Patches every known language block independently. A language whose
/// block cannot be found is left as it is.
pub fn update_translations(html: &str, radios: &[Radio]) -> anyhow::Result<String> {
    let mut html = html.to_string();
    for lang in LANGUAGES {
        let Some(range) = find_lang_block(&html, lang.key()) else {
            log::debug!("no '{}: {{' block found, skipping", lang.key());
            continue;
        };
        let entries = build_entries(radios, lang);
        let (block, replaced) = replace_keys_in_block(&html[range.clone()], &entries)?;
        if replaced == 0 && !entries.is_empty() {
            log::debug!(
                "'{}: {{' at {} holds none of the radio keys; wrong block matched?",
                lang.key(),
                range.start
            );
        }
        log::debug!(
            "{} block at {}..{}: {} value(s) rewritten",
            lang.key(),
            range.start,
            range.end,
            replaced
        );
        html.replace_range(range, &block);
    }
    Ok(html)
}
