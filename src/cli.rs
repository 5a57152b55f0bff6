use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_RADIOS_DIR: &str = "radios";
pub const DEFAULT_INDEX_HTML: &str = "index.html";

#[derive(Parser, Debug)]
#[command(
    name = "radio-gallery",
    version,
    about = "Regenerate the gallery section of index.html from radios/*.json"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        default_value = DEFAULT_RADIOS_DIR,
        help = "Directory holding one JSON record per radio"
    )]
    pub radios: PathBuf,
    #[arg(
        long,
        default_value = DEFAULT_INDEX_HTML,
        help = "HTML document containing the gallery markers and language blocks"
    )]
    pub index: PathBuf,
    #[arg(long, help = "Build everything in memory but do not write the document")]
    pub dry_run: bool,
    #[arg(short, long, help = "Log each build step to stderr")]
    pub verbose: bool,
}
