pub const GALLERY_START: &str = "<!-- GALLERY:START -->";
pub const GALLERY_END: &str = "<!-- GALLERY:END -->";

pub const RECORD_EXTENSION: &str = "json";

pub const CONTACT_EMAIL: &str = "info@arstechnica.shop";

pub const CURRENCY: &str = "€";
pub const THOUSANDS_SEPARATOR: char = '.';

/// Language blocks patched in the document, in patch order.
pub const LANGUAGES: [Language; 2] = [Language::En, Language::Es];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn key(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}
