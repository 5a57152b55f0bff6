//! Card markup for the gallery.
//!
//! Every card is a pure function of one radio and its 1-based position; the
//! position also names the card's `radio<n>.desc` translation key.

use crate::domain::constants::{CONTACT_EMAIL, CURRENCY, GALLERY_END, GALLERY_START, THOUSANDS_SEPARATOR};
use crate::domain::models::{Radio, Status};

const SOLD_RIBBON: &str = r#"
                        <div style="position: absolute; top: 0; right: 0; width: 250px; height: 250px; overflow: hidden; z-index: 10; pointer-events: none;">
                            <div style="position: absolute; top: 55px; right: -70px; width: 350px; transform: rotate(45deg); background: linear-gradient(135deg, #8B0000 0%, #B22222 50%, #8B0000 100%); color: #f5ebe0; text-align: center; padding: 0.6rem 0; font-family: 'IBM Plex Mono', monospace; font-size: 0.75rem; font-weight: bold; text-transform: uppercase; letter-spacing: 0.25em; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.5); border-top: 1px solid rgba(212, 175, 55, 0.85); border-bottom: 1px solid rgba(212, 175, 55, 0.85);" data-i18n="gallery.sold">Sold</div>
                        </div>"#;

const COLLECTION_ACTIONS: &str = r#"
                            <span style="font-family: 'IBM Plex Mono', monospace; font-size: 0.8rem; color: var(--copper); text-transform: uppercase; letter-spacing: 0.15em; opacity: 0.8;" data-i18n="gallery.collection">Personal Collection</span>
                            <span></span>"#;

/// Whole units grouped in thousands, e.g. `125000` -> `125.000€`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if price < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped.push_str(CURRENCY);
    grouped
}

pub fn desc_key(position: usize) -> String {
    format!("radio{}.desc", position)
}

/// Summary label: the formatted price, `SOLD` or `COLLECTION`.
pub fn status_label(radio: &Radio) -> String {
    match radio.status {
        Status::Sold => "SOLD".to_string(),
        Status::Collection => "COLLECTION".to_string(),
        _ => format_price(radio.price),
    }
}

fn action_row(radio: &Radio) -> String {
    match radio.status {
        Status::Sold => {
            let price = format_price(radio.price);
            format!(
                r#"
                            <span style="font-family: 'Playfair Display', serif; font-size: 1.5rem; color: var(--tube-glow); font-weight: 700; text-decoration: line-through; opacity: 0.5;">{price}</span>
                            <span style="font-family: 'IBM Plex Mono', monospace; padding: 0.5rem 1rem; font-size: 0.75rem; opacity: 0.5;" data-i18n="gallery.sold">Sold</span>"#
            )
        }
        Status::Collection => COLLECTION_ACTIONS.to_string(),
        // the subject embeds the model unescaped
        _ => {
            let price = format_price(radio.price);
            let model = &radio.model;
            format!(
                r#"
                            <span style="font-family: 'Playfair Display', serif; font-size: 1.5rem; color: var(--tube-glow); font-weight: 700;">{price}</span>
                            <a href="mailto:{CONTACT_EMAIL}?subject=Inquiry: {model}" style="font-family: 'IBM Plex Mono', monospace; background: transparent; border: 2px solid var(--copper); color: var(--radio-warm); padding: 0.5rem 1rem; text-transform: uppercase; letter-spacing: 0.15em; font-size: 0.75rem; text-decoration: none; transition: all 0.3s;" data-i18n="gallery.inquire">Inquire</a>"#
            )
        }
    }
}

pub fn render_card(radio: &Radio, position: usize) -> String {
    let sold = radio.status == Status::Sold;
    let status = radio.status.as_str();
    let position_relative = if sold { " position: relative;" } else { "" };
    let overlay = if sold { SOLD_RIBBON } else { "" };
    let image = &radio.image;
    let year = radio.year;
    let model = &radio.model;
    let key = desc_key(position);
    let desc_en = &radio.description_en;
    let actions = action_row(radio);

    format!(
        r#"
                    <div class="service-card" data-status="{status}" style="padding: 0; overflow: hidden; display: flex; flex-direction: column;{position_relative}">{overlay}
                        <div style="width: 100%; aspect-ratio: 4/3; overflow: hidden; flex-shrink: 0;">
                            <img src="{image}" alt="{year} {model}" style="width: 100%; height: 100%; object-fit: cover;">
                        </div>
                        <div style="padding: 1.5rem; display: flex; flex-direction: column; flex: 1;">
                            <div style="font-family: 'IBM Plex Mono', monospace; font-size: 0.85rem; color: var(--copper); text-transform: uppercase; letter-spacing: 0.2em; margin-bottom: 0.5rem;">{year}</div>
                            <h4 style="margin-bottom: 0.8rem;">{model}</h4>
                            <p style="margin-bottom: 0; font-size: 0.95rem; flex: 1;" data-i18n="{key}">{desc_en}</p>
                            <div style="display: flex; justify-content: space-between; align-items: center; padding-top: 1rem; margin-top: 1rem; border-top: 1px solid rgba(184, 115, 51, 0.3);">{actions}
                            </div>
                        </div>
                    </div>"#
    )
}

pub fn render_cards(radios: &[Radio]) -> Vec<String> {
    radios
        .iter()
        .enumerate()
        .map(|(i, r)| render_card(r, i + 1))
        .collect()
}

/// Marker-wrapped gallery body that replaces the span between the markers.
pub fn render_gallery(cards: &[String]) -> String {
    format!(
        "{GALLERY_START}\n                {}\n                {GALLERY_END}",
        cards.concat()
    )
}
