use crate::domain::constants::{GALLERY_END, GALLERY_START};
use crate::domain::errors::GalleryError;

/// Replaces the first `GALLERY_START` .. first `GALLERY_END` span (markers
/// included) with `gallery`, which must carry the markers itself.
pub fn splice_gallery(html: &str, gallery: &str, document: &str) -> Result<String, GalleryError> {
    let (start, end) = match (html.find(GALLERY_START), html.find(GALLERY_END)) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(GalleryError::MissingMarkers {
                start: GALLERY_START,
                end: GALLERY_END,
                document: document.to_string(),
            })
        }
    };
    if end < start {
        return Err(GalleryError::MarkersOutOfOrder {
            start: GALLERY_START,
            end: GALLERY_END,
            document: document.to_string(),
        });
    }
    log::debug!("gallery markers at {}..{}", start, end);

    let tail = end + GALLERY_END.len();
    let mut out = String::with_capacity(html.len() - (tail - start) + gallery.len());
    out.push_str(&html[..start]);
    out.push_str(gallery);
    out.push_str(&html[tail..]);
    Ok(out)
}
