//! MIME type inference for uploaded photos

pub const IMAGE_PNG: &str = "image/png";
pub const IMAGE_JPEG: &str = "image/jpeg";

/// Infer the MIME type of a photo from its file name.
///
/// `.png` (any case) is `image/png`; everything else, including names
/// without an extension, is sent as `image/jpeg`.
pub fn infer_image_mime(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => IMAGE_PNG,
        _ => IMAGE_JPEG,
    }
}
