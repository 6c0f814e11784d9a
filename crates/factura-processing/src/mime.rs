//! Image MIME detection from raw bytes.

/// Sniff the MIME type of raw bytes using magic numbers.
///
/// Detection is content-based: filenames and declared content types are
/// ignored by the extraction pipeline. Returns `None` when the bytes are not
/// a recognized image format, which is the gate that keeps non-images away
/// from the extraction model.
pub fn sniff_image_mime(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }

    // JPEG: FF D8 FF
    if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47
    if data[0] == 0x89 && data[1] == 0x50 && data[2] == 0x4E && data[3] == 0x47 {
        return Some("image/png");
    }

    // GIF: GIF8
    if data.starts_with(b"GIF8") {
        return Some("image/gif");
    }

    // WebP: RIFF ... WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // TIFF: II*\0 (little endian) or MM\0* (big endian)
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return Some("image/tiff");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(
            sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some("image/jpeg")
        );
    }

    #[test]
    fn test_sniff_png() {
        assert_eq!(
            sniff_image_mime(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            Some("image/png")
        );
    }

    #[test]
    fn test_sniff_gif() {
        assert_eq!(sniff_image_mime(b"GIF89a"), Some("image/gif"));
    }

    #[test]
    fn test_sniff_webp() {
        let mut data = Vec::new();
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&[0x10, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WEBP");
        assert_eq!(sniff_image_mime(&data), Some("image/webp"));
    }

    #[test]
    fn test_sniff_bmp_and_tiff() {
        assert_eq!(sniff_image_mime(b"BM\x00\x00"), Some("image/bmp"));
        assert_eq!(
            sniff_image_mime(&[0x49, 0x49, 0x2A, 0x00]),
            Some("image/tiff")
        );
        assert_eq!(
            sniff_image_mime(&[0x4D, 0x4D, 0x00, 0x2A]),
            Some("image/tiff")
        );
    }

    #[test]
    fn test_non_image_bytes_are_rejected() {
        assert_eq!(sniff_image_mime(b"just some text, not an image"), None);
        assert_eq!(sniff_image_mime(b"%PDF-1.4 not an image either"), None);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        assert_eq!(sniff_image_mime(&[]), None);
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8]), None);
    }
}
