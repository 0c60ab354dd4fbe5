/// 上传文件类型识别
///
/// 扩展名统一为小写并带点号（如 ".png"）。
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    let content_type = match extension.to_ascii_lowercase().as_str() {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".pdf" => "application/pdf",
        ".doc" => "application/msword",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(content_type)
}

/// 文件头魔术字节是否与扩展名一致，未知扩展名一律拒绝
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_ascii_lowercase().as_str() {
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        ".pdf" => data.starts_with(b"%PDF"),
        // OLE 复合文档
        ".doc" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        // OOXML 基于 zip
        ".docx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        _ => false,
    }
}

/// 根据魔术字节判断是否为站点可展示的图片
pub fn is_image(data: &[u8]) -> bool {
    [".png", ".jpg", ".gif", ".webp"]
        .iter()
        .any(|ext| validate_magic_bytes(data, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_magic() {
        assert!(validate_magic_bytes(&PNG, ".png"));
        assert!(validate_magic_bytes(&PNG, ".PNG"));
        assert!(!validate_magic_bytes(&PNG, ".jpg"));
    }

    #[test]
    fn test_webp_needs_full_header() {
        assert!(validate_magic_bytes(b"RIFF\x00\x00\x00\x00WEBPVP8 ", ".webp"));
        assert!(!validate_magic_bytes(b"RIFF", ".webp"));
    }

    #[test]
    fn test_renamed_pdf_rejected_as_image() {
        let pdf = b"%PDF-1.7";
        assert!(validate_magic_bytes(pdf, ".pdf"));
        assert!(!validate_magic_bytes(pdf, ".png"));
        assert!(!is_image(pdf));
        assert!(is_image(&PNG));
    }

    #[test]
    fn test_unknown_or_empty() {
        assert!(!validate_magic_bytes(&[], ".png"));
        assert!(!validate_magic_bytes(b"MZ\x90\x00", ".exe"));
        assert_eq!(content_type_for(".exe"), None);
        assert_eq!(content_type_for(".JPG"), Some("image/jpeg"));
    }
}
