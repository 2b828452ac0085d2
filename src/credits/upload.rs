// Markdown upload checks. The extension is checked before any read starts.
use crate::error::WidgetError;

pub fn check_extension(name: &str) -> Result<(), WidgetError> {
    if name.ends_with(".md") {
        Ok(())
    } else {
        Err(WidgetError::InvalidFile {
            name: name.to_string(),
        })
    }
}

/// Accepts the reader result only when it is text without NUL bytes.
pub fn decode_text(name: &str, content: Option<String>) -> Result<String, WidgetError> {
    match content {
        Some(text) if !text.contains('\0') => Ok(text),
        _ => Err(WidgetError::UnreadableFile {
            name: name.to_string(),
        }),
    }
}

/// Byte-level variant of [`decode_text`] for hosts that hand over raw bytes.
pub fn decode_bytes(name: &str, bytes: Vec<u8>) -> Result<String, WidgetError> {
    decode_text(name, String::from_utf8(bytes).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_md_extension_passes() {
        assert!(check_extension("cast.md").is_ok());
        assert!(check_extension("notes.txt").is_err());
        assert!(check_extension("md").is_err());
        assert!(check_extension("cast.md.bak").is_err());
    }

    #[test]
    fn binary_content_is_unreadable() {
        assert_eq!(decode_bytes("a.md", b"# Cast".to_vec()), Ok("# Cast".into()));
        assert!(decode_bytes("a.md", vec![0xff, 0xfe, 0x00]).is_err());
        assert!(decode_text("a.md", Some("a\0b".into())).is_err());
        assert!(decode_text("a.md", None).is_err());
    }
}
