//! C header emitter.
//!
//! Renders a packed 1bpp buffer as a `static const uint8_t` array with the
//! module count, stride and length exposed as `#define`s. The constants are
//! recomputed here from the module count instead of being taken from the
//! packer, so a buffer from any other packing scheme is rejected.

use log::{debug, info};
use std::{fs, path::Path};

use crate::{
    error::Error,
    pack::{packed_len, stride},
    BITMAP_32_LEN, BITMAP_32_SIDE,
};

/// Hex literals per initializer line.
const BYTES_PER_LINE: usize = 16;

/// Names and comment text used when rendering a header.
///
/// Start from one of the presets and adjust with the builder methods.
///
/// # Example
///
/// ```
/// use fw_assets::HeaderLayout;
///
/// let layout = HeaderLayout::qr_modules()
///     .array_name("wifi_qr_bits")
///     .length_macro("WIFI_QR_BITS_LEN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    description: Vec<String>,
    count_macro: String,
    stride_macro: String,
    length_macro: String,
    array_name: String,
}

impl HeaderLayout {
    /// Layout for a raw QR module matrix, scaled by the firmware at draw time.
    pub fn qr_modules() -> HeaderLayout {
        HeaderLayout {
            description: vec![
                "QR module matrix (1bpp).".to_string(),
                "- Layout: row-major, MSB-first, stride=ceil(N/8) bytes".to_string(),
                "- Value:  1 = black module".to_string(),
            ],
            count_macro: "QR_MODULES".to_string(),
            stride_macro: "QR_STRIDE_BYTES".to_string(),
            length_macro: "QR_BITS_LEN".to_string(),
            array_name: "qr_module_bits".to_string(),
        }
    }

    /// Layout for a pre-rendered 32x32 bitmap.
    pub fn bitmap_32x32() -> HeaderLayout {
        HeaderLayout {
            description: vec![
                "32x32 QR code bitmap (1bpp).".to_string(),
                "- Layout: row-major, MSB-first, 4 bytes per row".to_string(),
                "- Value:  1 = black pixel".to_string(),
            ],
            count_macro: "QR_32X32_SIZE".to_string(),
            stride_macro: "QR_32X32_STRIDE_BYTES".to_string(),
            length_macro: "QR_32X32_BITS_LEN".to_string(),
            array_name: "qr_32x32_bits".to_string(),
        }
    }

    /// Replace the descriptive comment lines.
    pub fn description<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HeaderLayout {
            description: lines.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn count_macro(self, name: &str) -> Self {
        HeaderLayout {
            count_macro: name.to_string(),
            ..self
        }
    }

    pub fn stride_macro(self, name: &str) -> Self {
        HeaderLayout {
            stride_macro: name.to_string(),
            ..self
        }
    }

    pub fn length_macro(self, name: &str) -> Self {
        HeaderLayout {
            length_macro: name.to_string(),
            ..self
        }
    }

    pub fn array_name(self, name: &str) -> Self {
        HeaderLayout {
            array_name: name.to_string(),
            ..self
        }
    }
}

/// Split every `*/` so the label cannot close the surrounding comment.
pub fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Render the header text for an `n`x`n` grid packed into `bytes`.
///
/// Fails with [`Error::SizeMismatch`] unless `bytes.len() == n * ceil(n/8)`.
pub fn render(
    layout: &HeaderLayout,
    n: usize,
    bytes: &[u8],
    content: &str,
) -> Result<String, Error> {
    let stride = stride(n);
    let expected = packed_len(n);
    if bytes.len() != expected || n == 0 {
        return Err(Error::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let mut out = String::with_capacity(256 + bytes.len() * 6);
    out.push_str("#pragma once\n\n");
    out.push_str("#include <stdint.h>\n\n");
    out.push_str("/*\n");
    for line in &layout.description {
        out.push_str(" * ");
        out.push_str(&escape_comment(line));
        out.push('\n');
    }
    out.push_str(" * - Content: ");
    out.push_str(&escape_comment(content));
    out.push('\n');
    out.push_str(" */\n\n");

    out.push_str(&format!("#define {} {}\n", layout.count_macro, n));
    out.push_str(&format!("#define {} {}\n", layout.stride_macro, stride));
    out.push_str(&format!("#define {} {}\n", layout.length_macro, expected));
    out.push('\n');
    out.push_str(&format!(
        "static const uint8_t {}[{}] = {{\n",
        layout.array_name, layout.length_macro
    ));

    for chunk in bytes.chunks(BYTES_PER_LINE) {
        let hexes: Vec<String> = chunk.iter().map(|b| format!("0x{:02X}", b)).collect();
        out.push_str("    ");
        out.push_str(&hexes.join(", "));
        out.push_str(",\n");
    }
    out.push_str("};\n");

    debug!(
        "rendered header {} with {} lines of data",
        layout.array_name,
        (bytes.len() + BYTES_PER_LINE - 1) / BYTES_PER_LINE
    );
    Ok(out)
}

/// Render the header and write it to `path`, replacing any existing file.
///
/// Nothing is written when validation fails.
pub fn emit(
    path: &Path,
    layout: &HeaderLayout,
    n: usize,
    bytes: &[u8],
    content: &str,
) -> Result<(), Error> {
    let text = render(layout, n, bytes, content)?;
    fs::write(path, text)?;
    info!("wrote {} ({} bytes of data)", path.display(), bytes.len());
    Ok(())
}

/// Write the header for a 32x32 bitmap.
///
/// The dimensions are fixed, so only the buffer length is checked.
pub fn emit_bitmap_32(path: &Path, bytes: &[u8], content: &str) -> Result<(), Error> {
    if bytes.len() != BITMAP_32_LEN {
        return Err(Error::SizeMismatch {
            expected: BITMAP_32_LEN,
            actual: bytes.len(),
        });
    }
    emit(
        path,
        &HeaderLayout::bitmap_32x32(),
        BITMAP_32_SIDE,
        bytes,
        content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::pack;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fw-assets-header-{}-{}", std::process::id(), name))
    }

    #[test]
    fn single_module_header_is_byte_exact() {
        let text = render(&HeaderLayout::qr_modules(), 1, &[0x80], "x").unwrap();
        let expected = "#pragma once\n\
            \n\
            #include <stdint.h>\n\
            \n\
            /*\n \
            * QR module matrix (1bpp).\n \
            * - Layout: row-major, MSB-first, stride=ceil(N/8) bytes\n \
            * - Value:  1 = black module\n \
            * - Content: x\n \
            */\n\
            \n\
            #define QR_MODULES 1\n\
            #define QR_STRIDE_BYTES 1\n\
            #define QR_BITS_LEN 1\n\
            \n\
            static const uint8_t qr_module_bits[QR_BITS_LEN] = {\n    \
            0x80,\n\
            };\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn sixteen_bytes_per_line_with_trailing_commas() {
        // 17x17 grid: stride 3, 51 bytes -> 3 full lines + 3 bytes.
        let bytes: Vec<u8> = (0..51).collect();
        let text = render(&HeaderLayout::qr_modules(), 17, &bytes, "abc").unwrap();
        let data_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("static const"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();
        assert_eq!(data_lines.len(), 4);
        for line in &data_lines[..3] {
            assert_eq!(line.matches("0x").count(), 16);
        }
        assert_eq!(data_lines[3], "    0x30, 0x31, 0x32,");
        assert!(data_lines.iter().all(|l| l.ends_with(',')));
        assert!(data_lines[0].starts_with("    0x00, 0x01, 0x02"));
        assert!(data_lines[0].contains("0x0A, 0x0B"), "hex must be uppercase");
        assert!(text.contains("#define QR_MODULES 17\n"));
        assert!(text.contains("#define QR_STRIDE_BYTES 3\n"));
        assert!(text.contains("#define QR_BITS_LEN 51\n"));
    }

    #[test]
    fn comment_terminator_in_content_is_split() {
        let text = render(&HeaderLayout::qr_modules(), 1, &[0x00], "a*/b */ c").unwrap();
        assert!(text.contains(" * - Content: a*\\/b *\\/ c\n"));
        // Only the real closing line ends the comment.
        assert_eq!(text.matches("*/").count(), 1);
    }

    #[test]
    fn buffer_from_other_scheme_is_rejected() {
        // 9x9 needs 18 bytes, not 81/8 rounded up.
        let err = render(&HeaderLayout::qr_modules(), 9, &[0u8; 11], "").unwrap_err();
        match err {
            Error::SizeMismatch { expected, actual } => assert_eq!((expected, actual), (18, 11)),
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn zero_modules_is_rejected() {
        assert!(matches!(
            render(&HeaderLayout::qr_modules(), 0, &[], ""),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn custom_layout_names_are_used() {
        let layout = HeaderLayout::qr_modules()
            .description(["Pairing code."])
            .count_macro("PAIR_N")
            .stride_macro("PAIR_STRIDE")
            .length_macro("PAIR_LEN")
            .array_name("pair_bits");
        let text = render(&layout, 2, &[0xC0, 0x40], "id").unwrap();
        assert!(text.contains("/*\n * Pairing code.\n * - Content: id\n */\n"));
        assert!(text.contains("#define PAIR_N 2\n#define PAIR_STRIDE 1\n#define PAIR_LEN 2\n"));
        assert!(text.contains("static const uint8_t pair_bits[PAIR_LEN] = {\n    0xC0, 0x40,\n};\n"));
    }

    #[test]
    fn emit_is_deterministic() {
        let grid: Vec<Vec<bool>> = (0..21)
            .map(|y| (0..21).map(|x| (x * y) % 3 == 0).collect())
            .collect();
        let packed = pack(&grid).unwrap();
        let first = temp_path("det-a.h");
        let second = temp_path("det-b.h");
        let layout = HeaderLayout::qr_modules();
        emit(&first, &layout, packed.modules(), packed.bytes(), "hello").unwrap();
        emit(&second, &layout, packed.modules(), packed.bytes(), "hello").unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
        fs::remove_file(first).ok();
        fs::remove_file(second).ok();
    }

    #[test]
    fn failed_validation_leaves_existing_file_untouched() {
        let path = temp_path("keep.h");
        fs::write(&path, "previous").unwrap();
        assert!(emit(&path, &HeaderLayout::qr_modules(), 4, &[0; 3], "").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
        fs::remove_file(path).ok();
    }

    #[test]
    fn bitmap_32_all_white() {
        let path = temp_path("white32.h");
        emit_bitmap_32(&path, &[0u8; 128], "white.png").unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("#define QR_32X32_SIZE 32\n"));
        assert!(text.contains("#define QR_32X32_STRIDE_BYTES 4\n"));
        assert!(text.contains("#define QR_32X32_BITS_LEN 128\n"));
        assert!(text.contains("static const uint8_t qr_32x32_bits[QR_32X32_BITS_LEN] = {\n"));
        assert_eq!(text.matches("0x00").count(), 128);
        assert_eq!(text.lines().filter(|l| l.starts_with("    0x")).count(), 8);
        fs::remove_file(path).ok();
    }

    #[test]
    fn bitmap_32_wrong_length_is_rejected() {
        let path = temp_path("short32.h");
        let err = emit_bitmap_32(&path, &[0u8; 127], "").unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 128,
                actual: 127
            }
        ));
        assert!(!path.exists());
    }
}
