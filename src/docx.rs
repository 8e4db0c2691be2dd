//! Plain text extraction from DOCX documents.
//!
//! Only paragraph text survives: every `w:p` becomes one line made of its
//! `w:t` runs in document order. Tables, images and styling are dropped.

use log::debug;
use quick_xml::{
    events::Event,
    name::{Namespace, ResolveResult},
    NsReader,
};
use std::{fs, fs::File, io::Read, path::Path};
use zip::{result::ZipError, ZipArchive};

use crate::error::Error;

/// Archive entry holding the main document body.
pub const DOCUMENT_ENTRY: &str = "word/document.xml";

const WORDML_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Read the paragraphs of a DOCX file as trimmed, non-empty lines.
pub fn extract(path: &Path) -> Result<Vec<String>, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut xml = Vec::new();
    match archive.by_name(DOCUMENT_ENTRY) {
        Ok(mut entry) => {
            entry.read_to_end(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(Error::MissingEntry(DOCUMENT_ENTRY.to_string())),
        Err(err) => return Err(Error::Zip(err)),
    }
    debug!("{} is {} bytes", DOCUMENT_ENTRY, xml.len());

    paragraphs(&xml)
}

/// Collect paragraph lines from a WordprocessingML document body.
///
/// Paragraphs are reported in the order they open. Text inside a nested
/// paragraph (text boxes) also counts towards every enclosing paragraph.
pub fn paragraphs(xml: &[u8]) -> Result<Vec<String>, Error> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();

    let mut lines: Vec<String> = Vec::new();
    // Indices into `lines` of the paragraphs currently open.
    let mut open: Vec<usize> = Vec::new();
    let mut text_depth = 0usize;

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let in_wordml = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == WORDML_NS);

        match event {
            Event::Start(e) if in_wordml => match e.local_name().as_ref() {
                b"p" => {
                    open.push(lines.len());
                    lines.push(String::new());
                }
                b"t" => text_depth += 1,
                _ => (),
            },
            Event::Empty(e) if in_wordml && e.local_name().as_ref() == b"p" => {
                lines.push(String::new());
            }
            Event::End(e) if in_wordml => match e.local_name().as_ref() {
                b"p" => {
                    open.pop();
                }
                b"t" => text_depth = text_depth.saturating_sub(1),
                _ => (),
            },
            Event::Text(t) if text_depth > 0 => {
                let text = t.unescape()?;
                for &i in &open {
                    lines[i].push_str(&text);
                }
            }
            Event::CData(t) if text_depth > 0 => {
                let text = String::from_utf8_lossy(&t);
                for &i in &open {
                    lines[i].push_str(&text);
                }
            }
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    Ok(lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Write `lines` joined by newlines, replacing `path`. Returns the number of
/// bytes written.
pub fn write_text(path: &Path, lines: &[String]) -> Result<usize, Error> {
    let text = lines.join("\n");
    fs::write(path, &text)?;
    Ok(text.len())
}
