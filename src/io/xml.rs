//! Band plan XML reader.
//!
//! Every `RangeEntry` element in the document, at any depth, becomes one
//! [`RangeEntry`]. The entry name is all text and CDATA inside the element,
//! unescaped and untrimmed.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::core::entries::RangeEntry;
use crate::core::errors::{BandplanError, Result};

const RANGE_ENTRY: &[u8] = b"RangeEntry";

/// Read and parse a band plan file.
pub async fn read_range_entries(path: &Path) -> Result<Vec<RangeEntry>> {
    let bytes = tokio::fs::read(path).await.map_err(|err| {
        BandplanError::io(
            format!("Failed to read band plan at {}", path.display()),
            err,
        )
    })?;
    parse_range_entries(&bytes)
}

/// Extract all `RangeEntry` elements from an XML document.
pub fn parse_range_entries(bytes: &[u8]) -> Result<Vec<RangeEntry>> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut entries: Vec<RangeEntry> = Vec::new();
    // Indices into `entries` of the elements currently open.
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) if tag.name().as_ref() == RANGE_ENTRY => {
                open.push(entries.len());
                entries.push(entry_from_tag(&tag));
            }
            Ok(Event::Empty(tag)) if tag.name().as_ref() == RANGE_ENTRY => {
                entries.push(entry_from_tag(&tag));
            }
            Ok(Event::End(tag)) if tag.name().as_ref() == RANGE_ENTRY => {
                open.pop();
            }
            Ok(Event::Text(text)) if !open.is_empty() => {
                let text = text.unescape().map_err(|err| {
                    BandplanError::parse_at(
                        "xml",
                        format!("Invalid text in RangeEntry: {err}"),
                        reader.buffer_position() as u64,
                    )
                })?;
                append_name(&mut entries, &open, &text);
            }
            Ok(Event::CData(data)) if !open.is_empty() => {
                append_name(&mut entries, &open, &String::from_utf8_lossy(&data));
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(BandplanError::parse_at(
                    "xml",
                    format!("Failed to parse band plan XML: {err}"),
                    reader.buffer_position() as u64,
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(BandplanError::parse_at(
            "xml",
            "Document ended inside a RangeEntry element",
            reader.buffer_position() as u64,
        ));
    }

    debug!(count = entries.len(), "Parsed range entries");
    Ok(entries)
}

fn entry_from_tag(tag: &BytesStart<'_>) -> RangeEntry {
    RangeEntry {
        name: String::new(),
        min_frequency: attribute_value(tag, b"minFrequency"),
        max_frequency: attribute_value(tag, b"maxFrequency"),
        mode: attribute_value(tag, b"mode"),
        step: attribute_value(tag, b"step"),
    }
}

fn append_name(entries: &mut [RangeEntry], open: &[usize], text: &str) {
    for &index in open {
        entries[index].name.push_str(text);
    }
}

fn attribute_value(tag: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    tag.attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(Cow::into_owned))
}
