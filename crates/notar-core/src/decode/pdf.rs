//! PDF fragment decoding using lopdf.
//!
//! Walks the first page's content stream and emits one [`TextFragment`]
//! per show-text operation, with coordinates converted from PDF points
//! to the page-unit system the zone catalog is written in: top-left
//! origin, [`PAGE_UNIT`] points per unit.
//!
//! Graphics-state transforms (`cm`) and glyph-level metrics are
//! ignored; the target template positions its text with `Td`/`Tm`
//! only, which is all the zone test needs.

use std::path::Path;

use lopdf::content::Content;
use lopdf::{Document, Object};
use tracing::{debug, trace};

use super::{DecodedPage, PageDecoder};
use crate::error::DecodeError;
use crate::models::TextFragment;

/// PDF points per page unit.
pub const PAGE_UNIT: f32 = 4.0;

/// Fallback page height (A4, in points) when the page carries no
/// MediaBox of its own.
const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Production decoder for the PDF documents this system ingests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfFragmentDecoder;

impl PdfFragmentDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PageDecoder for PdfFragmentDecoder {
    fn decode_first_page(&self, path: &Path) -> Result<DecodedPage, DecodeError> {
        let doc = Document::load(path).map_err(|e| DecodeError::Parse(e.to_string()))?;

        let pages = doc.get_pages();
        let (_, first_page_id) = pages.iter().next().ok_or(DecodeError::NoPages)?;

        let page_height = page_height(&doc, *first_page_id);

        let content_data = doc
            .get_page_content(*first_page_id)
            .map_err(|e| DecodeError::Content(e.to_string()))?;
        let content =
            Content::decode(&content_data).map_err(|e| DecodeError::Content(e.to_string()))?;

        let fragments = walk_content(&content, page_height);
        debug!(
            path = %path.display(),
            fragments = fragments.len(),
            "decoded first page"
        );

        Ok(DecodedPage { fragments })
    }
}

/// Walk the content stream tracking the text line position, emitting a
/// fragment per show-text operation.
fn walk_content(content: &Content, page_height: f32) -> Vec<TextFragment> {
    let mut fragments = Vec::new();

    let mut line_x = 0.0f32;
    let mut line_y = 0.0f32;
    let mut leading = 0.0f32;

    let mut show = |x: f32, y: f32, text: String| {
        if text.is_empty() {
            return;
        }
        let fragment = TextFragment::new(
            x / PAGE_UNIT,
            (page_height - y) / PAGE_UNIT,
            urlencoding::encode(&text).into_owned(),
        );
        trace!(x = fragment.x, y = fragment.y, text = %fragment.text, "show text");
        fragments.push(fragment);
    };

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                line_x = 0.0;
                line_y = 0.0;
            }
            "Tm" => {
                if let (Some(e), Some(f)) = (number(op.operands.get(4)), number(op.operands.get(5)))
                {
                    line_x = e;
                    line_y = f;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) =
                    (number(op.operands.first()), number(op.operands.get(1)))
                {
                    line_x += tx;
                    line_y += ty;
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) =
                    (number(op.operands.first()), number(op.operands.get(1)))
                {
                    leading = -ty;
                    line_x += tx;
                    line_y += ty;
                }
            }
            "TL" => {
                if let Some(l) = number(op.operands.first()) {
                    leading = l;
                }
            }
            "T*" => {
                line_y -= leading;
            }
            "Tj" => {
                if let Some(text) = string_operand(op.operands.first()) {
                    show(line_x, line_y, text);
                }
            }
            "'" => {
                line_y -= leading;
                if let Some(text) = string_operand(op.operands.first()) {
                    show(line_x, line_y, text);
                }
            }
            "\"" => {
                line_y -= leading;
                if let Some(text) = string_operand(op.operands.get(2)) {
                    show(line_x, line_y, text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(parts)) = op.operands.first() {
                    let text: String = parts
                        .iter()
                        .filter_map(|part| match part {
                            Object::String(bytes, _) => Some(decode_text_bytes(bytes)),
                            _ => None,
                        })
                        .collect();
                    show(line_x, line_y, text);
                }
            }
            _ => {}
        }
    }

    fragments
}

fn page_height(doc: &Document, page_id: lopdf::ObjectId) -> f32 {
    doc.get_dictionary(page_id)
        .ok()
        .and_then(|dict| dict.get(b"MediaBox").ok())
        .and_then(|obj| obj.as_array().ok())
        .and_then(|media_box| number(media_box.get(3)))
        .unwrap_or(DEFAULT_PAGE_HEIGHT)
}

fn number(obj: Option<&Object>) -> Option<f32> {
    match obj {
        Some(Object::Integer(i)) => Some(*i as f32),
        Some(Object::Real(r)) => Some(*r as f32),
        _ => None,
    }
}

fn string_operand(obj: Option<&Object>) -> Option<String> {
    match obj {
        Some(Object::String(bytes, _)) => Some(decode_text_bytes(bytes)),
        _ => None,
    }
}

/// Decode string-object bytes: UTF-16BE when BOM-prefixed, Latin-1
/// otherwise. The target template is ASCII-adjacent, so font encoding
/// tables are not consulted.
fn decode_text_bytes(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let code_units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&code_units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
