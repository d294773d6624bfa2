use std::fmt;
use std::fs;
use std::path::Path;
use encoding_rs::{Encoding, BIG5, GBK, UTF_16BE, UTF_16LE, UTF_8};
use log::debug;

use crate::errors::SubtitleError;

// @module: Text decoding with prioritized encoding candidates

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text encodings tried when reading a subtitle file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Gbk,
    Gb2312,
    Big5,
    Utf16,
}

impl TextEncoding {
    /// Candidates in priority order, earlier entries win
    pub const CANDIDATES: [TextEncoding; 6] = [
        TextEncoding::Utf8,
        TextEncoding::Utf8Bom,
        TextEncoding::Gbk,
        TextEncoding::Gb2312,
        TextEncoding::Big5,
        TextEncoding::Utf16,
    ];

    // @returns: Conventional encoding label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-sig",
            Self::Gbk => "gbk",
            Self::Gb2312 => "gb2312",
            Self::Big5 => "big5",
            Self::Utf16 => "utf-16",
        }
    }

    /// Strictly decode the whole buffer, returning `None` on any malformed sequence
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                if bytes.starts_with(UTF8_BOM) {
                    return None;
                }
                decode_strict(UTF_8, bytes)
            }
            Self::Utf8Bom => bytes
                .strip_prefix(UTF8_BOM)
                .and_then(|rest| decode_strict(UTF_8, rest)),
            // GB2312 is a subset of GBK, so the GBK table covers both
            Self::Gbk | Self::Gb2312 => decode_strict(GBK, bytes),
            Self::Big5 => decode_strict(BIG5, bytes),
            Self::Utf16 => {
                if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
                    decode_strict(UTF_16LE, rest)
                } else if let Some(rest) = bytes.strip_prefix(UTF16BE_BOM) {
                    decode_strict(UTF_16BE, rest)
                } else {
                    decode_strict(UTF_16LE, bytes)
                }
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// Text decoded from a subtitle file along with the encoding that worked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub encoding: TextEncoding,
    pub text: String,
}

impl DecodedText {
    /// Split into lines on `\r\n`, `\r` or `\n`, dropping the terminators
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }
}

/// Universal newline split: `\r\n`, lone `\r` and `\n` all end a line
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Try every candidate encoding in order; the first clean decode wins
pub fn decode_bytes(bytes: &[u8]) -> Option<DecodedText> {
    TextEncoding::CANDIDATES.iter().find_map(|encoding| {
        encoding.decode(bytes).map(|text| DecodedText {
            encoding: *encoding,
            text,
        })
    })
}

/// Read a subtitle file and decode it with the first encoding that fits
pub fn read_subtitle_text<P: AsRef<Path>>(path: P) -> Result<DecodedText, SubtitleError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| SubtitleError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match decode_bytes(&bytes) {
        Some(decoded) => {
            debug!("Decoded {:?} as {}", path, decoded.encoding);
            Ok(decoded)
        }
        None => Err(SubtitleError::Decode {
            path: path.to_path_buf(),
        }),
    }
}
