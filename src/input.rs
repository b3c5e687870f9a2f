//! Input stream module
//!
//! Reads standard input to the end, works out its encoding and splits it into
//! lines with the terminators removed.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::io::Read;

/// Result of encoding detection
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark to skip, if any
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of a buffer: BOM first, then UTF-8, then a guess
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            encoding,
            bom_len,
        };
    }

    if std::str::from_utf8(content).is_ok() || has_utf8_multibyte(content) {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        encoding,
        bom_len: 0,
    }
}

/// Whether the buffer holds at least one valid non-ASCII UTF-8 sequence
///
/// Such input is UTF-8 with a few bad bytes, not legacy text, and is decoded
/// lossily instead of transcoded.
fn has_utf8_multibyte(content: &[u8]) -> bool {
    content.utf8_chunks().any(|chunk| !chunk.valid().is_ascii())
}

/// Decode a buffer to UTF-8 text using the given encoding
pub fn decode<'a>(content: &'a [u8], info: &EncodingInfo) -> Cow<'a, str> {
    let body = &content[info.bom_len..];

    if info.encoding == encoding_rs::UTF_8 {
        return match std::str::from_utf8(body) {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => {
                log::warn!("Input is not valid UTF-8, using lossy conversion");
                String::from_utf8_lossy(body)
            }
        };
    }

    let (decoded, had_errors) = info.encoding.decode_without_bom_handling(body);
    if had_errors {
        log::warn!("Encoding errors in {} input, using lossy conversion", info.name);
    } else {
        log::warn!("Input transcoded from {} to UTF-8", info.name);
    }
    decoded
}

/// Split text into lines, dropping `\n` and a preceding `\r`
///
/// A trailing terminator does not start an extra empty line; a final line
/// without one is still returned.
pub fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr::memchr_iter(b'\n', bytes) {
        lines.push(strip_cr(&text[start..end]).to_string());
        start = end + 1;
    }

    if start < bytes.len() {
        lines.push(strip_cr(&text[start..]).to_string());
    }

    lines
}

#[inline]
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// A fully materialized stream of input lines
#[derive(Debug, Clone, Default)]
pub struct LineStream {
    pub lines: Vec<String>,
    pub bytes_read: u64,
    pub encoding: EncodingInfo,
}

impl LineStream {
    /// Read everything from `reader` and split it into lines
    pub fn read_from<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let encoding = detect_encoding(&content);
        let lines = split_lines(&decode(&content, &encoding));

        Ok(Self {
            lines,
            bytes_read: content.len() as u64,
            encoding,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
