//! I/O for the raw binary RGB bitmap format, plus a JSON report helper.
//!
//! - `read_ppm` / `decode_ppm`: parse the fixed header (magic token, width and
//!   height, max channel value) followed by `width * height * 3` raw bytes.
//! - `write_ppm` / `encode_ppm`: re-emit the three header lines and the raw
//!   pixel bytes; comments are never re-emitted.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgb::{Rgb, RgbImageU8};
use super::traits::ImageView;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Two-character magic token identifying "raw 8-bit RGB, binary".
const PPM_MAGIC: [u8; 2] = *b"P6";

/// The only channel depth the format supports.
const MAX_CHANNEL_VALUE: usize = 255;

/// Read and decode a bitmap from disk.
pub fn read_ppm(path: &Path) -> Result<RgbImageU8, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    decode_ppm(&bytes).map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Encode and write a bitmap to disk, creating parent directories.
pub fn write_ppm(path: &Path, image: &RgbImageU8) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, encode_ppm(image))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Decode a bitmap from raw file bytes.
///
/// Lines beginning with `#` anywhere before the pixel data are skipped.
/// Exactly one whitespace byte separates the max-value token from the pixel
/// bytes. A max channel value other than 255 is rejected.
pub fn decode_ppm(bytes: &[u8]) -> Result<RgbImageU8, String> {
    if bytes.len() < 2 || bytes[..2] != PPM_MAGIC {
        return Err("invalid image format (must be 'P6')".to_string());
    }
    let mut cursor = HeaderCursor { bytes, pos: 2 };

    let w = cursor.next_int("width")?;
    let h = cursor.next_int("height")?;
    if w == 0 || h == 0 {
        return Err(format!("invalid image size {w}x{h}"));
    }
    let max_value = cursor.next_int("max channel value")?;
    if max_value != MAX_CHANNEL_VALUE {
        return Err(format!(
            "unsupported channel depth {max_value} (expected {MAX_CHANNEL_VALUE})"
        ));
    }

    match bytes.get(cursor.pos) {
        Some(b) if b.is_ascii_whitespace() => cursor.pos += 1,
        _ => return Err("missing separator after max channel value".to_string()),
    }

    let expected = w
        .checked_mul(h)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| format!("image size {w}x{h} overflows"))?;
    let pixel_bytes = &bytes[cursor.pos..];
    if pixel_bytes.len() < expected {
        return Err(format!(
            "truncated pixel data: expected {expected} bytes, found {}",
            pixel_bytes.len()
        ));
    }

    let mut data = Vec::with_capacity(w * h);
    for px in pixel_bytes[..expected].chunks_exact(3) {
        data.push(Rgb {
            r: px[0],
            g: px[1],
            b: px[2],
        });
    }
    Ok(RgbImageU8::from_pixels(w, h, data))
}

/// Encode a bitmap into the on-disk byte layout.
pub fn encode_ppm(image: &RgbImageU8) -> Vec<u8> {
    let header = format!("P6\n{} {}\n{MAX_CHANNEL_VALUE}\n", image.w, image.h);
    let mut out = Vec::with_capacity(header.len() + image.w * image.h * 3);
    out.extend_from_slice(header.as_bytes());
    for row in image.rows() {
        for px in row {
            out.push(px.r);
            out.push(px.g);
            out.push(px.b);
        }
    }
    out
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    /// Skip whitespace and `#` comment lines before the next header token.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.bytes.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_int(&mut self, what: &str) -> Result<usize, String> {
        self.skip_separators();
        let start = self.pos;
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(format!("invalid {what} in header"));
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| format!("invalid {what} in header"))
    }
}
