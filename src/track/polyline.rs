//! Google polyline algorithm: signed coordinate deltas packed into printable ASCII.
//!
//! Each value is zig-zag encoded, split into 5-bit chunks (least significant first), and each
//! chunk is emitted as `chunk + 63`, with `0x20` set on every chunk except the last.

use crate::foundation::error::{TracemapError, TracemapResult};
use crate::track::model::Track;

/// Coordinates are stored as integers of `degrees * PRECISION`.
pub const PRECISION: f64 = 100_000.0;

const CHAR_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
// 7 chunks hold 35 bits, enough for any 32-bit value.
const MAX_CHUNKS: u32 = 7;

/// Decode an encoded path into a shifted [`Track`].
///
/// `decode("")` is an empty track. Truncated or malformed input fails with
/// [`TracemapError::Format`] and no points are returned.
pub fn decode(encoded: &str) -> TracemapResult<Track> {
    let points = decode_points(encoded)?;
    Track::from_degrees(points)
}

/// Decode an encoded path into absolute `(lat, lon)` degrees.
pub fn decode_points(encoded: &str) -> TracemapResult<Vec<(f64, f64)>> {
    let mut reader = ValueReader {
        bytes: encoded.as_bytes(),
        pos: 0,
    };
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut out = Vec::new();

    while !reader.is_empty() {
        lat += reader.next_value()?;
        if reader.is_empty() {
            return Err(TracemapError::format(
                reader.pos,
                "encoded path ends after a latitude with no longitude",
            ));
        }
        lon += reader.next_value()?;
        out.push((lat as f64 / PRECISION, lon as f64 / PRECISION));
    }

    Ok(out)
}

/// Encode absolute `(lat, lon)` degrees, rounding each coordinate to 5 decimals.
pub fn encode(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;
    for &(lat, lon) in points {
        let lat = (lat * PRECISION).round() as i64;
        let lon = (lon * PRECISION).round() as i64;
        write_value(&mut out, lat - prev_lat);
        write_value(&mut out, lon - prev_lon);
        prev_lat = lat;
        prev_lon = lon;
    }
    out
}

fn write_value(out: &mut String, delta: i64) {
    let mut v = if delta < 0 {
        !(delta << 1) as u64
    } else {
        (delta << 1) as u64
    };
    while v >= CONTINUATION {
        out.push(char::from((CONTINUATION | (v & CHUNK_MASK)) as u8 + CHAR_OFFSET));
        v >>= CHUNK_BITS;
    }
    out.push(char::from(v as u8 + CHAR_OFFSET));
}

struct ValueReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl ValueReader<'_> {
    fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn next_value(&mut self) -> TracemapResult<i64> {
        let start = self.pos;
        let mut result = 0u64;
        let mut chunks = 0u32;
        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(TracemapError::format(
                    self.pos,
                    "encoded path ends in the middle of a value",
                ));
            };
            if !(b'?'..=b'~').contains(&byte) {
                return Err(TracemapError::format(
                    self.pos,
                    format!("byte 0x{byte:02x} is outside the polyline alphabet"),
                ));
            }
            if chunks == MAX_CHUNKS {
                return Err(TracemapError::format(
                    start,
                    format!("value longer than {MAX_CHUNKS} chunks"),
                ));
            }

            let chunk = u64::from(byte - CHAR_OFFSET);
            result |= (chunk & CHUNK_MASK) << (chunks * CHUNK_BITS);
            chunks += 1;
            self.pos += 1;
            if chunk & CONTINUATION == 0 {
                break;
            }
        }

        let magnitude = (result >> 1) as i64;
        Ok(if result & 1 == 1 {
            !magnitude
        } else {
            magnitude
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/polyline.rs"]
mod tests;
