//! Report frame serialization
//!
//! Frame format (text, CRLF-terminated):
//!
//! ```text
//! BEGIN,SENSOR_<id>,<sample_0>,<sample_1>,...,<sample_N-1>,END\r\n
//! ```
//!
//! `<id>` and every sample are unsigned decimal; every value is
//! comma-terminated, including the last sample before `END`.
//!
//! Encoding is bounded by the caller's staging slice and truncates at
//! token granularity: a frame never overruns the slice, never contains
//! a partial decimal token, and always ends with the terminator when
//! the slice can hold one at all.

/// Frame opening marker, up to the sensor id
pub const FRAME_HEADER: &[u8] = b"BEGIN,SENSOR_";

/// Frame closing marker including the line break
pub const FRAME_TERMINATOR: &[u8] = b"END\r\n";

/// Encode a report frame into `out`, returning the bytes written
///
/// Truncates at a token boundary if `out` cannot hold every sample
/// (see [`staging_capacity`] for the capacity that never truncates).
/// An `out` too small for even the terminator yields an empty frame.
///
/// [`staging_capacity`]: crate::config::staging_capacity
pub fn encode_frame(sensor: u8, samples: &[u16], out: &mut [u8]) -> usize {
    if out.len() < FRAME_TERMINATOR.len() {
        return 0;
    }
    // Everything before the terminator must fit in this budget, so the
    // terminator always has room at the end.
    let budget = out.len() - FRAME_TERMINATOR.len();
    let mut len = 0;

    if push(out, &mut len, budget, FRAME_HEADER) {
        let mut digits = [0u8; 5];
        let mut token = [0u8; 6];

        let id = decimal(sensor as u16, &mut digits);
        let id_len = id.len();
        token[..id_len].copy_from_slice(id);
        token[id_len] = b',';

        if push(out, &mut len, budget, &token[..id_len + 1]) {
            for &sample in samples {
                let text = decimal(sample, &mut digits);
                let text_len = text.len();
                token[..text_len].copy_from_slice(text);
                token[text_len] = b',';
                if !push(out, &mut len, budget, &token[..text_len + 1]) {
                    break;
                }
            }
        }
    }

    out[len..len + FRAME_TERMINATOR.len()].copy_from_slice(FRAME_TERMINATOR);
    len + FRAME_TERMINATOR.len()
}

/// Append `bytes` whole, or not at all
fn push(out: &mut [u8], len: &mut usize, budget: usize, bytes: &[u8]) -> bool {
    let end = *len + bytes.len();
    if end > budget {
        return false;
    }
    out[*len..end].copy_from_slice(bytes);
    *len = end;
    true
}

/// Format an unsigned value as decimal, right-aligned in `buf`
fn decimal(mut value: u16, buf: &mut [u8; 5]) -> &[u8] {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[i..]
}
