/// Serial NDJSON transport.
///
/// Records are serialized into a fixed buffer and written through the
/// `log` facade, so they land on whatever console the firmware's logger
/// drives (esp-println or the ESP-IDF logger).
use crate::protocol::{DeviceMessage, MsgBuffer, MAX_MSG_LEN};

/// Serialize a DeviceMessage to JSON bytes and write to the output buffer.
/// Returns the number of bytes written, or None if serialization failed.
pub fn serialize_message(msg: &DeviceMessage, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(msg, buf) {
        Ok(len) => {
            // Append newline for NDJSON
            if len < buf.len() {
                buf[len] = b'\n';
                Some(len + 1)
            } else {
                Some(len)
            }
        }
        Err(_) => None,
    }
}

/// Serialize `msg` into a [`MsgBuffer`] trimmed to the encoded length.
pub fn encode_message(msg: &DeviceMessage) -> Option<MsgBuffer> {
    let mut buf = MsgBuffer::new();
    buf.resize_default(MAX_MSG_LEN).ok();
    let len = serialize_message(msg, &mut buf)?;
    buf.truncate(len);
    Some(buf)
}

/// Write `msg` to the console as one NDJSON line.
///
/// Messages that do not fit `MAX_MSG_LEN` are dropped with a warning.
pub fn emit(msg: &DeviceMessage) {
    match encode_message(msg) {
        Some(buf) => {
            if let Ok(s) = core::str::from_utf8(&buf) {
                log::info!("{}", s.trim_end());
            }
        }
        None => log::warn!("NDJSON record exceeds {} bytes, dropped", MAX_MSG_LEN),
    }
}
