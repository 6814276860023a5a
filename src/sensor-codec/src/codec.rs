// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Base64 frame decoding and encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tracing::{debug, trace};

use crate::record::{SensorRecord, FRAME_LEN};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("base64 decode failed: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error(
        "invalid data length: expected at least {expected} bytes, got {got} bytes",
        expected = FRAME_LEN
    )]
    InsufficientLength { got: usize },
}

/// Field-less discriminant of [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    InvalidEncoding,
    InsufficientLength,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidEncoding(_) => DecodeErrorKind::InvalidEncoding,
            DecodeError::InsufficientLength { .. } => DecodeErrorKind::InsufficientLength,
        }
    }
}

/// Decode a base64 payload (standard alphabet, padded) into a record.
pub fn decode(payload: &str) -> Result<SensorRecord, DecodeError> {
    let frame = STANDARD.decode(payload)?;
    debug!("Decoded {} bytes: {}", frame.len(), hex_dump(&frame));
    decode_frame(&frame)
}

/// Extract a record from a raw frame. Only bytes 0..7 are read; anything
/// past that is ignored.
pub fn decode_frame(frame: &[u8]) -> Result<SensorRecord, DecodeError> {
    if frame.len() < FRAME_LEN {
        return Err(DecodeError::InsufficientLength { got: frame.len() });
    }

    let record = SensorRecord {
        node_id: frame[0],
        wind_direction: read_u16_le(frame, 1),
        air_speed_scaled: read_u16_le(frame, 3),
        virtual_temp_scaled: read_u16_le(frame, 5),
    };
    trace!("Frame fields: {:?}", record);
    Ok(record)
}

/// Encode a record the way the firmware transmits it.
pub fn encode(record: &SensorRecord, trailer: u8) -> String {
    STANDARD.encode(record.to_bytes(trailer))
}

/// Upper-case, space separated hex, matching the firmware's serial dump.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

// Caller guarantees offset + 1 is in bounds.
fn read_u16_le(frame: &[u8], offset: usize) -> u16 {
    u16::from(frame[offset]) | (u16::from(frame[offset + 1]) << 8)
}
