// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Decoder for the packed sensor frame sent by field nodes.

pub mod codec;
pub mod record;

pub use codec::{decode, decode_frame, encode, hex_dump, DecodeError, DecodeErrorKind};
pub use record::{format, Field, SensorRecord, FRAME_LEN};
