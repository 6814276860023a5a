// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Sensor record as packed by the field node firmware.
//!
//! Wire layout (little-endian, no padding):
//!
//! | byte | field                 |
//! |------|-----------------------|
//! | 0    | node id               |
//! | 1-2  | wind direction (deg)  |
//! | 3-4  | air speed ×100 (m/s)  |
//! | 5-6  | virtual temp ×100 (C) |
//! | 7    | trailer (unread)      |

use std::fmt;

/// Minimum number of bytes a frame must carry.
pub const FRAME_LEN: usize = 8;

pub const NODE_ID_MAX: u8 = 10;
pub const WIND_DIRECTION_MAX: u16 = 360;
pub const SCALED_MAX: u16 = 5000;

const SCALE: f64 = 100.0;

/// One decoded sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorRecord {
    pub node_id: u8,
    /// Degrees, 0-360
    pub wind_direction: u16,
    /// Air speed in m/s ×100
    pub air_speed_scaled: u16,
    /// Virtual temperature in °C ×100
    pub virtual_temp_scaled: u16,
}

/// Record fields, used when reporting values outside their documented range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NodeId,
    WindDirection,
    AirSpeed,
    VirtualTemp,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::NodeId => "node id",
            Field::WindDirection => "wind direction",
            Field::AirSpeed => "air speed",
            Field::VirtualTemp => "virtual temp",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SensorRecord {
    /// Air speed in m/s.
    pub fn air_speed(&self) -> f64 {
        f64::from(self.air_speed_scaled) / SCALE
    }

    /// Virtual temperature in °C.
    pub fn virtual_temp(&self) -> f64 {
        f64::from(self.virtual_temp_scaled) / SCALE
    }

    /// Fields whose value lies outside the documented domain.
    ///
    /// Decoding never rejects such values; this is informational only.
    pub fn out_of_range_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if self.node_id > NODE_ID_MAX {
            fields.push(Field::NodeId);
        }
        if self.wind_direction > WIND_DIRECTION_MAX {
            fields.push(Field::WindDirection);
        }
        if self.air_speed_scaled > SCALED_MAX {
            fields.push(Field::AirSpeed);
        }
        if self.virtual_temp_scaled > SCALED_MAX {
            fields.push(Field::VirtualTemp);
        }
        fields
    }

    /// Pack the record into its wire layout. The firmware stores the
    /// absolute RSSI in the trailing byte.
    pub fn to_bytes(&self, trailer: u8) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = self.node_id;
        frame[1..3].copy_from_slice(&self.wind_direction.to_le_bytes());
        frame[3..5].copy_from_slice(&self.air_speed_scaled.to_le_bytes());
        frame[5..7].copy_from_slice(&self.virtual_temp_scaled.to_le_bytes());
        frame[7] = trailer;
        frame
    }
}

impl fmt::Display for SensorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sensor Data ===")?;
        writeln!(f, "Node ID:          {}", self.node_id)?;
        writeln!(f, "Wind Direction:   {}°", self.wind_direction)?;
        writeln!(f, "Air Speed:        {:.2} m/s", self.air_speed())?;
        writeln!(f, "Virtual Temp:     {:.2}°C", self.virtual_temp())?;
        write!(f, "===================")
    }
}

/// Render a record in the fixed human-readable layout (no trailing newline).
pub fn format(record: &SensorRecord) -> String {
    record.to_string()
}
