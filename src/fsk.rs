//! # FSK Time-on-Air
//!
//! Airtime of a variable-length FSK packet as sent by a LoRa concentrator:
//!
//! ```text
//! ┌───────────┐ ┌────────────┐ ┌────────┐ ┌────────────┐ ┌───────┐
//! │ Preamble  │ │ Sync Word  │ │ Length │ │  Payload   │ │ CRC   │
//! │ (5 bytes) │ │ (3 bytes)  │ │ (1 B)  │ │ (0-255 B)  │ │(0/2B) │
//! └───────────┘ └────────────┘ └────────┘ └────────────┘ └───────┘
//! ```
//!
//! Preamble and sync word lengths above are the gateway defaults.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    FSK_CRC_BYTES, FSK_LENGTH_FIELD_BYTES, FSK_PREAMBLE_DEFAULT_BYTES,
    FSK_SYNC_WORD_DEFAULT_BYTES,
};
use crate::error::ToaError;

/// FSK packet parameters for airtime calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FskParameters {
    /// Bitrate in bits per second
    pub datarate_bps: u32,
    pub preamble_bytes: u16,
    pub sync_word_bytes: u8,
    pub payload_bytes: u32,
    pub crc_enabled: bool,
}

impl Default for FskParameters {
    fn default() -> Self {
        Self {
            datarate_bps: 50_000,
            preamble_bytes: FSK_PREAMBLE_DEFAULT_BYTES,
            sync_word_bytes: FSK_SYNC_WORD_DEFAULT_BYTES,
            payload_bytes: 0,
            crc_enabled: true,
        }
    }
}

impl FskParameters {
    pub fn validate(&self) -> Result<(), ToaError> {
        if self.datarate_bps == 0 {
            return Err(ToaError::invalid("datarate_bps", "must be greater than 0"));
        }
        Ok(())
    }

    /// Bytes on air: preamble, sync word, length field, payload and CRC.
    pub fn frame_bytes(&self) -> u64 {
        let crc = if self.crc_enabled { FSK_CRC_BYTES } else { 0 };
        u64::from(self.preamble_bytes)
            + u64::from(self.sync_word_bytes)
            + u64::from(FSK_LENGTH_FIELD_BYTES)
            + u64::from(self.payload_bytes)
            + u64::from(crc)
    }
}

/// FSK packet time on air in seconds.
pub fn time_on_air(params: &FskParameters) -> Result<f64, ToaError> {
    params.validate()?;
    let seconds = 8.0 * params.frame_bytes() as f64 / f64::from(params.datarate_bps);
    debug!(
        "FSK ToA: {:.3} ms ({} bytes at {} bps)",
        seconds * 1000.0,
        params.frame_bytes(),
        params.datarate_bps
    );
    Ok(seconds)
}

/// FSK time on air in whole milliseconds, truncated plus a 1 ms rounding margin.
pub fn time_on_air_ms(params: &FskParameters) -> Result<u32, ToaError> {
    params.validate()?;
    let ms = 8 * 1000 * params.frame_bytes() / u64::from(params.datarate_bps);
    Ok(u32::try_from(ms).unwrap_or(u32::MAX).saturating_add(1))
}
