//! LoRa modulation and packet parameters for time-on-air calculation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    LORA_LDRO_MAX_BANDWIDTH_HZ, LORA_LDRO_MIN_SF, LORA_PREAMBLE_DEFAULT, LORA_PREAMBLE_MIN,
    LORA_SF_MAX, LORA_SF_MIN,
};
use crate::error::ToaError;

/// Coding Rate (CR) for LoRa
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodingRate {
    #[default]
    #[serde(rename = "4/5")]
    CR4_5,
    #[serde(rename = "4/6")]
    CR4_6,
    #[serde(rename = "4/7")]
    CR4_7,
    #[serde(rename = "4/8")]
    CR4_8,
}

impl CodingRate {
    /// Denominator of the rate: 5, 6, 7 or 8 coded bits per 4 data bits.
    pub fn denominator(self) -> u32 {
        match self {
            CodingRate::CR4_5 => 5,
            CodingRate::CR4_6 => 6,
            CodingRate::CR4_7 => 7,
            CodingRate::CR4_8 => 8,
        }
    }
}

impl fmt::Display for CodingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "4/{}", self.denominator())
    }
}

impl FromStr for CodingRate {
    type Err = ToaError;

    /// Accepts `4/5`..`4/8` or the bare denominator `5`..`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let denominator = s.trim().strip_prefix("4/").unwrap_or(s.trim());
        match denominator {
            "5" => Ok(CodingRate::CR4_5),
            "6" => Ok(CodingRate::CR4_6),
            "7" => Ok(CodingRate::CR4_7),
            "8" => Ok(CodingRate::CR4_8),
            _ => Err(ToaError::invalid(
                "coding_rate",
                format!("'{s}' is not one of 4/5, 4/6, 4/7, 4/8"),
            )),
        }
    }
}

/// Determine if LDRO must be enabled based on SF and BW.
///
/// Required for SF11/SF12 when BW <= 125kHz (symbol time of 16 ms or more).
pub fn requires_ldro(spreading_factor: u8, bandwidth_hz: u32) -> bool {
    spreading_factor >= LORA_LDRO_MIN_SF && bandwidth_hz <= LORA_LDRO_MAX_BANDWIDTH_HZ
}

/// LoRa radio and packet parameters for one time-on-air computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioParameters {
    /// Spreading factor (6-12)
    pub spreading_factor: u8,
    /// Bandwidth in Hz (typically 125000, 250000, or 500000)
    pub bandwidth_hz: u32,
    pub coding_rate: CodingRate,
    /// Programmed preamble length in symbols (>= 6)
    pub preamble_symbols: u16,
    /// Explicit header present; false selects implicit header mode
    pub header_enabled: bool,
    /// Low data rate optimization requested by the caller.
    ///
    /// Forced on regardless for SF11/SF12 at 125kHz or narrower.
    pub low_data_rate_optimize: bool,
    pub payload_bytes: u32,
    pub crc_enabled: bool,
}

impl Default for RadioParameters {
    fn default() -> Self {
        Self {
            spreading_factor: 7,
            bandwidth_hz: 125_000,
            coding_rate: CodingRate::CR4_5,
            preamble_symbols: LORA_PREAMBLE_DEFAULT,
            header_enabled: true,
            low_data_rate_optimize: false,
            payload_bytes: 0,
            crc_enabled: true,
        }
    }
}

impl RadioParameters {
    /// Same parameters with a different payload length.
    pub fn with_payload(self, payload_bytes: u32) -> Self {
        Self {
            payload_bytes,
            ..self
        }
    }

    /// Check every field invariant, failing on the first violation.
    pub fn validate(&self) -> Result<(), ToaError> {
        if !(LORA_SF_MIN..=LORA_SF_MAX).contains(&self.spreading_factor) {
            return Err(ToaError::invalid(
                "spreading_factor",
                format!(
                    "{} is outside {}..={}",
                    self.spreading_factor, LORA_SF_MIN, LORA_SF_MAX
                ),
            ));
        }
        if self.bandwidth_hz == 0 {
            return Err(ToaError::invalid("bandwidth_hz", "must be greater than 0"));
        }
        if self.preamble_symbols < LORA_PREAMBLE_MIN {
            return Err(ToaError::invalid(
                "preamble_symbols",
                format!(
                    "{} is below the minimum of {}",
                    self.preamble_symbols, LORA_PREAMBLE_MIN
                ),
            ));
        }
        Ok(())
    }

    /// Whether LDRO applies: requested by the caller or mandated by SF/BW.
    pub fn effective_low_data_rate_optimize(&self) -> bool {
        self.low_data_rate_optimize || requires_ldro(self.spreading_factor, self.bandwidth_hz)
    }
}
