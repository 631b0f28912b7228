//! Modulation-tagged packet descriptions.
//!
//! A [`Packet`] is what a gateway hands to its scheduler: either a LoRa or an
//! FSK parameter set. Its millisecond airtime follows the concentrator HAL
//! rounding so that schedules line up with what the gateway itself reports.

use serde::{Deserialize, Serialize};

use crate::error::ToaError;
use crate::fsk::{self, FskParameters};
use crate::lora::{self, AirtimeBreakdown, RadioParameters};

/// Packet to transmit, tagged by modulation.
///
/// Serialized as `{"modulation": "lora", ...}` or `{"modulation": "fsk", ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "modulation", rename_all = "lowercase")]
pub enum Packet {
    Lora(RadioParameters),
    Fsk(FskParameters),
}

/// Result of evaluating a [`Packet`], ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketReport {
    pub modulation: &'static str,
    pub time_on_air_s: f64,
    /// Whole milliseconds, gateway rounding
    pub time_on_air_ms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora: Option<AirtimeBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_bytes: Option<u64>,
}

/// Round a LoRa airtime the way the gateway does: truncate to whole
/// microseconds, then round to the nearest millisecond.
fn lora_ms(seconds: f64) -> u32 {
    let toa_us = (seconds * 1e6) as u64;
    (toa_us as f64 / 1000.0 + 0.5) as u32
}

impl Packet {
    pub fn modulation(&self) -> &'static str {
        match self {
            Packet::Lora(_) => "lora",
            Packet::Fsk(_) => "fsk",
        }
    }

    pub fn validate(&self) -> Result<(), ToaError> {
        match self {
            Packet::Lora(params) => params.validate(),
            Packet::Fsk(params) => params.validate(),
        }
    }

    /// Time on air in seconds.
    pub fn time_on_air(&self) -> Result<f64, ToaError> {
        match self {
            Packet::Lora(params) => lora::time_on_air(params),
            Packet::Fsk(params) => fsk::time_on_air(params),
        }
    }

    /// Time on air in whole milliseconds.
    ///
    /// LoRa rounds to nearest; FSK truncates and adds a 1 ms margin.
    pub fn time_on_air_ms(&self) -> Result<u32, ToaError> {
        match self {
            Packet::Lora(params) => lora::time_on_air(params).map(lora_ms),
            Packet::Fsk(params) => fsk::time_on_air_ms(params),
        }
    }

    pub fn report(&self) -> Result<PacketReport, ToaError> {
        match self {
            Packet::Lora(params) => {
                let breakdown = lora::airtime_breakdown(params)?;
                Ok(PacketReport {
                    modulation: self.modulation(),
                    time_on_air_s: breakdown.time_on_air_s,
                    time_on_air_ms: lora_ms(breakdown.time_on_air_s),
                    lora: Some(breakdown),
                    frame_bytes: None,
                })
            }
            Packet::Fsk(params) => Ok(PacketReport {
                modulation: self.modulation(),
                time_on_air_s: fsk::time_on_air(params)?,
                time_on_air_ms: fsk::time_on_air_ms(params)?,
                lora: None,
                frame_bytes: Some(params.frame_bytes()),
            }),
        }
    }
}

impl From<RadioParameters> for Packet {
    fn from(params: RadioParameters) -> Self {
        Packet::Lora(params)
    }
}

impl From<FskParameters> for Packet {
    fn from(params: FskParameters) -> Self {
        Packet::Fsk(params)
    }
}
