//! LoRa time-on-air calculation.
//!
//! Calculates the exact transmission duration for a LoRa packet based on
//! payload size and modulation parameters. Uses the formula from the Semtech
//! SX1276 datasheet (section 4.1.1.7), also given in the SX1262 datasheet
//! (section 6.1.4).
//!
//! Every entry point validates its [`RadioParameters`] first and returns
//! [`ToaError::InvalidParameter`] before any arithmetic runs.
//!
//! # Example
//!
//! ```
//! use lora_toa::lora::{time_on_air, RadioParameters};
//!
//! let params = RadioParameters {
//!     payload_bytes: 20,
//!     ..Default::default()
//! };
//! let seconds = time_on_air(&params).unwrap();
//! println!("20-byte packet takes {:.2} ms", seconds * 1000.0);
//! ```

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use super::params::{requires_ldro, RadioParameters};
use crate::constants::{
    LORA_CRC_BITS, LORA_HEADER_BITS, LORA_NUMERATOR_OFFSET, LORA_PAYLOAD_BASE_SYMBOLS,
    LORA_PREAMBLE_EXTRA_SYMBOLS,
};
use crate::error::ToaError;
use crate::logging::log_warn;

/// Every intermediate value of one time-on-air computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirtimeBreakdown {
    /// Duration of one symbol in seconds
    pub symbol_duration_s: f64,
    /// Preamble including the 4.25 sync symbols, in seconds
    pub preamble_duration_s: f64,
    /// Payload symbols including the 8-symbol base
    pub payload_symbols: u32,
    /// Preamble + 4.25 + payload symbols
    pub total_symbols: f64,
    pub payload_duration_s: f64,
    pub time_on_air_s: f64,
    /// Whether low data rate optimization entered the symbol count
    pub low_data_rate_optimize: bool,
}

impl AirtimeBreakdown {
    /// Total time on air as a `Duration`.
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.time_on_air_s)
    }

    pub fn time_on_air_ms(&self) -> f64 {
        self.time_on_air_s * 1000.0
    }
}

fn symbol_duration_unchecked(params: &RadioParameters) -> f64 {
    // T_sym = 2^SF / BW
    f64::from(1u32 << params.spreading_factor) / f64::from(params.bandwidth_hz)
}

fn payload_symbol_count_unchecked(params: &RadioParameters) -> u32 {
    let sf = i64::from(params.spreading_factor);
    let de = i64::from(params.effective_low_data_rate_optimize());
    let ih = i64::from(!params.header_enabled);
    let crc = i64::from(params.crc_enabled);

    // 8*PL - 4*SF + 28 + 16*CRC - 20*IH
    let numerator = 8 * i64::from(params.payload_bytes) - 4 * sf + LORA_NUMERATOR_OFFSET
        + LORA_CRC_BITS * crc
        - LORA_HEADER_BITS * ih;
    // 4*(SF - 2*DE), at least 16 since SF >= 6
    let denominator = 4 * (sf - 2 * de);

    let blocks = if numerator > 0 {
        (numerator + denominator - 1) / denominator
    } else {
        0
    };
    // blocks <= 8*u32::MAX/16, so the product stays well inside u64
    let coded = blocks as u64 * u64::from(params.coding_rate.denominator());
    LORA_PAYLOAD_BASE_SYMBOLS.saturating_add(u32::try_from(coded).unwrap_or(u32::MAX))
}

/// Calculate symbol duration in seconds: `2^SF / BW`.
pub fn symbol_duration(params: &RadioParameters) -> Result<f64, ToaError> {
    params.validate()?;
    Ok(symbol_duration_unchecked(params))
}

/// Calculate preamble duration in seconds: `(preamble + 4.25) * T_sym`.
pub fn preamble_duration(params: &RadioParameters) -> Result<f64, ToaError> {
    params.validate()?;
    Ok((f64::from(params.preamble_symbols) + LORA_PREAMBLE_EXTRA_SYMBOLS)
        * symbol_duration_unchecked(params))
}

/// Number of payload symbols, including the fixed 8-symbol base.
///
/// `8 + max(ceil((8*PL - 4*SF + 28 + 16*CRC - 20*IH) / (4*(SF - 2*DE))) * CR, 0)`
/// where CR is the coding rate denominator (5 to 8).
pub fn payload_symbol_count(params: &RadioParameters) -> Result<u32, ToaError> {
    params.validate()?;
    Ok(payload_symbol_count_unchecked(params))
}

/// Calculate LoRa packet time on air in seconds.
pub fn time_on_air(params: &RadioParameters) -> Result<f64, ToaError> {
    airtime_breakdown(params).map(|b| b.time_on_air_s)
}

/// Compute time on air together with all of its intermediate values.
pub fn airtime_breakdown(params: &RadioParameters) -> Result<AirtimeBreakdown, ToaError> {
    params.validate()?;

    if requires_ldro(params.spreading_factor, params.bandwidth_hz) && !params.low_data_rate_optimize
    {
        info!(
            "LDRO forced on for SF{} at {} Hz",
            params.spreading_factor, params.bandwidth_hz
        );
    }

    if params.spreading_factor == 6 && params.header_enabled {
        log_warn("SF6 is only usable in implicit header mode on SX127x/SX126x radios");
    }

    let t_sym = symbol_duration_unchecked(params);
    let preamble_symbols = f64::from(params.preamble_symbols) + LORA_PREAMBLE_EXTRA_SYMBOLS;
    let payload_symbols = payload_symbol_count_unchecked(params);

    let preamble_duration_s = preamble_symbols * t_sym;
    let payload_duration_s = f64::from(payload_symbols) * t_sym;
    let breakdown = AirtimeBreakdown {
        symbol_duration_s: t_sym,
        preamble_duration_s,
        payload_symbols,
        total_symbols: preamble_symbols + f64::from(payload_symbols),
        payload_duration_s,
        time_on_air_s: preamble_duration_s + payload_duration_s,
        low_data_rate_optimize: params.effective_low_data_rate_optimize(),
    };

    debug!(
        "LoRa ToA: {:.3} ms (SF{} BW{} CR{} PL{} n_symbol:{} t_symbol_us:{:.1})",
        breakdown.time_on_air_ms(),
        params.spreading_factor,
        params.bandwidth_hz,
        params.coding_rate,
        params.payload_bytes,
        breakdown.total_symbols,
        t_sym * 1e6
    );

    Ok(breakdown)
}
