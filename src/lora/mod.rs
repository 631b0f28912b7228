//! LoRa time-on-air support.
//!
//! This module contains:
//! - [`params`]: Radio parameters, coding rates and their validation
//! - [`airtime`]: Time-on-air calculation for LoRa packets

pub mod airtime;
pub mod params;

pub use airtime::{
    airtime_breakdown, payload_symbol_count, preamble_duration, symbol_duration, time_on_air,
    AirtimeBreakdown,
};
pub use params::{requires_ldro, CodingRate, RadioParameters};
