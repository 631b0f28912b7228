//! # lora-toa - LoRa Packet Time-on-Air Calculator
//!
//! The lora-toa crate computes how long a LoRa (or FSK) packet occupies the
//! air, from the modulation and packet parameters a gateway or end device
//! would program into its radio.
//!
//! ## Features
//!
//! - Symbol duration, preamble duration and payload symbol count per the
//!   Semtech LoRa modem formula
//! - Automatic low data rate optimization for SF11/SF12 at 125 kHz or below
//! - FSK airtime for variable-length concentrator packets
//! - Millisecond rounding matching the concentrator HAL
//! - JSON packet descriptions and a `lora-toa` command-line tool
//!
//! All calculations are pure functions over `Copy` parameter structs. Invalid
//! parameters are rejected with [`ToaError::InvalidParameter`] before any
//! arithmetic runs.
//!
//! ## Usage
//!
//! ```rust
//! use lora_toa::{time_on_air, CodingRate, RadioParameters};
//!
//! let params = RadioParameters {
//!     spreading_factor: 7,
//!     bandwidth_hz: 125_000,
//!     coding_rate: CodingRate::CR4_5,
//!     preamble_symbols: 8,
//!     header_enabled: true,
//!     low_data_rate_optimize: false,
//!     payload_bytes: 20,
//!     crc_enabled: true,
//! };
//! let seconds = time_on_air(&params)?;
//! assert!((seconds - 0.056_576).abs() < 1e-9);
//! # Ok::<(), lora_toa::ToaError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod fsk;
pub mod logging;
pub mod lora;
pub mod packet;

pub use crate::error::ToaError;
pub use crate::logging::{init_logger, log_info};

pub use fsk::FskParameters;
pub use lora::{
    airtime_breakdown, payload_symbol_count, preamble_duration, requires_ldro, symbol_duration,
    time_on_air, AirtimeBreakdown, CodingRate, RadioParameters,
};
pub use packet::{Packet, PacketReport};
