//! # Packet Description Files
//!
//! Loads a [`Packet`] from JSON. Fields left out take their defaults, so a
//! minimal LoRa description is:
//!
//! ```json
//! { "modulation": "lora", "spreading_factor": 9, "payload_bytes": 32 }
//! ```
//!
//! Descriptions are validated after parsing; a well-formed file with an
//! out-of-range value yields [`ToaError::InvalidParameter`], not a config error.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::ToaError;
use crate::packet::Packet;

/// Parse and validate a packet description.
pub fn parse_packet(json: &str) -> Result<Packet, ToaError> {
    let packet: Packet =
        serde_json::from_str(json).map_err(|e| ToaError::Config(e.to_string()))?;
    packet.validate()?;
    Ok(packet)
}

/// Read, parse and validate a packet description file.
pub fn load_packet(path: &Path) -> Result<Packet, ToaError> {
    debug!("Loading packet description from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_packet(&json)
}
