//! LoRa and FSK PHY Constants
//!
//! Fixed values from the Semtech LoRa modem documentation (SX1276 datasheet
//! section 4.1.1.7, SX1262 datasheet section 6.1.4) and the SX1302 gateway HAL
//! FSK defaults.

/// Lowest supported spreading factor.
pub const LORA_SF_MIN: u8 = 6;

/// Highest supported spreading factor.
pub const LORA_SF_MAX: u8 = 12;

/// Minimum programmable preamble length in symbols.
pub const LORA_PREAMBLE_MIN: u16 = 6;

/// Default preamble length in symbols.
pub const LORA_PREAMBLE_DEFAULT: u16 = 8;

/// Symbols added to the programmed preamble (sync word and SFD).
pub const LORA_PREAMBLE_EXTRA_SYMBOLS: f64 = 4.25;

/// Symbols always sent after the preamble, ahead of the coded payload blocks.
pub const LORA_PAYLOAD_BASE_SYMBOLS: u32 = 8;

/// Constant term of the payload symbol numerator.
pub const LORA_NUMERATOR_OFFSET: i64 = 28;

/// Bits contributed by the payload CRC.
pub const LORA_CRC_BITS: i64 = 16;

/// Bits saved by omitting the explicit header.
pub const LORA_HEADER_BITS: i64 = 20;

/// Bandwidth at or below which SF11/SF12 must use low data rate optimization.
pub const LORA_LDRO_MAX_BANDWIDTH_HZ: u32 = 125_000;

/// Spreading factor from which low data rate optimization is mandatory.
pub const LORA_LDRO_MIN_SF: u8 = 11;

/// Default FSK preamble length in bytes.
pub const FSK_PREAMBLE_DEFAULT_BYTES: u16 = 5;

/// Default FSK sync word length in bytes.
pub const FSK_SYNC_WORD_DEFAULT_BYTES: u8 = 3;

/// Length field of a variable-length FSK packet.
pub const FSK_LENGTH_FIELD_BYTES: u32 = 1;

/// FSK CRC length in bytes.
pub const FSK_CRC_BYTES: u32 = 2;
