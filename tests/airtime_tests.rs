//! Integration tests for the LoRa time-on-air calculator.
//!
//! Reference values are exact evaluations of the SX1276/SX1262 datasheet
//! formula; property tests cover positivity and monotonicity over the whole
//! valid parameter space.

use lora_toa::{
    airtime_breakdown, payload_symbol_count, preamble_duration, symbol_duration, time_on_air,
    CodingRate, RadioParameters, ToaError,
};
use proptest::prelude::*;

fn reference_params() -> RadioParameters {
    RadioParameters {
        spreading_factor: 7,
        bandwidth_hz: 125_000,
        coding_rate: CodingRate::CR4_5,
        preamble_symbols: 8,
        header_enabled: true,
        low_data_rate_optimize: false,
        payload_bytes: 20,
        crc_enabled: true,
    }
}

/// SF7/125kHz/4/5, 20 bytes with explicit header and CRC.
#[test]
fn test_reference_sf7_20_bytes() {
    let params = reference_params();
    assert_eq!(payload_symbol_count(&params).unwrap(), 43);

    let toa = time_on_air(&params).unwrap();
    assert!((toa - 0.056_576).abs() < 1e-9, "got {toa}");
}

/// SF12/125kHz with LDRO forced on, 50 bytes.
#[test]
fn test_reference_sf12_50_bytes() {
    let params = RadioParameters {
        spreading_factor: 12,
        payload_bytes: 50,
        ..reference_params()
    };
    let b = airtime_breakdown(&params).unwrap();
    assert!(b.low_data_rate_optimize);
    assert_eq!(b.payload_symbols, 58);
    assert!((b.total_symbols - 70.25).abs() < 1e-12);
    // 70.25 * 32.768 ms
    assert!((b.time_on_air_s - 2.301_952).abs() < 1e-9);
}

/// SF9/500kHz/4/8, 64 bytes implicit header without CRC.
#[test]
fn test_reference_sf9_500khz_implicit() {
    // numerator = 512 - 36 + 28 - 20 = 484, ceil(484 / 36) = 14, 8 + 14*8 = 120
    let params = RadioParameters {
        spreading_factor: 9,
        bandwidth_hz: 500_000,
        coding_rate: CodingRate::CR4_8,
        header_enabled: false,
        crc_enabled: false,
        payload_bytes: 64,
        ..reference_params()
    };
    assert_eq!(payload_symbol_count(&params).unwrap(), 120);
    // (12.25 + 120) * 1.024 ms
    let toa = time_on_air(&params).unwrap();
    assert!((toa - 0.135_424).abs() < 1e-9, "got {toa}");
}

/// Empty payload without CRC sits on the 8-symbol floor for SF7 and above.
#[test]
fn test_empty_payload_floor() {
    for sf in 7u8..=12 {
        let params = RadioParameters {
            spreading_factor: sf,
            payload_bytes: 0,
            crc_enabled: false,
            ..reference_params()
        };
        assert_eq!(payload_symbol_count(&params).unwrap(), 8, "SF{sf}");
    }
}

#[test]
fn test_user_ldro_increases_symbols() {
    let params = RadioParameters {
        spreading_factor: 9,
        payload_bytes: 100,
        ..reference_params()
    };
    let without = payload_symbol_count(&params).unwrap();
    let with = payload_symbol_count(&RadioParameters {
        low_data_rate_optimize: true,
        ..params
    })
    .unwrap();
    assert!(with > without, "{with} > {without}");
}

#[test]
fn test_spreading_factor_13_rejected() {
    let params = RadioParameters {
        spreading_factor: 13,
        ..reference_params()
    };
    match time_on_air(&params) {
        Err(ToaError::InvalidParameter { field, .. }) => assert_eq!(field, "spreading_factor"),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_zero_bandwidth_rejected() {
    let params = RadioParameters {
        bandwidth_hz: 0,
        ..reference_params()
    };
    match time_on_air(&params) {
        Err(ToaError::InvalidParameter { field, .. }) => assert_eq!(field, "bandwidth_hz"),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
    assert!(symbol_duration(&params).is_err());
}

#[test]
fn test_short_preamble_rejected() {
    let params = RadioParameters {
        preamble_symbols: 4,
        ..reference_params()
    };
    let err = preamble_duration(&params).unwrap_err();
    assert_eq!(err.field(), Some("preamble_symbols"));
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let params = reference_params();
    let expected = time_on_air(&params).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || time_on_air(&params).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn coding_rate() -> impl Strategy<Value = CodingRate> {
    prop_oneof![
        Just(CodingRate::CR4_5),
        Just(CodingRate::CR4_6),
        Just(CodingRate::CR4_7),
        Just(CodingRate::CR4_8),
    ]
}

fn bandwidth() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(62_500u32),
        Just(125_000u32),
        Just(250_000u32),
        Just(500_000u32),
        1u32..=2_000_000,
    ]
}

prop_compose! {
    fn radio_params()(
        spreading_factor in 6u8..=12,
        bandwidth_hz in bandwidth(),
        coding_rate in coding_rate(),
        preamble_symbols in 6u16..=64,
        header_enabled in any::<bool>(),
        low_data_rate_optimize in any::<bool>(),
        payload_bytes in 0u32..=1024,
        crc_enabled in any::<bool>(),
    ) -> RadioParameters {
        RadioParameters {
            spreading_factor,
            bandwidth_hz,
            coding_rate,
            preamble_symbols,
            header_enabled,
            low_data_rate_optimize,
            payload_bytes,
            crc_enabled,
        }
    }
}

proptest! {
    #[test]
    fn prop_time_on_air_positive(params in radio_params()) {
        let toa = time_on_air(&params).unwrap();
        prop_assert!(toa > 0.0 && toa.is_finite());
    }

    #[test]
    fn prop_payload_symbols_at_least_floor(params in radio_params()) {
        prop_assert!(payload_symbol_count(&params).unwrap() >= 8);
    }

    #[test]
    fn prop_non_decreasing_in_payload(params in radio_params(), extra in 0u32..=64) {
        let longer = params.with_payload(params.payload_bytes + extra);
        prop_assert!(time_on_air(&longer).unwrap() >= time_on_air(&params).unwrap());
    }

    #[test]
    fn prop_strictly_increasing_past_floor(params in radio_params()) {
        let base = params.with_payload(params.payload_bytes.max(8));
        let longer = base.with_payload(base.payload_bytes + u32::from(base.spreading_factor));
        prop_assert!(time_on_air(&longer).unwrap() > time_on_air(&base).unwrap());
    }

    #[test]
    fn prop_strictly_increasing_in_spreading_factor(
        params in radio_params(),
        sf in 6u8..12,
    ) {
        let lower = RadioParameters { spreading_factor: sf, ..params };
        let higher = RadioParameters { spreading_factor: sf + 1, ..params };
        prop_assert!(time_on_air(&higher).unwrap() > time_on_air(&lower).unwrap());
    }

    #[test]
    fn prop_preamble_independent_of_payload(params in radio_params(), payload in 0u32..=4096) {
        let other = params.with_payload(payload);
        prop_assert_eq!(
            preamble_duration(&params).unwrap(),
            preamble_duration(&other).unwrap()
        );
    }

    #[test]
    fn prop_breakdown_sums(params in radio_params()) {
        let b = airtime_breakdown(&params).unwrap();
        let sum = b.preamble_duration_s + b.payload_duration_s;
        prop_assert!((b.time_on_air_s - sum).abs() <= sum * 1e-12);
    }
}
