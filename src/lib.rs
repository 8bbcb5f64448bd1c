//! # muse-decode
//!
//! Decoders for the binary BLE notification payloads of
//! [Interaxon Muse](https://choosemuse.com/) headbands: packed 12-bit EEG,
//! 16-bit accelerometer / gyroscope batches, and battery telemetry.
//!
//! The crate does not talk to Bluetooth.  Whatever owns the connection hands
//! over each payload together with the channel it arrived on; the decoders
//! turn it into typed records.
//!
//! ## Quick start
//!
//! ```
//! use muse_decode::prelude::*;
//!
//! let decoder = NotificationDecoder::new(DecoderConfig::default());
//! let payload = [0x00, 0x2A, 0x04, 0x00, 0x00, 0x64, 0x00, 0x00, 0x01, 0x2C];
//!
//! match decoder.decode(Channel::Telemetry, &payload)? {
//!     Some(MuseEvent::Telemetry(t)) => assert_eq!(t.battery_level, 2.0),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), DecodeError>(())
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |---|---|
//! | [`prelude`] | One-line glob import of the most commonly needed types |
//! | [`parse`] | Pure byte-to-sample decoders for EEG, IMU, and telemetry |
//! | [`decoder`] | [`decoder::NotificationDecoder`]: routes channel-tagged payloads |
//! | [`protocol`] | GATT UUIDs, channel identities, calibration constants |
//! | [`types`] | Decoded record types |
//! | [`error`] | [`error::DecodeError`] |

pub mod decoder;
pub mod error;
pub mod parse;
pub mod protocol;
pub mod types;

// ── Prelude ───────────────────────────────────────────────────────────────────

/// Convenience re-exports for downstream crates.
pub mod prelude {
    pub use crate::decoder::{DecoderConfig, NotificationDecoder};
    pub use crate::error::DecodeError;

    pub use crate::parse::{
        decode_eeg_samples, decode_unsigned_12bit, parse_accelerometer, parse_eeg_reading,
        parse_gyroscope, parse_telemetry,
    };

    pub use crate::types::{EegReading, ImuData, MuseEvent, TelemetryData, XyzSample};

    pub use crate::protocol::{Channel, EEG_CHANNEL_NAMES, EEG_FREQUENCY, EEG_SAMPLES_PER_READING};
}
