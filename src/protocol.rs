//! GATT UUIDs, calibration constants, and wire-layout sizes for Muse headsets.
//!
//! All UUIDs belong to the Muse vendor namespace
//! `273eXXXX-4c4d-454d-96be-f03bac821358`.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

// ── Service ──────────────────────────────────────────────────────────────────

/// Primary GATT service UUID advertised by all Muse devices.
pub const MUSE_SERVICE_UUID: Uuid = Uuid::from_u128(0x0000fe8d_0000_1000_8000_00805f9b34fb);

// ── Characteristics ───────────────────────────────────────────────────────────

/// Bidirectional control channel.  Carries commands, never sensor data, so
/// it has no [`Channel`] counterpart.
pub const CONTROL_CHARACTERISTIC: Uuid =
    Uuid::from_u128(0x273e0001_4c4d_454d_96be_f03bac821358);

/// Telemetry characteristic (battery level, temperature, fuel-gauge voltage).
pub const TELEMETRY_CHARACTERISTIC: Uuid =
    Uuid::from_u128(0x273e000b_4c4d_454d_96be_f03bac821358);

/// Gyroscope characteristic — 3 × XYZ samples per notification at ~52 Hz.
pub const GYROSCOPE_CHARACTERISTIC: Uuid =
    Uuid::from_u128(0x273e0009_4c4d_454d_96be_f03bac821358);

/// Accelerometer characteristic — 3 × XYZ samples per notification at ~52 Hz.
pub const ACCELEROMETER_CHARACTERISTIC: Uuid =
    Uuid::from_u128(0x273e000a_4c4d_454d_96be_f03bac821358);

/// DRL/REF characteristic.  Payload meaning is undocumented.
pub const DRL_REF_CHARACTERISTIC: Uuid =
    Uuid::from_u128(0x273e0008_4c4d_454d_96be_f03bac821358);

/// EEG per-channel characteristics, indexed by electrode:
///
/// | Index | UUID suffix | Electrode |
/// |-------|-------------|-----------|
/// | 0     | 0003        | TP9       |
/// | 1     | 0004        | AF7       |
/// | 2     | 0005        | AF8       |
/// | 3     | 0006        | TP10      |
/// | 4     | 0007        | AUX       |
pub const EEG_CHARACTERISTICS: [Uuid; 5] = [
    Uuid::from_u128(0x273e0003_4c4d_454d_96be_f03bac821358), // TP9
    Uuid::from_u128(0x273e0004_4c4d_454d_96be_f03bac821358), // AF7
    Uuid::from_u128(0x273e0005_4c4d_454d_96be_f03bac821358), // AF8
    Uuid::from_u128(0x273e0006_4c4d_454d_96be_f03bac821358), // TP10
    Uuid::from_u128(0x273e0007_4c4d_454d_96be_f03bac821358), // AUX
];

// ── Sampling constants ────────────────────────────────────────────────────────

/// EEG sample rate in Hz (256 samples per second per channel).
pub const EEG_FREQUENCY: f64 = 256.0;

/// Number of EEG voltage samples packed into one BLE notification.
pub const EEG_SAMPLES_PER_READING: usize = 12;

/// Electrode names in [`EEG_CHARACTERISTICS`] index order.
pub const EEG_CHANNEL_NAMES: [&str; 5] = ["TP9", "AF7", "AF8", "TP10", "AUX"];

// ── Wire layout ───────────────────────────────────────────────────────────────

/// Packet-index header in front of every EEG payload.
pub const EEG_HEADER_LEN: usize = 2;

/// Sequence id plus three XYZ triples of `i16`.
pub const IMU_FRAME_LEN: usize = 20;

/// Sequence id, battery, fuel gauge, unused gap, temperature.
pub const TELEMETRY_FRAME_LEN: usize = 10;

// ── Calibration ───────────────────────────────────────────────────────────────
//
// Device-specific factors recovered by reverse engineering. Keep them exact.

/// µV per LSB of a 12-bit EEG sample (1000 µV / 2048 steps).
pub const EEG_SCALE: f64 = 0.48828125;

/// Mid-scale of the 12-bit EEG ADC; maps to 0 µV.
pub const EEG_MIDPOINT: u16 = 0x800;

/// g per LSB of a raw accelerometer axis.  Empirical; full-scale range unknown.
pub const ACCELEROMETER_SCALE: f32 = 0.0000610352;

/// °/s per LSB of a raw gyroscope axis.  Empirical; full-scale range unknown.
pub const GYROSCOPE_SCALE: f32 = 0.0074768;

/// Divisor applied to the raw battery field.
pub const BATTERY_DIVISOR: f32 = 512.0;

/// Multiplier applied to the raw fuel-gauge field.
pub const FUEL_GAUGE_SCALE: f32 = 2.2;

// ── Channel ───────────────────────────────────────────────────────────────────

/// A sensor notification channel, i.e. which decoder a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// EEG electrode, indexed as in [`EEG_CHANNEL_NAMES`] (0..=4).
    Eeg(usize),
    DrlRef,
    Gyroscope,
    Accelerometer,
    Telemetry,
}

impl Channel {
    /// Every sensor channel the headset can notify on.
    pub const ALL: [Channel; 9] = [
        Channel::Eeg(0),
        Channel::Eeg(1),
        Channel::Eeg(2),
        Channel::Eeg(3),
        Channel::Eeg(4),
        Channel::DrlRef,
        Channel::Gyroscope,
        Channel::Accelerometer,
        Channel::Telemetry,
    ];

    /// Look up the channel that owns a GATT characteristic.
    ///
    /// Returns `None` for the control characteristic and for UUIDs outside
    /// the Muse namespace.
    pub fn from_uuid(uuid: Uuid) -> Option<Channel> {
        Self::ALL.into_iter().find(|c| c.uuid() == Some(uuid))
    }

    /// GATT characteristic for this channel, or `None` for an electrode index
    /// outside `0..=4`.
    pub fn uuid(self) -> Option<Uuid> {
        match self {
            Channel::Eeg(i) => EEG_CHARACTERISTICS.get(i).copied(),
            Channel::DrlRef => Some(DRL_REF_CHARACTERISTIC),
            Channel::Gyroscope => Some(GYROSCOPE_CHARACTERISTIC),
            Channel::Accelerometer => Some(ACCELEROMETER_CHARACTERISTIC),
            Channel::Telemetry => Some(TELEMETRY_CHARACTERISTIC),
        }
    }

    /// Short human-readable label (`"TP9"`, `"GYRO"`, …).
    pub fn name(self) -> &'static str {
        match self {
            Channel::Eeg(i) => EEG_CHANNEL_NAMES.get(i).copied().unwrap_or("?"),
            Channel::DrlRef => "DRL_REF",
            Channel::Gyroscope => "GYRO",
            Channel::Accelerometer => "ACCEL",
            Channel::Telemetry => "TELEMETRY",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Channel::from_str`] for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel '{0}'")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    /// Parse a channel name, case-insensitively.  Accepts the electrode names
    /// plus `drl_ref`/`drl`, `gyroscope`/`gyro`, `accelerometer`/`accel` and
    /// `telemetry`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let channel = match lower.as_str() {
            "drl_ref" | "drl" => Channel::DrlRef,
            "gyroscope" | "gyro" => Channel::Gyroscope,
            "accelerometer" | "accel" => Channel::Accelerometer,
            "telemetry" => Channel::Telemetry,
            name => EEG_CHANNEL_NAMES
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .map(Channel::Eeg)
                .ok_or_else(|| UnknownChannel(s.to_owned()))?,
        };
        Ok(channel)
    }
}
