use serde::Serialize;

use crate::protocol::EEG_FREQUENCY;

/// An EEG reading — one BLE notification from a single electrode.
///
/// One notification per channel at 256 Hz, normally carrying **12 samples**
/// (≈ 46.9 ms of signal per packet).  Samples are decoded from 12-bit
/// big-endian packed values and scaled by 0.48828125 µV/LSB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EegReading {
    /// Sequential packet index emitted by the headset (wraps at 0xFFFF).
    ///
    /// Taken from the 2-byte big-endian header that precedes the packed
    /// samples.  Counters are per channel; electrodes are not synchronised.
    pub index: u16,
    /// Electrode channel index:
    /// * 0 = TP9 (left rear)
    /// * 1 = AF7 (left front)
    /// * 2 = AF8 (right front)
    /// * 3 = TP10 (right rear)
    /// * 4 = AUX (right auxiliary input)
    pub electrode: usize,
    /// Voltage samples in µV, in wire order.
    pub samples: Vec<f64>,
}

impl EegReading {
    /// Span of signal covered by this packet in milliseconds, at
    /// [`EEG_FREQUENCY`].  A full 12-sample packet covers 46.875 ms.
    pub fn duration_ms(&self) -> f64 {
        1000.0 * self.samples.len() as f64 / EEG_FREQUENCY
    }
}

/// Battery and housekeeping telemetry packet (~1 Hz).
///
/// | Field | Wire | Conversion |
/// |---|---|---|
/// | `sequence_id` | u16 BE @ 0 | raw |
/// | `battery_level` | u16 BE @ 2 | ÷ 512 |
/// | `fuel_gauge_voltage` | u16 BE @ 4 | × 2.2 |
/// | `temperature` | u16 BE @ 8 | raw |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryData {
    /// Monotonically increasing packet counter (wraps at 0xFFFF).
    pub sequence_id: u16,
    /// Raw battery reading divided by 512.
    ///
    /// Not clamped; the device's calibration puts it roughly in `0.0..=2.0`
    /// for a raw range of `0..=1024`.
    pub battery_level: f32,
    /// Fuel-gauge terminal voltage: raw reading multiplied by 2.2.
    pub fuel_gauge_voltage: f32,
    /// Temperature in raw device units; calibration unknown.
    pub temperature: u16,
}

/// A single 3-axis inertial measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XyzSample {
    /// X-axis value in sensor-specific units (g for accelerometer, °/s for gyroscope).
    pub x: f32,
    /// Y-axis value.
    pub y: f32,
    /// Z-axis value.
    pub z: f32,
}

/// A batch of inertial measurements from one BLE notification.
///
/// Both the accelerometer and gyroscope fire at ≈ 52 Hz and carry 3 XYZ
/// samples per notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImuData {
    /// Monotonically increasing packet counter (wraps at 0xFFFF).
    pub sequence_id: u16,
    /// Three consecutive XYZ samples; index 0 is the oldest.
    pub samples: [XyzSample; 3],
}

/// A decoded notification, tagged with the kind of channel it came from.
///
/// Produced by [`crate::decoder::NotificationDecoder::decode`].  Serialises
/// with a `"type"` discriminator, e.g. `{"type":"telemetry","sequence_id":7,…}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MuseEvent {
    /// An EEG packet from one electrode channel.
    Eeg(EegReading),
    /// Battery and housekeeping telemetry.
    Telemetry(TelemetryData),
    /// Accelerometer batch, in g.
    Accelerometer(ImuData),
    /// Gyroscope batch, in °/s.
    Gyroscope(ImuData),
}
