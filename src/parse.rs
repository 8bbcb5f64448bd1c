//! Binary decoders for Muse BLE notification payloads.
//!
//! All public functions in this module are pure (no I/O, no allocation beyond
//! the returned collections) and are safe to call from any thread.
//!
//! | Function | Sensor | Format |
//! |---|---|---|
//! | [`decode_unsigned_12bit`] | — | 3 bytes → 2 × u12, big-endian nibble packing |
//! | [`decode_eeg_samples`] | EEG | 12-bit packed, 0.48828125 µV/LSB |
//! | [`parse_eeg_reading`] | EEG | u16 BE packet index + packed samples |
//! | [`parse_telemetry`] | Battery | 5 × u16 BE fields |
//! | [`parse_accelerometer`] | Accel | u16 BE seq + 3 × (i16 BE XYZ), 0.0000610352 g/LSB |
//! | [`parse_gyroscope`] | Gyro | u16 BE seq + 3 × (i16 BE XYZ), 0.0074768 °/s/LSB |
//!
//! Fixed-layout frames check their length up front and return
//! [`DecodeError::BufferTooShort`] before touching any byte.

use crate::error::DecodeError;
use crate::protocol::{
    ACCELEROMETER_SCALE, BATTERY_DIVISOR, EEG_HEADER_LEN, EEG_MIDPOINT, EEG_SCALE,
    FUEL_GAUGE_SCALE, GYROSCOPE_SCALE, IMU_FRAME_LEN, TELEMETRY_FRAME_LEN,
};
use crate::types::{EegReading, ImuData, TelemetryData, XyzSample};

// ── Byte helpers ─────────────────────────────────────────────────────────────

/// Big-endian `u16` at `offset`.  Callers check the frame length first.
fn read_u16_be(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Big-endian `i16` at `offset`.  Callers check the frame length first.
fn read_i16_be(data: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([data[offset], data[offset + 1]])
}

// ── EEG ──────────────────────────────────────────────────────────────────────

/// Decode a packed 12-bit unsigned array (big-endian, 3 bytes → 2 samples).
///
/// Input layout (repeated for the full slice):
/// ```text
/// [AA BB CC] → sample0 = (AA << 4) | (BB >> 4)
///              sample1 = ((BB & 0x0F) << 8) | CC
/// ```
///
/// Returns two values per complete group; trailing bytes that don't form a
/// full 3-byte group are silently ignored.
///
/// ```
/// # use muse_decode::parse::decode_unsigned_12bit;
/// assert_eq!(decode_unsigned_12bit(&[0xAB, 0xCD, 0xEF]), vec![0xABC, 0xDEF]);
/// ```
pub fn decode_unsigned_12bit(data: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(data.len() / 3 * 2);
    for c in data.chunks_exact(3) {
        let (b0, b1, b2) = (c[0] as u16, c[1] as u16, c[2] as u16);
        out.push((b0 << 4) | (b1 >> 4));
        out.push(((b1 & 0x0F) << 8) | b2);
    }
    out
}

/// Decode EEG payload bytes (everything after the 2-byte packet index) into µV.
///
/// Each 12-bit raw value is centred at 0x800 (mid-scale) and converted with
/// [`EEG_SCALE`]: `µV = (raw − 2048) × 0.48828125`
pub fn decode_eeg_samples(data: &[u8]) -> Vec<f64> {
    decode_unsigned_12bit(data)
        .into_iter()
        .map(|n| EEG_SCALE * (n as f64 - EEG_MIDPOINT as f64))
        .collect()
}

/// Parse a full EEG notification, header included, into an [`EegReading`].
///
/// Wire layout: `[index_hi, index_lo, packed samples …]`
///
/// Fails only when `data` has no room for the index; the sample block itself
/// follows the truncation policy of [`decode_unsigned_12bit`].
pub fn parse_eeg_reading(data: &[u8], electrode: usize) -> Result<EegReading, DecodeError> {
    DecodeError::require(data, EEG_HEADER_LEN)?;
    Ok(EegReading {
        index: read_u16_be(data, 0),
        electrode,
        samples: decode_eeg_samples(&data[EEG_HEADER_LEN..]),
    })
}

// ── Telemetry ─────────────────────────────────────────────────────────────────

/// Parse a telemetry BLE notification into a [`TelemetryData`].
///
/// All fields are big-endian `u16`:
///
/// | Bytes | Field | Conversion |
/// |---|---|---|
/// | 0–1 | sequence_id | raw |
/// | 2–3 | battery raw | ÷ 512 |
/// | 4–5 | fuel gauge  | × 2.2 |
/// | 6–7 | (unknown)   | skipped |
/// | 8–9 | temperature | raw |
///
/// Bytes past offset 10 are ignored.
pub fn parse_telemetry(data: &[u8]) -> Result<TelemetryData, DecodeError> {
    DecodeError::require(data, TELEMETRY_FRAME_LEN)?;
    Ok(TelemetryData {
        sequence_id: read_u16_be(data, 0),
        battery_level: read_u16_be(data, 2) as f32 / BATTERY_DIVISOR,
        fuel_gauge_voltage: read_u16_be(data, 4) as f32 * FUEL_GAUGE_SCALE,
        temperature: read_u16_be(data, 8),
    })
}

// ── IMU ───────────────────────────────────────────────────────────────────────

/// Shared decoder for accelerometer and gyroscope notifications.
///
/// Both sensors use an identical wire format: a 2-byte big-endian sequence ID
/// followed by three XYZ samples, each sample being three consecutive
/// big-endian `i16` values (x, y, z), laid out at byte offsets 2, 8, and 14.
///
/// `scale` is multiplied into every raw `i16`.
fn parse_imu_reading(data: &[u8], scale: f32) -> Result<ImuData, DecodeError> {
    DecodeError::require(data, IMU_FRAME_LEN)?;

    let sample = |off: usize| XyzSample {
        x: scale * read_i16_be(data, off) as f32,
        y: scale * read_i16_be(data, off + 2) as f32,
        z: scale * read_i16_be(data, off + 4) as f32,
    };

    Ok(ImuData {
        sequence_id: read_u16_be(data, 0),
        samples: [sample(2), sample(8), sample(14)],
    })
}

/// Parse an accelerometer notification into an [`ImuData`] in g.
///
/// Scale: [`ACCELEROMETER_SCALE`], an empirically derived factor.
pub fn parse_accelerometer(data: &[u8]) -> Result<ImuData, DecodeError> {
    parse_imu_reading(data, ACCELEROMETER_SCALE)
}

/// Parse a gyroscope notification into an [`ImuData`] in °/s.
///
/// Scale: [`GYROSCOPE_SCALE`], an empirically derived factor.
pub fn parse_gyroscope(data: &[u8]) -> Result<ImuData, DecodeError> {
    parse_imu_reading(data, GYROSCOPE_SCALE)
}
