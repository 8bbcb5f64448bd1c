//! Error type shared by every fallible decoder in the crate.

use thiserror::Error;

/// Failure to decode a notification payload.
///
/// Fixed-layout frames (IMU, telemetry, the EEG packet index) need a minimum
/// number of bytes; anything shorter points at a header-stripping or
/// transport bug upstream and is reported rather than partially decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is shorter than the frame layout requires.
    #[error("buffer too short: need {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    /// EEG payload length is not a whole number of 3-byte groups.
    ///
    /// Only raised when [`crate::decoder::DecoderConfig::strict_eeg_length`]
    /// is enabled; the plain decoders truncate instead.
    #[error("EEG payload of {len} bytes is not a multiple of 3")]
    MisalignedPayload { len: usize },

    /// EEG channel tag names an electrode outside TP9..=AUX.
    #[error("unknown EEG electrode {electrode}")]
    UnknownElectrode { electrode: usize },
}

impl DecodeError {
    /// Return `Err(BufferTooShort)` when `data` holds fewer than `needed` bytes.
    pub(crate) fn require(data: &[u8], needed: usize) -> Result<(), DecodeError> {
        if data.len() < needed {
            return Err(DecodeError::BufferTooShort {
                needed,
                actual: data.len(),
            });
        }
        Ok(())
    }
}
