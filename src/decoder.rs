//! Channel-tagged dispatch from raw notification payloads to [`MuseEvent`]s.
//!
//! The transport layer knows which characteristic a payload arrived on; this
//! module only routes it to the matching decoder in [`crate::parse`].

use log::debug;

use crate::error::DecodeError;
use crate::parse::{parse_accelerometer, parse_eeg_reading, parse_gyroscope, parse_telemetry};
use crate::protocol::{Channel, EEG_CHANNEL_NAMES, EEG_HEADER_LEN};
use crate::types::MuseEvent;

/// Configuration for [`NotificationDecoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderConfig {
    /// Reject EEG payloads whose sample block is not a whole number of
    /// 3-byte groups instead of dropping the trailing bytes.
    ///
    /// Default: `false`.
    pub strict_eeg_length: bool,
}

/// Routes channel-tagged payloads to the right decoder.
///
/// Holds only its configuration, so a single instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Default)]
pub struct NotificationDecoder {
    config: DecoderConfig,
}

impl NotificationDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one notification received on `channel`.
    ///
    /// EEG payloads are expected with their 2-byte packet index still in
    /// place.  Returns `Ok(None)` for DRL/REF notifications, whose layout is
    /// undocumented, and [`DecodeError::UnknownElectrode`] for an EEG tag
    /// outside [`EEG_CHANNEL_NAMES`].
    pub fn decode(&self, channel: Channel, data: &[u8]) -> Result<Option<MuseEvent>, DecodeError> {
        let event = match channel {
            Channel::Eeg(electrode) => {
                if electrode >= EEG_CHANNEL_NAMES.len() {
                    return Err(DecodeError::UnknownElectrode { electrode });
                }
                if self.config.strict_eeg_length && data.len() >= EEG_HEADER_LEN {
                    let len = data.len() - EEG_HEADER_LEN;
                    if len % 3 != 0 {
                        return Err(DecodeError::MisalignedPayload { len });
                    }
                }
                MuseEvent::Eeg(parse_eeg_reading(data, electrode)?)
            }
            Channel::Accelerometer => MuseEvent::Accelerometer(parse_accelerometer(data)?),
            Channel::Gyroscope => MuseEvent::Gyroscope(parse_gyroscope(data)?),
            Channel::Telemetry => MuseEvent::Telemetry(parse_telemetry(data)?),
            Channel::DrlRef => {
                debug!("DRL/REF notification ({} bytes) dropped", data.len());
                return Ok(None);
            }
        };
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> NotificationDecoder {
        NotificationDecoder::new(DecoderConfig {
            strict_eeg_length: true,
        })
    }

    #[test]
    fn default_config_is_lenient() {
        assert!(!NotificationDecoder::default().config().strict_eeg_length);
    }

    #[test]
    fn eeg_goes_to_the_tagged_electrode() {
        let ev = NotificationDecoder::default()
            .decode(Channel::Eeg(1), &[0x00, 0x07, 0x80, 0x08, 0x00])
            .unwrap();
        match ev {
            Some(MuseEvent::Eeg(r)) => {
                assert_eq!(r.index, 7);
                assert_eq!(r.electrode, 1);
                assert_eq!(r.samples, vec![0.0, 0.0]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn lenient_eeg_truncates_misaligned_payload() {
        let ev = NotificationDecoder::default()
            .decode(Channel::Eeg(0), &[0x00, 0x01, 0x80, 0x08, 0x00, 0x12])
            .unwrap();
        assert!(matches!(ev, Some(MuseEvent::Eeg(r)) if r.samples.len() == 2));
    }

    #[test]
    fn strict_eeg_rejects_misaligned_payload() {
        assert_eq!(
            strict().decode(Channel::Eeg(0), &[0x00, 0x01, 0x80, 0x08, 0x00, 0x12]),
            Err(DecodeError::MisalignedPayload { len: 4 })
        );
        assert!(strict()
            .decode(Channel::Eeg(0), &[0x00, 0x01, 0x80, 0x08, 0x00])
            .is_ok());
    }

    #[test]
    fn strict_eeg_still_reports_missing_header() {
        assert!(matches!(
            strict().decode(Channel::Eeg(2), &[0x00]),
            Err(DecodeError::BufferTooShort { needed: 2, actual: 1 })
        ));
    }

    #[test]
    fn imu_and_telemetry_variants() {
        let d = NotificationDecoder::default();
        let frame = [0u8; 20];
        assert!(matches!(
            d.decode(Channel::Accelerometer, &frame),
            Ok(Some(MuseEvent::Accelerometer(_)))
        ));
        assert!(matches!(
            d.decode(Channel::Gyroscope, &frame),
            Ok(Some(MuseEvent::Gyroscope(_)))
        ));
        assert!(matches!(
            d.decode(Channel::Telemetry, &frame[..10]),
            Ok(Some(MuseEvent::Telemetry(_)))
        ));
    }

    #[test]
    fn short_frames_propagate() {
        let d = NotificationDecoder::default();
        assert!(matches!(
            d.decode(Channel::Gyroscope, &[0; 10]),
            Err(DecodeError::BufferTooShort { needed: 20, .. })
        ));
        assert!(matches!(
            d.decode(Channel::Telemetry, &[0; 4]),
            Err(DecodeError::BufferTooShort { needed: 10, .. })
        ));
    }

    #[test]
    fn out_of_range_electrode_is_rejected() {
        let d = NotificationDecoder::default();
        assert_eq!(
            d.decode(Channel::Eeg(42), &[0, 1, 0x80, 0, 0]),
            Err(DecodeError::UnknownElectrode { electrode: 42 })
        );
        assert_eq!(
            d.decode(Channel::Eeg(5), &[0, 1]),
            Err(DecodeError::UnknownElectrode { electrode: 5 })
        );
        assert!(matches!(
            d.decode(Channel::Eeg(4), &[0, 1, 0x80, 0, 0]),
            Ok(Some(MuseEvent::Eeg(r))) if r.electrode == 4
        ));
    }

    #[test]
    fn drl_ref_is_dropped() {
        assert_eq!(
            NotificationDecoder::default().decode(Channel::DrlRef, &[1, 2, 3]),
            Ok(None)
        );
    }
}
