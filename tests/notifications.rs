use muse_decode::prelude::*;
use muse_decode::protocol::{ACCELEROMETER_CHARACTERISTIC, EEG_CHARACTERISTICS};

/// A full-size EEG notification: 2-byte index + 18 bytes = 12 samples.
fn eeg_notification(index: u16) -> Vec<u8> {
    let mut data = index.to_be_bytes().to_vec();
    // six triplets alternating mid-scale pairs and a ramp
    for i in 0..6u8 {
        if i % 2 == 0 {
            data.extend_from_slice(&[0x80, 0x08, 0x00]);
        } else {
            data.extend_from_slice(&[0x00, 0x0F, 0xFF]);
        }
    }
    data
}

#[test]
fn full_eeg_packet_yields_twelve_samples() {
    let decoder = NotificationDecoder::default();
    let channel = Channel::from_uuid(EEG_CHARACTERISTICS[3]).unwrap();
    let event = decoder.decode(channel, &eeg_notification(0xFFFE)).unwrap();

    let reading = match event {
        Some(MuseEvent::Eeg(r)) => r,
        other => panic!("expected EEG, got {other:?}"),
    };
    assert_eq!(reading.index, 0xFFFE);
    assert_eq!(reading.electrode, 3);
    assert_eq!(reading.samples.len(), EEG_SAMPLES_PER_READING);
    assert_eq!(reading.samples[0], 0.0);
    assert_eq!(reading.samples[2], -1000.0);
    assert_eq!(reading.samples[3], 0.48828125 * 2047.0);
}

#[test]
fn header_stripped_payload_matches_reading() {
    let packet = eeg_notification(1);
    let reading = parse_eeg_reading(&packet, 0).unwrap();
    assert_eq!(reading.samples, decode_eeg_samples(&packet[2..]));
    assert_eq!(
        decode_unsigned_12bit(&packet[2..]).len(),
        reading.samples.len()
    );
}

#[test]
fn accelerometer_notification_by_uuid() {
    let mut frame = vec![0x00, 0x01];
    for v in [1000i16, 0, -16384, 0, 0, 16384, 0, 0, 0] {
        frame.extend_from_slice(&v.to_be_bytes());
    }
    let channel = Channel::from_uuid(ACCELEROMETER_CHARACTERISTIC).unwrap();
    let event = NotificationDecoder::default()
        .decode(channel, &frame)
        .unwrap()
        .unwrap();

    let imu = match event {
        MuseEvent::Accelerometer(imu) => imu,
        other => panic!("expected accelerometer, got {other:?}"),
    };
    assert_eq!(imu.sequence_id, 1);
    assert!((imu.samples[0].x - 0.0610352).abs() < 1e-6);
    assert!((imu.samples[0].z + 1.0).abs() < 1e-4);
    assert!((imu.samples[1].z - 1.0).abs() < 1e-4);
    assert_eq!(imu.samples[2], XyzSample { x: 0.0, y: 0.0, z: 0.0 });
}

#[test]
fn short_buffers_fail_without_partial_output() {
    let decoder = NotificationDecoder::default();
    for channel in [Channel::Accelerometer, Channel::Gyroscope] {
        assert_eq!(
            decoder.decode(channel, &[0; 19]),
            Err(DecodeError::BufferTooShort {
                needed: 20,
                actual: 19
            })
        );
    }
    assert_eq!(
        parse_telemetry(&[0; 5]),
        Err(DecodeError::BufferTooShort {
            needed: 10,
            actual: 5
        })
    );
}

#[test]
fn telemetry_serialises_with_type_tag() {
    let payload = [0x00, 0x2A, 0x04, 0x00, 0x00, 0x64, 0xBE, 0xEF, 0x01, 0x2C];
    let event = NotificationDecoder::default()
        .decode(Channel::Telemetry, &payload)
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "telemetry");
    assert_eq!(json["sequence_id"], 42);
    assert_eq!(json["battery_level"], 2.0);
    assert_eq!(json["temperature"], 300);
}

#[test]
fn strict_mode_flags_misaligned_eeg() {
    let decoder = NotificationDecoder::new(DecoderConfig {
        strict_eeg_length: true,
    });
    let mut packet = eeg_notification(9);
    packet.pop();
    assert_eq!(
        decoder.decode(Channel::Eeg(0), &packet),
        Err(DecodeError::MisalignedPayload { len: 17 })
    );
}

#[test]
fn electrode_outside_headset_range_is_rejected() {
    let decoder = NotificationDecoder::default();
    assert_eq!(Channel::Eeg(42).uuid(), None);
    assert_eq!(
        decoder.decode(Channel::Eeg(42), &[0, 1, 0x80, 0, 0]),
        Err(DecodeError::UnknownElectrode { electrode: 42 })
    );
}

#[test]
fn decoding_twice_is_identical() {
    let decoder = NotificationDecoder::default();
    let packet = eeg_notification(77);
    assert_eq!(
        decoder.decode(Channel::Eeg(2), &packet),
        decoder.decode(Channel::Eeg(2), &packet)
    );
}
