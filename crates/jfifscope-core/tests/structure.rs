//! Structural properties checked through the public API.

use jfifscope_core::marker::{EOI, SOI, SOS};
use jfifscope_core::{parse, ByteCursor, ByteSource, DecodeError, Marker, SegmentParser};

/// SOI, JFIF APP0, APP1, DQT, SOF0, DHT, SOS with `scan_len` bytes, EOI.
fn jpeg_with_scan(scan_len: usize) -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    v.extend_from_slice(b"JFIF\0");
    v.extend_from_slice(&[0x01, 0x02, 0x02, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x00]);
    v.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x08]);
    v.extend_from_slice(b"Exif\0\0");
    v.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x04, 0x00, 0x01]);
    v.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00]);
    v.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x04, 0x00, 0x00]);
    v.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    v.extend(std::iter::repeat(0x5A).take(scan_len));
    v.extend_from_slice(&[0xFF, 0xD9]);
    v
}

#[test]
fn first_is_soi_last_is_eoi() {
    for scan_len in [0, 1, 17, 4096] {
        let instance = parse(jpeg_with_scan(scan_len)).unwrap();
        let segments = instance.segments();
        assert_eq!(segments[0].marker_code, SOI);
        assert_eq!(segments[segments.len() - 1].marker_code, EOI);
        assert!(segments[1..].iter().all(|s| s.marker_code != SOI));
    }
}

#[test]
fn sequence_indexes_match_positions() {
    let instance = parse(jpeg_with_scan(32)).unwrap();
    let indexes: Vec<usize> = instance.segments().iter().map(|s| s.sequence_index).collect();
    assert_eq!(indexes, (0..instance.len()).collect::<Vec<_>>());
}

#[test]
fn markers_are_classified() {
    let instance = parse(jpeg_with_scan(8)).unwrap();
    let markers: Vec<Marker> = instance.segments().iter().map(|s| s.marker()).collect();
    assert_eq!(
        markers,
        vec![
            Marker::StartOfImage,
            Marker::Application(0),
            Marker::Application(1),
            Marker::QuantizationTable,
            Marker::StartOfFrame(0),
            Marker::HuffmanTable,
            Marker::StartOfScan,
            Marker::EndOfImage,
        ]
    );
}

#[test]
fn scan_payload_size_tracks_buffer_length() {
    for scan_len in [0, 3, 1000] {
        let data = jpeg_with_scan(scan_len);
        let len = data.len();
        let instance = parse(data).unwrap();

        let sos = instance.find(SOS).unwrap();
        // 8 bytes of scan header precede the entropy-coded data
        assert_eq!(sos.payload_len(), scan_len + 8);
        assert_eq!(sos.byte_offset + 2 + sos.payload_len() + 2, len);
    }
}

#[test]
fn header_fields_in_dots_per_cm() {
    let instance = parse(jpeg_with_scan(4)).unwrap();
    let header = instance.jfif_header().unwrap();
    assert_eq!(header.version_string(), "1.02");
    assert_eq!(header.density.x, 28);
    assert_eq!(header.density.y, 28);
    assert_eq!(header.density.unit().to_string(), "dpcm");
}

#[test]
fn borrowed_cursor_is_reusable() {
    let mut cursor = ByteCursor::from(jpeg_with_scan(16));
    let first = SegmentParser::new(&mut cursor).parse().unwrap();
    assert_eq!(cursor.tell(), cursor.len());

    let second = SegmentParser::new(&mut cursor).parse().unwrap();
    assert_eq!(first, second);
}

#[test]
fn failure_returns_no_partial_result() {
    let mut data = jpeg_with_scan(0);
    data.truncate(26);
    let err = parse(data).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedPayload { code: 0xFFE1, .. }));
}
