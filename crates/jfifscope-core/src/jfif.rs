//! JFIF APP0 header decoding.

use crate::segment::Segment;

/// Minimum APP0 payload size holding the fixed JFIF fields.
pub const JFIF_HEADER_LEN: usize = 14;

/// `"JFIF\0"` identifier at the start of the APP0 payload.
const JFIF_IDENTIFIER: &[u8; 5] = b"JFIF\0";

/// Pixel density of the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Density {
    /// Raw units byte (see [`DensityUnit`]).
    pub units: u8,
    pub x: u16,
    pub y: u16,
}

impl Density {
    pub fn unit(&self) -> DensityUnit {
        DensityUnit::from(self.units)
    }
}

/// Embedded thumbnail dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Thumbnail {
    pub x: u8,
    pub y: u8,
}

impl Thumbnail {
    /// Size of the uncompressed RGB thumbnail that follows the header.
    pub fn data_len(&self) -> usize {
        3 * self.x as usize * self.y as usize
    }
}

/// Units of the density fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum DensityUnit {
    /// Density only specifies the aspect ratio.
    NoUnits,
    PerInch,
    PerCentimeter,
    Unknown(u8),
}

impl From<u8> for DensityUnit {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::NoUnits,
            1 => Self::PerInch,
            2 => Self::PerCentimeter,
            other => Self::Unknown(other),
        }
    }
}

impl std::fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUnits => write!(f, "aspect ratio"),
            Self::PerInch => write!(f, "dpi"),
            Self::PerCentimeter => write!(f, "dpcm"),
            Self::Unknown(v) => write!(f, "unknown units ({})", v),
        }
    }
}

/// Fixed fields of a JFIF APP0 payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct JfifHeader {
    pub major_version: u8,
    pub minor_version: u8,
    pub density: Density,
    pub thumbnail: Thumbnail,
}

impl JfifHeader {
    /// Decode the header from the segment at sequence index 1.
    ///
    /// Returns `None` when the segment is not a JFIF APP0 segment; this never
    /// fails the surrounding parse.
    pub fn from_segment(segment: &Segment) -> Option<Self> {
        if !is_valid_jfif_app0(segment) {
            return None;
        }
        Self::from_payload(&segment.payload)
    }

    /// Decode the fixed fields from an APP0 payload (identifier included).
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() < JFIF_HEADER_LEN || &payload[..5] != JFIF_IDENTIFIER {
            return None;
        }

        Some(Self {
            major_version: payload[5],
            minor_version: payload[6],
            density: Density {
                units: payload[7],
                x: u16::from_be_bytes([payload[8], payload[9]]),
                y: u16::from_be_bytes([payload[10], payload[11]]),
            },
            thumbnail: Thumbnail {
                x: payload[12],
                y: payload[13],
            },
        })
    }

    /// Version formatted as `major.minor` with a two-digit minor (e.g. `1.02`).
    pub fn version_string(&self) -> String {
        format!("{}.{:02}", self.major_version, self.minor_version)
    }
}

/// Whether `segment` is the JFIF APP0 segment: second in the stream, payload
/// of at least 14 bytes starting with `"JFIF\0"`.
pub fn is_valid_jfif_app0(segment: &Segment) -> bool {
    segment.sequence_index == 1
        && segment.payload.len() >= JFIF_HEADER_LEN
        && u16::from_be_bytes([segment.payload[0], segment.payload[1]]) == 0x4A46
        && u16::from_be_bytes([segment.payload[2], segment.payload[3]]) == 0x4946
        && segment.payload[4] == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::APP0;
    use bytes::Bytes;

    fn app0(index: usize, payload: &'static [u8]) -> Segment {
        Segment {
            marker_code: APP0,
            byte_offset: 2,
            sequence_index: index,
            declared_length: Some(payload.len() as u16 + 2),
            payload: Bytes::from_static(payload),
        }
    }

    const PAYLOAD: &[u8] = b"JFIF\0\x01\x02\x01\x00\x48\x00\x48\x10\x20";

    #[test]
    fn test_decode_fields() {
        let header = JfifHeader::from_segment(&app0(1, PAYLOAD)).unwrap();
        assert_eq!(header.major_version, 1);
        assert_eq!(header.minor_version, 2);
        assert_eq!(header.density.units, 1);
        assert_eq!(header.density.unit(), DensityUnit::PerInch);
        assert_eq!(header.density.x, 72);
        assert_eq!(header.density.y, 72);
        assert_eq!(header.thumbnail.x, 0x10);
        assert_eq!(header.version_string(), "1.02");
    }

    // The reference tool stored byte 13 into thumbnail X, leaving Y at zero.
    // Thumbnail Y is read from its own offset here.
    #[test]
    fn test_thumbnail_y_is_read_from_offset_13() {
        let header = JfifHeader::from_segment(&app0(1, PAYLOAD)).unwrap();
        assert_eq!(header.thumbnail.x, 0x10);
        assert_eq!(header.thumbnail.y, 0x20);
        assert_eq!(header.thumbnail.data_len(), 3 * 0x10 * 0x20);
    }

    #[test]
    fn test_only_second_segment_qualifies() {
        assert!(is_valid_jfif_app0(&app0(1, PAYLOAD)));
        assert!(!is_valid_jfif_app0(&app0(2, PAYLOAD)));
        assert!(JfifHeader::from_segment(&app0(0, PAYLOAD)).is_none());
    }

    #[test]
    fn test_short_payload_rejected() {
        assert!(!is_valid_jfif_app0(&app0(1, b"JFIF\0\x01\x02\x01\x00\x48\x00\x48\x00")));
    }

    #[test]
    fn test_wrong_identifier_rejected() {
        assert!(!is_valid_jfif_app0(&app0(1, b"JFXX\0\x01\x02\x01\x00\x48\x00\x48\x00\x00")));
        assert!(!is_valid_jfif_app0(&app0(1, b"JFIF\x01\x01\x02\x01\x00\x48\x00\x48\x00\x00")));
        assert!(!is_valid_jfif_app0(&app0(1, b"Exif\0\0MM\0\x2a\0\0\0\x08")));
    }

    #[test]
    fn test_density_units() {
        assert_eq!(DensityUnit::from(0), DensityUnit::NoUnits);
        assert_eq!(DensityUnit::from(2), DensityUnit::PerCentimeter);
        assert_eq!(DensityUnit::from(9), DensityUnit::Unknown(9));
        assert_eq!(DensityUnit::PerInch.to_string(), "dpi");
    }
}
