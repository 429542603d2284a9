//! Marker segment records.

use crate::marker::{self, Marker};
use bytes::Bytes;

/// One marker plus its payload, as found in the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Segment {
    /// Marker code (`0xFF01..=0xFFFE`).
    pub marker_code: u16,
    /// Offset of the marker's first byte.
    pub byte_offset: usize,
    /// Order of discovery (0-based).
    pub sequence_index: usize,
    /// Value of the length field, for markers that carry one.
    pub declared_length: Option<u16>,
    /// Payload bytes; a view into the parsed buffer.
    #[cfg_attr(feature = "serialize", serde(serialize_with = "serialize_payload_len"))]
    pub payload: Bytes,
}

impl Segment {
    pub(crate) fn new(marker_code: u16, byte_offset: usize, sequence_index: usize) -> Self {
        Self {
            marker_code,
            byte_offset,
            sequence_index,
            declared_length: None,
            payload: Bytes::new(),
        }
    }

    /// Typed classification of the marker code.
    pub fn marker(&self) -> Marker {
        Marker::from_code(self.marker_code)
    }

    /// Marker code as `0x` plus uppercase hex.
    pub fn id_string(&self) -> String {
        marker::id_string(self.marker_code)
    }

    /// Label from the marker table, if the code has one.
    pub fn description(&self) -> Option<&'static str> {
        marker::description(self.marker_code)
    }

    /// Payload size in bytes.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Offset one past the last byte of this segment.
    pub fn end_offset(&self) -> usize {
        let header = if self.declared_length.is_some() { 4 } else { 2 };
        self.byte_offset + header + self.payload.len()
    }

    /// Renderable `(id_string, description, byte_offset)` row.
    pub fn row(&self) -> SegmentRow {
        SegmentRow {
            id: self.id_string(),
            description: self.description(),
            offset: self.byte_offset,
        }
    }
}

/// Display row for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SegmentRow {
    pub id: String,
    pub description: Option<&'static str>,
    pub offset: usize,
}

#[cfg(feature = "serialize")]
fn serialize_payload_len<S: serde::Serializer>(
    payload: &Bytes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(payload.len() as u64)
}
