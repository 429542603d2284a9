//! Marker segment walker.

use crate::cursor::ByteSource;
use crate::error::{DecodeError, Result};
use crate::jfif::{Density, DensityUnit, JfifHeader, Thumbnail};
use crate::marker::{self, EOI, SOI, SOS};
use crate::segment::{Segment, SegmentRow};
use std::io::SeekFrom;

/// Parsed JPEG/JFIF structure.
///
/// Header fields stay at zero unless `is_conforming` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct JfifInstance {
    /// Segments in stream order, SOI first and EOI last.
    pub segments: Vec<Segment>,
    /// Second segment carried a valid JFIF APP0 header.
    pub is_conforming: bool,
    pub major_version: u8,
    pub minor_version: u8,
    pub density: Density,
    pub thumbnail: Thumbnail,
}

impl JfifInstance {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment with the given marker code.
    pub fn find(&self, marker_code: u16) -> Option<&Segment> {
        self.segments.iter().find(|s| s.marker_code == marker_code)
    }

    /// Renderable `(id_string, description, byte_offset)` rows.
    pub fn segment_rows(&self) -> Vec<SegmentRow> {
        self.segments.iter().map(Segment::row).collect()
    }

    /// The decoded header, when the stream is conforming.
    pub fn jfif_header(&self) -> Option<JfifHeader> {
        self.is_conforming.then_some(JfifHeader {
            major_version: self.major_version,
            minor_version: self.minor_version,
            density: self.density,
            thumbnail: self.thumbnail,
        })
    }

    pub fn density_unit(&self) -> DensityUnit {
        self.density.unit()
    }

    fn add_segment(&mut self, marker_code: u16, byte_offset: usize) -> &mut Segment {
        let index = self.segments.len();
        self.segments.push(Segment::new(marker_code, byte_offset, index));
        &mut self.segments[index]
    }

    /// Fill the header fields from the second segment when it is JFIF APP0.
    fn parse_jfif_header(&mut self) {
        let Some(header) = self.segments.get(1).and_then(JfifHeader::from_segment) else {
            return;
        };

        self.is_conforming = true;
        self.major_version = header.major_version;
        self.minor_version = header.minor_version;
        self.density = header.density;
        self.thumbnail = header.thumbnail;
    }
}

/// Walks the marker segments of a byte source.
pub struct SegmentParser<S> {
    source: S,
}

impl<S: ByteSource> SegmentParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the byte source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Parse the whole buffer from the start.
    ///
    /// Stops after EOI. Any structural violation aborts with a
    /// [`DecodeError`]; a missing or malformed JFIF header only leaves
    /// `is_conforming` unset.
    pub fn parse(&mut self) -> Result<JfifInstance> {
        let mut instance = JfifInstance::default();

        self.source.rewind();

        loop {
            let offset = self.source.tell();
            let code = self.read_u16().ok_or(DecodeError::TruncatedMarker { offset })?;

            if !marker::is_valid_code(code) {
                return Err(DecodeError::InvalidMarker { code, offset });
            }

            // SOI must come first and only first
            if instance.is_empty() && code != SOI {
                return Err(DecodeError::MissingStartOfImage { code });
            }
            if !instance.is_empty() && code == SOI {
                return Err(DecodeError::UnexpectedStartOfImage { offset });
            }

            let segment = instance.add_segment(code, offset);

            match code {
                SOI | EOI => {}
                SOS => self.read_scan(segment),
                _ => self.read_payload(segment)?,
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(
                "segment {} {} at {} ({} payload bytes)",
                segment.sequence_index,
                segment.id_string(),
                segment.byte_offset,
                segment.payload_len()
            );

            if code == EOI {
                break;
            }
        }

        instance.parse_jfif_header();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "parsed {} segments, conforming: {}",
            instance.len(),
            instance.is_conforming
        );

        Ok(instance)
    }

    fn read_u16(&mut self) -> Option<u16> {
        let mut buf = [0u8; 2];
        if self.source.read(&mut buf, 2) != 2 {
            return None;
        }
        Some(u16::from_be_bytes(buf))
    }

    /// Entropy-coded data runs up to the 2 bytes reserved for EOI.
    fn read_scan(&mut self, segment: &mut Segment) {
        let start = self.source.tell();
        let end = self.source.len().saturating_sub(2).max(start);

        segment.payload = self.source.underlying_buffer().slice(start..end);
        self.source.seek(SeekFrom::Start(end as u64));
    }

    /// Length-prefixed payload; the length counts its own 2 bytes.
    fn read_payload(&mut self, segment: &mut Segment) -> Result<()> {
        let code = segment.marker_code;
        let length_offset = self.source.tell();
        let declared = self.read_u16().ok_or(DecodeError::TruncatedLength {
            code,
            offset: length_offset,
        })?;
        segment.declared_length = Some(declared);

        let size = declared.saturating_sub(2) as usize;
        if size == 0 {
            return Ok(());
        }

        let start = self.source.tell();
        let available = self.source.remaining();
        if size > available {
            return Err(DecodeError::TruncatedPayload {
                code,
                offset: segment.byte_offset,
                declared: size,
                available,
            });
        }

        segment.payload = self.source.underlying_buffer().slice(start..start + size);
        self.source.seek(SeekFrom::Current(size as i64));
        Ok(())
    }
}
