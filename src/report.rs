//! Rendering parse results for the terminal or as JSON.

use jfifscope_core::{JfifHeader, JfifInstance, Segment};
use serde::Serialize;
use std::fmt::Write;

/// One row of the segment table.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentEntry {
    pub index: usize,
    pub id: String,
    pub marker: String,
    pub offset: usize,
    pub length: usize,
    pub description: Option<&'static str>,
}

impl From<&Segment> for SegmentEntry {
    fn from(segment: &Segment) -> Self {
        Self {
            index: segment.sequence_index,
            id: segment.id_string(),
            marker: segment.marker().to_string(),
            offset: segment.byte_offset,
            length: segment.payload_len(),
            description: segment.description(),
        }
    }
}

/// Everything `inspect` prints about one file.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub size: usize,
    pub is_conforming: bool,
    pub header: Option<JfifHeader>,
    pub segments: Vec<SegmentEntry>,
}

impl Report {
    pub fn new(name: impl Into<String>, size: usize, instance: &JfifInstance) -> Self {
        Self {
            name: name.into(),
            size,
            is_conforming: instance.is_conforming,
            header: instance.jfif_header(),
            segments: instance.segments().iter().map(SegmentEntry::from).collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        writeln!(out, "Name: {}", self.name).unwrap();
        writeln!(out, "Size: {} bytes", self.size).unwrap();

        match &self.header {
            Some(header) => {
                writeln!(
                    out,
                    "JFIF: version {}, density {}x{} {}, thumbnail {}x{}",
                    header.version_string(),
                    header.density.x,
                    header.density.y,
                    header.density.unit(),
                    header.thumbnail.x,
                    header.thumbnail.y
                ).unwrap();
            }
            None => {
                writeln!(out, "JFIF: not conforming (no JFIF APP0 header)").unwrap();
            }
        }

        writeln!(out, "\nSegments: {}", self.segments.len()).unwrap();
        writeln!(
            out,
            "  {:>4}  {:<8}  {:<6}  {:>10}  {:>8}  Description",
            "#", "ID", "Marker", "Offset", "Length"
        ).unwrap();
        for entry in &self.segments {
            writeln!(
                out,
                "  {:>4}  {:<8}  {:<6}  {:>10}  {:>8}  {}",
                entry.index,
                entry.id,
                entry.marker,
                entry.offset,
                entry.length,
                entry.description.unwrap_or("-")
            ).unwrap();
        }

        out
    }
}

/// The marker description table as printable lines.
pub fn marker_table() -> String {
    let mut out = String::new();
    for (code, label) in jfifscope_core::marker::described_codes() {
        writeln!(out, "{}  {}", jfifscope_core::marker::id_string(code), label).unwrap();
    }
    out
}
