//! # jfifscope-core
//!
//! Structural reader for JPEG/JFIF files.
//!
//! The parser walks the marker segments of an in-memory buffer, checks the
//! ordering rules (SOI first, EOI last, no second SOI), captures each
//! segment's payload and decodes the JFIF APP0 header when the second segment
//! carries one. Entropy-coded scan data is kept as an opaque payload; pixel
//! decoding is out of scope.
//!
//! ## Modules
//!
//! - `cursor` - [`ByteSource`] capability and the [`ByteCursor`] implementation
//! - `marker` - marker codes, classification and the description table
//! - `segment` - the per-segment record
//! - `jfif` - JFIF APP0 header fields
//! - `parser` - [`SegmentParser`] and its [`JfifInstance`] result
//!
//! ## Features
//!
//! - `serialize` - derive `serde::Serialize` on the result types
//! - `tracing` - emit `tracing` events while parsing
//!
//! ## Example
//!
//! ```
//! use jfifscope_core::{parse, DecodeError};
//!
//! let instance = parse(vec![0xFF, 0xD8, 0xFF, 0xD9])?;
//! assert_eq!(instance.len(), 2);
//! assert!(!instance.is_conforming);
//!
//! let err = parse(vec![0xFF, 0xD9]).unwrap_err();
//! assert!(matches!(err, DecodeError::MissingStartOfImage { .. }));
//! # Ok::<(), DecodeError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod jfif;
pub mod marker;
pub mod parser;
pub mod segment;

pub use cursor::{ByteCursor, ByteSource};
pub use error::{DecodeError, Result};
pub use jfif::{Density, DensityUnit, JfifHeader, Thumbnail};
pub use marker::Marker;
pub use parser::{JfifInstance, SegmentParser};
pub use segment::{Segment, SegmentRow};

use bytes::Bytes;

/// Parse a complete in-memory JPEG buffer.
pub fn parse(buffer: impl Into<Bytes>) -> Result<JfifInstance> {
    SegmentParser::new(ByteCursor::new(buffer)).parse()
}
