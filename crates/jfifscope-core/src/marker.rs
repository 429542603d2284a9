//! JPEG marker codes and their descriptions.

/// Start of image.
pub const SOI: u16 = 0xFFD8;
/// End of image.
pub const EOI: u16 = 0xFFD9;
/// Start of scan.
pub const SOS: u16 = 0xFFDA;
/// First application segment, carrying the JFIF header.
pub const APP0: u16 = 0xFFE0;

/// Lowest valid marker code.
pub const MIN_CODE: u16 = 0xFF01;
/// Highest valid marker code.
pub const MAX_CODE: u16 = 0xFFFE;

/// First code covered by [`DESCRIPTIONS`].
const TABLE_BASE: u16 = 0xFFC0;

const RESTART: &str = "Restart";
const APP_EXTENSION: &str = "[Reserved: application extension]";
const JPEG_EXTENSION: &str = "[Reserved: JPEG extension]";

/// Labels for `0xFFC0..=0xFFFF`, indexed by `code - 0xFFC0`.
static DESCRIPTIONS: [&str; 64] = [
    // 0xFFC0
    "Baseline DCT; Huffman",
    "Extended sequential DCT; Huffman",
    "Progressive DCT; Huffman",
    "Spatial lossless; Huffman",
    "Huffman table",
    "Differential sequential DCT; Huffman",
    "Differential progressive DCT; Huffman",
    "Differential spatial; Huffman",
    JPEG_EXTENSION,
    "Extended sequential DCT; Arithmetic",
    "Progressive DCT; Arithmetic",
    "Spatial lossless; Arithmetic",
    "Arithmetic coding conditioning",
    "Differential sequential DCT; Arithmetic",
    "Differential progressive DCT; Arithmetic",
    "Differential spatial; Arithmetic",
    // 0xFFD0
    RESTART,
    RESTART,
    RESTART,
    RESTART,
    RESTART,
    RESTART,
    RESTART,
    RESTART,
    "Start of Image (SOI)",
    "End of Image (EOI)",
    "Start of Scan (SOS)",
    "Quantisation table",
    "Number of lines",
    "Restart interval",
    "Hierarchical progression",
    "Expand reference components",
    // 0xFFE0
    "JFIF Header",
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    APP_EXTENSION,
    // 0xFFF0
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    JPEG_EXTENSION,
    "Comment",
    "[Invalid]",
];

/// Look up the human-readable label for a marker code.
///
/// Codes below `0xFFC0` have no label.
pub fn description(code: u16) -> Option<&'static str> {
    code.checked_sub(TABLE_BASE)
        .and_then(|index| DESCRIPTIONS.get(index as usize))
        .copied()
}

/// Whether `code` lies in the valid marker range `0xFF01..=0xFFFE`.
pub fn is_valid_code(code: u16) -> bool {
    (MIN_CODE..=MAX_CODE).contains(&code)
}

/// Format a marker code as `0x` followed by uppercase hex (e.g. `0xFFD8`).
pub fn id_string(code: u16) -> String {
    format!("0x{:X}", code)
}

/// Every marker code that has a description, in ascending order.
pub fn described_codes() -> impl Iterator<Item = (u16, &'static str)> {
    DESCRIPTIONS
        .iter()
        .enumerate()
        .map(|(i, label)| (TABLE_BASE + i as u16, *label))
}

/// Marker classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Marker {
    /// Start of frame (`0xFFC0..=0xFFCF` except DHT, JPG and DAC).
    StartOfFrame(u8),
    /// Define Huffman table.
    HuffmanTable,
    /// Define arithmetic coding conditioning.
    ArithmeticConditioning,
    /// Restart marker `RSTn`.
    Restart(u8),
    StartOfImage,
    EndOfImage,
    StartOfScan,
    QuantizationTable,
    NumberOfLines,
    RestartInterval,
    HierarchicalProgression,
    ExpandReference,
    /// Application segment `APPn`.
    Application(u8),
    Comment,
    /// Reserved JPEG extension codes (`JPG`, `JPGn`).
    Reserved(u16),
    /// Anything else in the valid range (e.g. `0xFF01`, `0xFF02..=0xFFBF`).
    Other(u16),
}

impl Marker {
    /// Classify a marker code.
    pub fn from_code(code: u16) -> Self {
        match code {
            0xFFC4 => Self::HuffmanTable,
            0xFFC8 => Self::Reserved(code),
            0xFFCC => Self::ArithmeticConditioning,
            0xFFC0..=0xFFCF => Self::StartOfFrame((code - 0xFFC0) as u8),
            0xFFD0..=0xFFD7 => Self::Restart((code - 0xFFD0) as u8),
            SOI => Self::StartOfImage,
            EOI => Self::EndOfImage,
            SOS => Self::StartOfScan,
            0xFFDB => Self::QuantizationTable,
            0xFFDC => Self::NumberOfLines,
            0xFFDD => Self::RestartInterval,
            0xFFDE => Self::HierarchicalProgression,
            0xFFDF => Self::ExpandReference,
            0xFFE0..=0xFFEF => Self::Application((code - APP0) as u8),
            0xFFF0..=0xFFFD => Self::Reserved(code),
            0xFFFE => Self::Comment,
            _ => Self::Other(code),
        }
    }

    /// Whether this marker stands alone, without a length field.
    pub fn is_standalone(&self) -> bool {
        matches!(self, Self::StartOfImage | Self::EndOfImage)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartOfFrame(n) => write!(f, "SOF{}", n),
            Self::HuffmanTable => write!(f, "DHT"),
            Self::ArithmeticConditioning => write!(f, "DAC"),
            Self::Restart(n) => write!(f, "RST{}", n),
            Self::StartOfImage => write!(f, "SOI"),
            Self::EndOfImage => write!(f, "EOI"),
            Self::StartOfScan => write!(f, "SOS"),
            Self::QuantizationTable => write!(f, "DQT"),
            Self::NumberOfLines => write!(f, "DNL"),
            Self::RestartInterval => write!(f, "DRI"),
            Self::HierarchicalProgression => write!(f, "DHP"),
            Self::ExpandReference => write!(f, "EXP"),
            Self::Application(n) => write!(f, "APP{}", n),
            Self::Comment => write!(f, "COM"),
            Self::Reserved(code) | Self::Other(code) => write!(f, "{}", id_string(*code)),
        }
    }
}
