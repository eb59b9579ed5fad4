//! Shared types and enums used across QRGEN.
//! Includes the CLI-facing error-correction level (`EcLevelArg`), the
//! `OutputFormat` selector, and the encoder's `QrMatrix` output.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Error-correction level selector as exposed on the CLI.
///
/// Maps onto the encoder's `qrcode::EcLevel`; higher levels trade payload
/// capacity for damage resilience.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum EcLevelArg {
    /// Recovers ~7% of data
    L,
    /// Recovers ~15% of data
    M,
    /// Recovers ~25% of data
    Q,
    /// Recovers ~30% of data
    H,
}

impl EcLevelArg {
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            EcLevelArg::L => qrcode::EcLevel::L,
            EcLevelArg::M => qrcode::EcLevel::M,
            EcLevelArg::Q => qrcode::EcLevel::Q,
            EcLevelArg::H => qrcode::EcLevel::H,
        }
    }
}

impl std::fmt::Display for EcLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EcLevelArg::L => "L",
            EcLevelArg::M => "M",
            EcLevelArg::Q => "Q",
            EcLevelArg::H => "H",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Svg,
    /// PNG and SVG siblings derived from one output path
    Both,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}

/// A square QR module matrix produced by the encoder.
///
/// Stored row-major; `true` modules are dark. The quiet zone is not part of
/// the matrix, writers add it when rendering.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn new(size: usize, modules: Vec<bool>) -> Self {
        debug_assert_eq!(size * size, modules.len());
        Self { size, modules }
    }

    /// Number of modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(x, y)` is dark. Both coordinates must be
    /// within `0..size`.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.size + x]
    }
}
