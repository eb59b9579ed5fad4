use serde::{Deserialize, Serialize};

use crate::types::EcLevelArg;

/// Encode parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrParams {
    pub ec_level: EcLevelArg,
    /// Rendered pixel width of one module
    pub module_size: u32,
    /// Quiet-zone width in modules
    pub border: u32,
}

impl Default for QrParams {
    fn default() -> Self {
        Self {
            ec_level: EcLevelArg::M,
            module_size: 10,
            border: 4,
        }
    }
}
