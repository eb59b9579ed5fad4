//! High-level, ergonomic library API: encode a payload into a module matrix
//! and write PNG/SVG artifacts. Prefer these entrypoints over the low-level
//! writer modules when embedding QRGEN.
use std::fs;
use std::path::{Path, PathBuf};

use qrcode::QrCode;
use tracing::info;

use crate::core::params::QrParams;
use crate::core::url::validate;
use crate::error::Result;
use crate::io::writers::png::write_png;
use crate::io::writers::svg::write_svg;
use crate::types::{EcLevelArg, OutputFormat, QrMatrix};

/// Fixed filenames for the one-shot PNG/SVG pair
const PAIR_PNG: &str = "qrcode.png";
const PAIR_SVG: &str = "qrcode.svg";

/// Encode a text payload into a QR module matrix.
///
/// The encoder selects the smallest QR version that fits the payload at the
/// requested error-correction level; oversized payloads surface as
/// `Error::Encode`.
pub fn encode(data: &str, ec_level: EcLevelArg) -> Result<QrMatrix> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), ec_level.to_ec_level())?;
    let size = code.width();
    let modules = code
        .to_colors()
        .iter()
        .map(|c| *c == qrcode::Color::Dark)
        .collect();
    Ok(QrMatrix::new(size, modules))
}

fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Validate `url`, encode it, and write the requested artifact(s) at `output`.
///
/// Missing parent directories are created; existing files are overwritten.
/// For `OutputFormat::Both` the `.png`/`.svg` siblings are derived from
/// `output`'s file stem. Returns the paths written, in write order.
pub fn generate_to_path(
    url: &str,
    output: &Path,
    format: OutputFormat,
    params: &QrParams,
) -> Result<Vec<PathBuf>> {
    validate(url)?;
    let matrix = encode(url, params.ec_level)?;
    ensure_parent_dir(output)?;

    info!("Encoded {} modules per side at EC {}", matrix.size(), params.ec_level);

    let mut written = Vec::new();
    match format {
        OutputFormat::Png => {
            write_png(output, &matrix, params.module_size, params.border)?;
            written.push(output.to_path_buf());
        }
        OutputFormat::Svg => {
            write_svg(output, &matrix, params.module_size, params.border)?;
            written.push(output.to_path_buf());
        }
        OutputFormat::Both => {
            let png = output.with_extension("png");
            let svg = output.with_extension("svg");
            write_png(&png, &matrix, params.module_size, params.border)?;
            write_svg(&svg, &matrix, params.module_size, params.border)?;
            written.push(png);
            written.push(svg);
        }
    }
    Ok(written)
}

/// One-shot helper: encode `url` as-is and write the fixed PNG/SVG pair
/// into `out_dir`, creating it if needed.
///
/// No strict validation is applied; callers wanting it should run
/// `core::url::validate` first. The PNG and SVG may use different module
/// scales, matching the pair's intended uses (print vs. embed).
pub fn generate_pair(
    url: &str,
    out_dir: &Path,
    ec_level: EcLevelArg,
    png_scale: u32,
    svg_scale: u32,
    border: u32,
) -> Result<(PathBuf, PathBuf)> {
    let matrix = encode(url, ec_level)?;
    fs::create_dir_all(out_dir)?;

    let png = out_dir.join(PAIR_PNG);
    let svg = out_dir.join(PAIR_SVG);
    write_png(&png, &matrix, png_scale, border)?;
    write_svg(&svg, &matrix, svg_scale, border)?;

    info!("Wrote pair: {:?} and {:?}", png, svg);
    Ok((png, svg))
}
