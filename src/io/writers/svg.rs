use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::QrMatrix;

/// Build an SVG document for a module matrix.
///
/// The viewBox is expressed in module units with the quiet zone included;
/// `width`/`height` scale the document to `module_size` pixels per module.
/// All dark modules share a single path, one `M{x},{y}h1v1h-1z` square each.
pub fn svg_string(matrix: &QrMatrix, module_size: u32, border: u32) -> String {
    let modules = matrix.size() as u32 + 2 * border;
    let dim = modules * module_size;

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{dim}\" height=\"{dim}\" viewBox=\"0 0 {modules} {modules}\" stroke=\"none\">\n"
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n");
    out.push_str("<path d=\"");
    let mut first = true;
    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            if !matrix.is_dark(x, y) {
                continue;
            }
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(&format!(
                "M{},{}h1v1h-1z",
                x + border as usize,
                y + border as usize
            ));
        }
    }
    out.push_str("\" fill=\"#000000\"/>\n");
    out.push_str("</svg>\n");
    out
}

/// Render `matrix` and save it as an SVG file at `output`.
pub fn write_svg(output: &Path, matrix: &QrMatrix, module_size: u32, border: u32) -> Result<()> {
    fs::write(output, svg_string(matrix, module_size, border))?;
    Ok(())
}
