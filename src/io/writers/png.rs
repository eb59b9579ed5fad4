use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

use crate::error::Result;
use crate::types::QrMatrix;

/// Paint a module matrix into a grayscale buffer.
///
/// Each module becomes a `module_size` x `module_size` pixel block, with a
/// `border`-module quiet zone on every side. Dark modules are black (0),
/// everything else white (255).
pub fn render_gray(matrix: &QrMatrix, module_size: u32, border: u32) -> GrayImage {
    let modules = matrix.size() as u32 + 2 * border;
    let dim = modules * module_size;
    let mut img = GrayImage::from_pixel(dim, dim, Luma([255u8]));

    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let px = (x as u32 + border) * module_size;
            let py = (y as u32 + border) * module_size;
            for dy in 0..module_size {
                for dx in 0..module_size {
                    img.put_pixel(px + dx, py + dy, Luma([0u8]));
                }
            }
        }
    }

    img
}

/// Render `matrix` and save it as a PNG file at `output`.
///
/// The format is forced to PNG regardless of the path's extension.
pub fn write_png(output: &Path, matrix: &QrMatrix, module_size: u32, border: u32) -> Result<()> {
    let img = render_gray(matrix, module_size, border);
    img.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::encode;
    use crate::types::EcLevelArg;

    #[test]
    fn render_dimensions_include_quiet_zone() {
        let matrix = encode("https://example.com", EcLevelArg::M).unwrap();
        let img = render_gray(&matrix, 2, 4);
        let expected = (matrix.size() as u32 + 8) * 2;
        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
    }

    #[test]
    fn quiet_zone_is_light_and_finder_corner_dark() {
        let matrix = encode("https://example.com", EcLevelArg::M).unwrap();
        let img = render_gray(&matrix, 3, 4);

        // top-left pixel sits inside the quiet zone
        assert_eq!(img.get_pixel(0, 0), &Luma([255u8]));

        // module (0, 0) is the corner of the top-left finder pattern
        assert!(matrix.is_dark(0, 0));
        assert_eq!(img.get_pixel(4 * 3, 4 * 3), &Luma([0u8]));
    }

    #[test]
    fn zero_border_renders_edge_modules_at_origin() {
        let matrix = encode("https://example.com", EcLevelArg::L).unwrap();
        let img = render_gray(&matrix, 1, 0);
        assert_eq!(img.width(), matrix.size() as u32);
        assert_eq!(img.get_pixel(0, 0), &Luma([0u8]));
    }
}
