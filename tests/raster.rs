use image::Rgba;
use qrbatch::raster::rasterize;
use qrbatch::{BatchError, ModuleMatrix, Stencils};

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn zero_scale_is_rejected_before_any_work() {
    let err = Stencils::new(0).unwrap_err();
    assert!(matches!(err, BatchError::Configuration(_)));
    assert!(err.is_fatal());
}

#[test]
fn output_dimensions_are_size_times_scale() -> anyhow::Result<()> {
    let matrix = ModuleMatrix::from_fn(5, |x, y| (x + y) % 2 == 0);
    for scale in [1u32, 3, 10] {
        let image = rasterize(&matrix, &Stencils::new(scale)?);
        assert_eq!(image.width(), 5 * scale);
        assert_eq!(image.height(), 5 * scale);
    }
    Ok(())
}

#[test]
fn every_block_is_uniform_and_matches_its_module() -> anyhow::Result<()> {
    let matrix = ModuleMatrix::from_fn(4, |x, y| (x + y) % 2 == 0);
    let scale = 3u32;
    let image = rasterize(&matrix, &Stencils::new(scale)?);

    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            let expected = if matrix.get(x, y) { DARK } else { LIGHT };
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x as u32 * scale + dx;
                    let py = y as u32 * scale + dy;
                    assert_eq!(
                        *image.get_pixel(px, py),
                        expected,
                        "pixel ({px}, {py}) in block ({x}, {y})"
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn only_two_colors_ever_appear() -> anyhow::Result<()> {
    let matrix = ModuleMatrix::from_fn(7, |x, y| x * y % 3 == 0);
    let image = rasterize(&matrix, &Stencils::new(4)?);
    for pixel in image.pixels() {
        assert!(*pixel == DARK || *pixel == LIGHT);
    }
    Ok(())
}
