//! Rasterizes a module matrix into a pixel image.
//!
//! Every module becomes a uniform `scale × scale` block painted from one
//! of two solid stencils: opaque black for dark modules, opaque white for
//! light ones. The stencils are built once per batch and shared read-only
//! by every worker; nothing mutates them after creation.

use image::{imageops, Rgba, RgbaImage};

use crate::error::BatchError;
use crate::matrix::ModuleMatrix;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The two precomputed module blocks at the configured scale.
pub struct Stencils {
    dark: RgbaImage,
    light: RgbaImage,
    scale: u32,
}

impl Stencils {
    /// Precompute both stencils.
    ///
    /// # Errors
    /// [`BatchError::Configuration`] when `scale` is zero, which would
    /// produce empty stencils and zero-sized output images.
    pub fn new(scale: u32) -> Result<Self, BatchError> {
        if scale == 0 {
            return Err(BatchError::Configuration(
                "scale must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            dark: RgbaImage::from_pixel(scale, scale, DARK),
            light: RgbaImage::from_pixel(scale, scale, LIGHT),
            scale,
        })
    }

    /// Pixel side length of one module block.
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

/// Paint `matrix` at the stencils' scale.
///
/// The result is exactly `matrix.size() * scale` pixels on each side,
/// with the module at `(x, y)` covering the pixel rectangle
/// `[x*scale, (x+1)*scale) × [y*scale, (y+1)*scale)`.
pub fn rasterize(matrix: &ModuleMatrix, stencils: &Stencils) -> RgbaImage {
    let scale = stencils.scale;
    let side = matrix.size() as u32 * scale;
    let mut image = RgbaImage::new(side, side);
    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            let stencil = if matrix.get(x, y) {
                &stencils.dark
            } else {
                &stencils.light
            };
            imageops::replace(
                &mut image,
                stencil,
                i64::from(x as u32 * scale),
                i64::from(y as u32 * scale),
            );
        }
    }
    image
}
