//! Module-matrix encoding on top of the `qrcodegen` engine.

use qrcodegen::QrCode;

use crate::config::Redundancy;
use crate::error::BatchError;

/// A square grid of dark/light modules, stored row-major.
///
/// Immutable once built; workers hand it straight to the rasterizer.
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix by sampling `f` at every `(x, y)` in `[0, size)²`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                modules.push(f(x, y));
            }
        }
        Self { size, modules }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(x, y)` is dark. Both coordinates must be
    /// below [`size`](Self::size).
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.size + x]
    }
}

/// Encode `payload` into a module matrix at the requested redundancy.
///
/// # Errors
/// [`BatchError::Encoding`] when the payload exceeds what the largest
/// supported matrix can hold at `redundancy`.
pub fn encode(payload: &str, redundancy: Redundancy) -> Result<ModuleMatrix, BatchError> {
    let qr = QrCode::encode_text(payload, redundancy.ecc()).map_err(|e| {
        BatchError::Encoding {
            detail: e.to_string(),
        }
    })?;
    let size = qr.size() as usize;
    Ok(ModuleMatrix::from_fn(size, |x, y| {
        qr.get_module(x as i32, y as i32)
    }))
}
