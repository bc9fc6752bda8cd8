//! Rectangular grids for comparing a function against its Taylor polynomial.
//!
//! A `SurfaceComparison` holds both surfaces sampled over the same mesh,
//! stored as nalgebra matrices indexed `(row = x index, column = y index)`.

use itertools::iproduct;
use nalgebra::DMatrix;

/// `num_values` evenly spaced points covering `[start, end]` inclusive.
/// Zero points give an empty mesh, a single point gives `[start]`.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values - 1) as f64;
            (0..num_values).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Samples `f` over the cartesian product of the two meshes.
pub fn eval_surface<F>(f: F, x_mesh: &[f64], y_mesh: &[f64]) -> DMatrix<f64>
where
    F: Fn(f64, f64) -> f64,
{
    DMatrix::from_fn(x_mesh.len(), y_mesh.len(), |i, j| f(x_mesh[i], y_mesh[j]))
}

/// A function surface and its Taylor surface over one shared mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceComparison {
    pub x_mesh: Vec<f64>,
    pub y_mesh: Vec<f64>,
    pub original: DMatrix<f64>,
    pub taylor: DMatrix<f64>,
}

impl SurfaceComparison {
    /// Samples both closures over the same rectangular grid.
    pub fn new<F, T>(f: F, taylor: T, x_mesh: Vec<f64>, y_mesh: Vec<f64>) -> Self
    where
        F: Fn(f64, f64) -> f64,
        T: Fn(f64, f64) -> f64,
    {
        let original = eval_surface(f, &x_mesh, &y_mesh);
        let taylor = eval_surface(taylor, &x_mesh, &y_mesh);
        Self {
            x_mesh,
            y_mesh,
            original,
            taylor,
        }
    }

    /// Largest absolute deviation |T - f| over the grid. NaN entries (poles,
    /// log of a negative argument) are skipped.
    pub fn max_abs_deviation(&self) -> f64 {
        iproduct!(0..self.x_mesh.len(), 0..self.y_mesh.len())
            .map(|(i, j)| (self.taylor[(i, j)] - self.original[(i, j)]).abs())
            .filter(|d| d.is_finite())
            .fold(0.0, f64::max)
    }
}
