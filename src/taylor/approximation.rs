//! # Approximation Facade Module
//!
//! One-call entry points bundling parsing, expansion and grid comparison.
//! `approximate` and `approximate_str` are stateless: every call carries the
//! function, point and degree, and returns a self-contained
//! `TaylorApproximation` that remembers all three.

use crate::Utils::grid::{SurfaceComparison, linspace};
use crate::symbolic::symbolic_engine::Expr;
use crate::taylor::expander::{ExpansionPoint, TaylorExpander};
use crate::taylor::errors::TaylorError;

/// A finished approximation: the original function, the Taylor polynomial
/// and the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorApproximation {
    function: Expr,
    polynomial: Expr,
    point: ExpansionPoint,
    degree: usize,
}

impl TaylorApproximation {
    pub fn function(&self) -> &Expr {
        &self.function
    }

    pub fn polynomial(&self) -> &Expr {
        &self.polynomial
    }

    pub fn point(&self) -> &ExpansionPoint {
        &self.point
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Human-readable form of the polynomial with explicit parentheses.
    pub fn pretty(&self) -> String {
        self.polynomial.sym_to_str()
    }

    /// The polynomial as a closure `T(x, y)`.
    pub fn evaluator(&self) -> Box<dyn Fn(f64, f64) -> f64 + Send + Sync> {
        self.polynomial
            .lambdify2D(self.point.x_name(), self.point.y_name())
    }

    /// The original function as a closure `f(x, y)`.
    pub fn function_evaluator(&self) -> Box<dyn Fn(f64, f64) -> f64 + Send + Sync> {
        self.function
            .lambdify2D(self.point.x_name(), self.point.y_name())
    }

    /// Samples both surfaces over a square grid of `num_values` points per
    /// axis, centered on the expansion point with half-width `half_width`.
    pub fn eval_on_grid(&self, half_width: f64, num_values: usize) -> SurfaceComparison {
        let x_mesh = linspace(
            self.point.x0() - half_width,
            self.point.x0() + half_width,
            num_values,
        );
        let y_mesh = linspace(
            self.point.y0() - half_width,
            self.point.y0() + half_width,
            num_values,
        );
        SurfaceComparison::new(self.function_evaluator(), self.evaluator(), x_mesh, y_mesh)
    }
}

/// Expands `function` to the given degree around `point`.
pub fn approximate(
    function: Expr,
    point: &ExpansionPoint,
    degree: usize,
) -> Result<TaylorApproximation, TaylorError> {
    let expander = TaylorExpander::new(function.clone());
    let polynomial = expander.expand(point, degree)?;
    Ok(TaylorApproximation {
        function,
        polynomial,
        point: point.clone(),
        degree,
    })
}

/// Parses `input` and expands it, wrapping parser failures into the Taylor
/// error taxonomy.
pub fn approximate_str(
    input: &str,
    point: &ExpansionPoint,
    degree: usize,
) -> Result<TaylorApproximation, TaylorError> {
    let function = Expr::parse_expression(input).map_err(TaylorError::Parse)?;
    approximate(function, point, degree)
}
