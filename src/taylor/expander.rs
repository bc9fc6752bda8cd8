//! # Taylor Expander Module
//!
//! Builds the Taylor polynomial of a function of two variables around an
//! expansion point. Degree 2 is the tangent plane
//! `f(p) + fx(p)*(x - x0) + fy(p)*(y - y0)`; higher degrees add the terms
//!
//! `(∂^k f / ∂x^(k-j) ∂y^j)(p) * (x - x0)^(k-j) * (y - y0)^j / ((k-j)! * j!)`
//!
//! for k = 1..=degree, j = 0..=k. Derivatives are evaluated numerically at
//! the expansion point, so every coefficient is a plain `Const` and the
//! final polynomial simplifies into a compact closed form. Simplification of
//! the assembled sum runs exactly once, at the end.

use crate::symbolic::symbolic_engine::Expr;
use crate::taylor::differential::DifferentialEngine;
use crate::taylor::errors::TaylorError;
use log::info;

/// An ordered pair of (variable name, coordinate) bindings.
///
/// The first binding is the x-axis of the expansion, the second the y-axis;
/// term ordering and the `lambdify2D` argument order follow from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionPoint {
    x: (String, f64),
    y: (String, f64),
}

impl ExpansionPoint {
    /// Builds an expansion point from exactly two (name, value) pairs.
    pub fn new(pairs: &[(&str, f64)]) -> Result<Self, TaylorError> {
        match pairs {
            [(x_name, x0), (y_name, y0)] => Ok(Self {
                x: (x_name.to_string(), *x0),
                y: (y_name.to_string(), *y0),
            }),
            _ => Err(TaylorError::InvalidPointArity {
                found: pairs.len(),
            }),
        }
    }

    pub fn x_name(&self) -> &str {
        &self.x.0
    }

    pub fn y_name(&self) -> &str {
        &self.y.0
    }

    pub fn x0(&self) -> f64 {
        self.x.1
    }

    pub fn y0(&self) -> f64 {
        self.y.1
    }

    /// Variable names in axis order, the order lambdified closures expect.
    pub fn names(&self) -> [&str; 2] {
        [&self.x.0, &self.y.0]
    }

    /// Coordinates in axis order.
    pub fn values(&self) -> [f64; 2] {
        [self.x.1, self.y.1]
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n).product::<usize>() as f64
}

/// Expands a fixed function around caller-supplied points and degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorExpander {
    engine: DifferentialEngine,
}

impl TaylorExpander {
    pub fn new(expr: Expr) -> Self {
        Self {
            engine: DifferentialEngine::new(expr),
        }
    }

    /// Parses the function from its string form first.
    pub fn from_str(input: &str) -> Result<Self, TaylorError> {
        let expr = Expr::parse_expression(input).map_err(TaylorError::Parse)?;
        Ok(Self::new(expr))
    }

    /// The function being approximated.
    pub fn function(&self) -> &Expr {
        self.engine.expr()
    }

    /// The affine tangent plane at the expansion point, already simplified:
    /// `f(p) + fx(p)*(x - x0) + fy(p)*(y - y0)`.
    pub fn tangent_plane(&self, point: &ExpansionPoint) -> Expr {
        let terms = self.tangent_plane_terms(point);
        let plane = terms
            .into_iter()
            .reduce(|a, b| a + b)
            .unwrap_or(Expr::Const(0.0));
        plane.simplify()
    }

    /// Taylor polynomial of the given degree around the given point.
    ///
    /// Degree 2 is an alias for the tangent plane. Degrees below 2 are
    /// rejected: a "Taylor approximation" that cannot even tilt with the
    /// surface is never what a caller wants.
    pub fn expand(&self, point: &ExpansionPoint, degree: usize) -> Result<Expr, TaylorError> {
        let terms = self.expansion_terms(point, degree)?;
        let sum = terms
            .into_iter()
            .reduce(|a, b| a + b)
            .unwrap_or(Expr::Const(0.0));
        let taylor = sum.simplify();
        info!(
            "degree {} expansion of {} around ({}, {}): {}",
            degree,
            self.function(),
            point.x0(),
            point.y0(),
            taylor
        );
        Ok(taylor)
    }

    /// The individual terms of the expansion, unsimplified and in canonical
    /// order: the constant term first, then derivative order k ascending and
    /// within each k the y-derivative count j ascending.
    ///
    /// Degree 2 yields the three tangent-plane terms; degree d >= 3 yields
    /// 1 + d(d+3)/2 terms (zero coefficients included).
    pub fn expansion_terms(
        &self,
        point: &ExpansionPoint,
        degree: usize,
    ) -> Result<Vec<Expr>, TaylorError> {
        if degree < 2 {
            return Err(TaylorError::InvalidDegree { degree });
        }
        if degree == 2 {
            return Ok(self.tangent_plane_terms(point));
        }

        let names = point.names();
        let values = point.values();
        let dx = self.delta(point.x_name(), point.x0());
        let dy = self.delta(point.y_name(), point.y0());

        let mut terms = vec![Expr::Const(
            self.function().eval_expression(&names, &values),
        )];
        for k in 1..=degree {
            for j in 0..=k {
                let x_order = k - j;
                let derivative = self
                    .engine
                    .partial(&[(point.x_name(), x_order), (point.y_name(), j)]);
                let value = derivative.eval_expression(&names, &values);
                let coeff = value / (factorial(x_order) * factorial(j));
                let term = Expr::Const(coeff)
                    * dx.clone().pow(Expr::Const(x_order as f64))
                    * dy.clone().pow(Expr::Const(j as f64));
                terms.push(term);
            }
        }
        Ok(terms)
    }

    fn tangent_plane_terms(&self, point: &ExpansionPoint) -> Vec<Expr> {
        let names = point.names();
        let values = point.values();
        let gradient = self.engine.gradient(&names);
        let f_at_point = self.function().eval_expression(&names, &values);
        let fx_at_point = gradient[0].eval_expression(&names, &values);
        let fy_at_point = gradient[1].eval_expression(&names, &values);
        vec![
            Expr::Const(f_at_point),
            Expr::Const(fx_at_point) * self.delta(point.x_name(), point.x0()),
            Expr::Const(fy_at_point) * self.delta(point.y_name(), point.y0()),
        ]
    }

    /// `(var - coordinate)`, the displacement the polynomial is written in.
    fn delta(&self, var: &str, coordinate: f64) -> Expr {
        Expr::Var(var.to_string()) - Expr::Const(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn origin() -> ExpansionPoint {
        ExpansionPoint::new(&[("x", 0.0), ("y", 0.0)]).unwrap()
    }

    #[test]
    fn test_point_arity_is_enforced() {
        assert_eq!(
            ExpansionPoint::new(&[("x", 0.0)]),
            Err(TaylorError::InvalidPointArity { found: 1 })
        );
        assert_eq!(
            ExpansionPoint::new(&[("x", 0.0), ("y", 0.0), ("z", 0.0)]),
            Err(TaylorError::InvalidPointArity { found: 3 })
        );
    }

    #[test]
    fn test_point_order_defines_axes() {
        let point = ExpansionPoint::new(&[("u", 1.0), ("v", 2.0)]).unwrap();
        assert_eq!(point.x_name(), "u");
        assert_eq!(point.y_name(), "v");
        assert_eq!(point.values(), [1.0, 2.0]);
    }

    #[test]
    fn test_degree_below_two_is_rejected() {
        let expander = TaylorExpander::from_str("x^2 + y^2").unwrap();
        assert_eq!(
            expander.expand(&origin(), 1),
            Err(TaylorError::InvalidDegree { degree: 1 })
        );
        assert_eq!(
            expander.expand(&origin(), 0),
            Err(TaylorError::InvalidDegree { degree: 0 })
        );
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        match TaylorExpander::from_str("sin(x") {
            Err(TaylorError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_degree_two_is_the_tangent_plane() {
        let expander = TaylorExpander::from_str("x^2 + y^2").unwrap();
        let point = ExpansionPoint::new(&[("x", 1.0), ("y", 1.0)]).unwrap();
        let plane = expander.expand(&point, 2).unwrap();
        assert_eq!(plane, expander.tangent_plane(&point));
        // T(x, y) = 2 + 2(x - 1) + 2(y - 1)
        let f = plane.lambdify2D("x", "y");
        assert_relative_eq!(f(1.0, 1.0), 2.0, max_relative = 1e-12);
        assert_relative_eq!(f(1.5, 1.0), 3.0, max_relative = 1e-12);
        assert_relative_eq!(f(1.0, 0.5), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_saddle_tangent_plane_at_origin_vanishes() {
        let expander = TaylorExpander::from_str("x*y").unwrap();
        let taylor = expander.expand(&origin(), 2).unwrap();
        assert_eq!(taylor, Expr::Const(0.0));
    }

    #[test]
    fn test_saddle_third_degree_recovers_xy() {
        let expander = TaylorExpander::from_str("x*y").unwrap();
        let taylor = expander.expand(&origin(), 3).unwrap();
        assert_eq!(
            taylor,
            Expr::Mul(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Var("y".to_string()))
            )
        );
    }

    #[test]
    fn test_paraboloid_is_reproduced_exactly() {
        let expander = TaylorExpander::from_str("x^2 + y^2").unwrap();
        let taylor = expander.expand(&origin(), 3).unwrap();
        assert_eq!(
            taylor,
            Expr::Add(
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0))
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("y".to_string())),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_exp_of_product_third_degree() {
        let expander = TaylorExpander::from_str("exp(x*y)").unwrap();
        let taylor = expander.expand(&origin(), 3).unwrap();
        // all third partials of e^(xy) vanish at the origin, so T = 1 + xy
        assert_eq!(
            taylor,
            Expr::Add(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                ))
            )
        );
    }

    #[test]
    fn test_value_at_expansion_point_is_exact() {
        let expander = TaylorExpander::from_str("sin(x)*sin(y)").unwrap();
        let point = ExpansionPoint::new(&[("x", 0.1), ("y", 0.1)]).unwrap();
        let taylor = expander.expand(&point, 5).unwrap();
        let t = taylor.lambdify2D("x", "y");
        let expected = 0.1f64.sin() * 0.1f64.sin();
        assert_relative_eq!(t(0.1, 0.1), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_local_accuracy_near_the_point() {
        let expander = TaylorExpander::from_str("exp(x*y)").unwrap();
        let taylor = expander.expand(&origin(), 4).unwrap();
        let t = taylor.lambdify2D("x", "y");
        let f = expander.function().lambdify2D("x", "y");
        let (x, y) = (0.05, 0.05);
        assert!((t(x, y) - f(x, y)).abs() < 1e-6);
    }

    #[test]
    fn test_higher_degree_does_not_lose_accuracy() {
        // the paraboloid is its own Taylor polynomial from degree 3 on, while
        // the degree-2 tangent plane at the origin degenerates to 0
        let expander = TaylorExpander::from_str("x^2 + y^2").unwrap();
        let f = expander.function().lambdify2D("x", "y");
        let plane = expander.expand(&origin(), 2).unwrap().lambdify2D("x", "y");
        let cubic = expander.expand(&origin(), 3).unwrap().lambdify2D("x", "y");
        let (x, y) = (0.4, -0.3);
        let err_plane = (plane(x, y) - f(x, y)).abs();
        let err_cubic = (cubic(x, y) - f(x, y)).abs();
        assert!(err_cubic <= err_plane);
        assert_relative_eq!(err_cubic, 0.0);
    }

    #[test]
    fn test_expansion_terms_count_and_order() {
        let expander = TaylorExpander::from_str("sin(x)*sin(y)").unwrap();
        // degree 3: constant + (2 + 3 + 4) derivative terms
        let terms = expander.expansion_terms(&origin(), 3).unwrap();
        assert_eq!(terms.len(), 10);
        // degree 2 is the tangent plane: exactly three terms
        let plane_terms = expander.expansion_terms(&origin(), 2).unwrap();
        assert_eq!(plane_terms.len(), 3);
        // the first general term is the function value at the point
        assert_eq!(terms[0], Expr::Const(0.0));
    }

    #[test]
    fn test_tangent_plane_with_fractional_powers() {
        // the per-step derivative simplification must not fold the two
        // sqrt terms into a constant; the plane of 2*sqrt(x) + y at (4, 0)
        // is 4 + 0.5*(x - 4) + y
        let expander = TaylorExpander::from_str("sqrt(x) + sqrt(x) + y").unwrap();
        let point = ExpansionPoint::new(&[("x", 4.0), ("y", 0.0)]).unwrap();
        let plane = expander.expand(&point, 2).unwrap();
        let t = plane.lambdify2D("x", "y");
        assert_relative_eq!(t(4.0, 0.0), 4.0, max_relative = 1e-12);
        assert_relative_eq!(t(5.0, 0.0), 4.5, max_relative = 1e-12);
        assert_relative_eq!(t(4.0, 1.0), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_expand_is_deterministic() {
        let expander = TaylorExpander::from_str("sin(x)*sin(y)").unwrap();
        let point = ExpansionPoint::new(&[("x", 0.1), ("y", 0.1)]).unwrap();
        let first = expander.expand(&point, 4).unwrap();
        let second = expander.expand(&point, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nonstandard_variable_names() {
        let expander = TaylorExpander::from_str("u^2 + v^2").unwrap();
        let point = ExpansionPoint::new(&[("u", 0.0), ("v", 0.0)]).unwrap();
        let taylor = expander.expand(&point, 3).unwrap();
        let t = taylor.lambdify2D("u", "v");
        assert_relative_eq!(t(0.3, 0.4), 0.25, max_relative = 1e-12);
    }
}
