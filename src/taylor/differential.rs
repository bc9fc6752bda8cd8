//! # Differential Engine Module
//!
//! Thin layer over the symbolic `diff` that produces the derivative
//! expressions the Taylor expander consumes: gradients and higher mixed
//! partials. Each differentiation step is followed by a simplification pass,
//! which keeps the intermediate trees from blowing up on repeated
//! differentiation of products (Himmelblau-style polynomials grow fast
//! otherwise).

use crate::symbolic::symbolic_engine::Expr;
use log::debug;

/// Holds a function of several variables and hands out its derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEngine {
    expr: Expr,
}

impl DifferentialEngine {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// The function being differentiated.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Gradient of the function: one partial derivative per requested
    /// variable, in the order given.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let engine = DifferentialEngine::new(Expr::parse_expression("x^2 + y^2").unwrap());
    /// let grad = engine.gradient(&["x", "y"]); // [2x, 2y] up to simplification
    /// ```
    pub fn gradient(&self, vars: &[&str]) -> Vec<Expr> {
        vars.iter()
            .map(|var| self.expr.diff(var).simplify())
            .collect()
    }

    /// Mixed partial derivative of the given orders.
    ///
    /// `partial(&[("x", 2), ("y", 1)])` returns ∂³f/∂x²∂y. Differentiation
    /// order does not matter for the smooth closed-form functions the engine
    /// handles, so orders are applied in the sequence given. Simplification
    /// runs after every single differentiation step.
    pub fn partial(&self, orders: &[(&str, usize)]) -> Expr {
        let mut derivative = self.expr.clone();
        for (var, order) in orders {
            for _ in 0..*order {
                derivative = derivative.diff(var).simplify();
            }
        }
        debug!("partial {:?}: {}", orders, derivative);
        derivative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_of_paraboloid() {
        let engine = DifferentialEngine::new(Expr::parse_expression("x^2 + y^2").unwrap());
        let grad = engine.gradient(&["x", "y"]);
        assert_eq!(grad.len(), 2);
        // 2x and 2y, checked numerically to stay independent of tree shape
        assert!((grad[0].eval_expression(&["x", "y"], &[3.0, 5.0]) - 6.0).abs() < 1e-12);
        assert!((grad[1].eval_expression(&["x", "y"], &[3.0, 5.0]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_respects_variable_order() {
        let engine = DifferentialEngine::new(Expr::parse_expression("x*exp(y)").unwrap());
        let grad = engine.gradient(&["y", "x"]);
        // first entry is d/dy = x*exp(y)
        assert!(
            (grad[0].eval_expression(&["x", "y"], &[2.0, 0.0]) - 2.0).abs() < 1e-12
        );
        // second entry is d/dx = exp(y)
        assert!(
            (grad[1].eval_expression(&["x", "y"], &[2.0, 0.0]) - 1.0).abs() < 1e-12
        );
    }

    #[test]
    fn test_partial_mixed_second_order() {
        let engine = DifferentialEngine::new(Expr::parse_expression("x^2*y^3").unwrap());
        // fxx = 2y^3, fxxy = 6y^2
        let fxxy = engine.partial(&[("x", 2), ("y", 1)]);
        assert!((fxxy.eval_expression(&["x", "y"], &[7.0, 2.0]) - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_order_of_application_commutes() {
        let engine = DifferentialEngine::new(Expr::parse_expression("sin(x)*sin(y)").unwrap());
        let a = engine.partial(&[("x", 1), ("y", 1)]);
        let b = engine.partial(&[("y", 1), ("x", 1)]);
        let point = [0.4, 0.9];
        assert!(
            (a.eval_expression(&["x", "y"], &point) - b.eval_expression(&["x", "y"], &point))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_partial_of_order_zero_is_identity() {
        let expr = Expr::parse_expression("exp(x*y)").unwrap();
        let engine = DifferentialEngine::new(expr.clone());
        assert_eq!(engine.partial(&[("x", 0), ("y", 0)]), expr);
    }

    #[test]
    fn test_high_order_partial_stays_compact() {
        // repeated diff+simplify must fold vanishing branches away
        let engine = DifferentialEngine::new(Expr::parse_expression("x^2 + y^2").unwrap());
        let fxxx = engine.partial(&[("x", 3)]);
        assert_eq!(fxxx, Expr::Const(0.0));
    }
}
