//! # Symbolic Lambdify Module
//!
//! Turns a symbolic expression into a regular Rust closure. The expression
//! tree is compiled once into a tree of nested boxed closures, so repeated
//! evaluation (surface grids, error scans) pays no tree-walking cost for
//! variable lookups beyond the initial compilation.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// LAMBDIFICATION

    /// Converts the expression into an executable closure over a slice of
    /// variable values.
    ///
    /// # Arguments
    /// * `vars` - Variable names; values passed to the closure must follow
    ///   this order
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + y").unwrap();
    /// let f = expr.lambdify(&["x", "y"]);
    /// assert_eq!(f(&[2.0, 1.0]), 5.0);
    /// ```
    ///
    /// Variables absent from `vars` evaluate to NaN, mirroring eval_expression.
    pub fn lambdify(&self, vars: &[&str]) -> Box<dyn Fn(&[f64]) -> f64 + Send + Sync> {
        match self {
            Expr::Var(name) => {
                let index = vars.iter().position(|&x| x == name);
                match index {
                    Some(i) => Box::new(move |values| values[i]),
                    None => Box::new(|_| f64::NAN),
                }
            }
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify(vars);
                let rhs_fn = rhs.lambdify(vars);
                Box::new(move |values| lhs_fn(values) + rhs_fn(values))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify(vars);
                let rhs_fn = rhs.lambdify(vars);
                Box::new(move |values| lhs_fn(values) - rhs_fn(values))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify(vars);
                let rhs_fn = rhs.lambdify(vars);
                Box::new(move |values| lhs_fn(values) * rhs_fn(values))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify(vars);
                let rhs_fn = rhs.lambdify(vars);
                Box::new(move |values| lhs_fn(values) / rhs_fn(values))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify(vars);
                let exp_fn = exp.lambdify(vars);
                Box::new(move |values| base_fn(values).powf(exp_fn(values)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| expr_fn(values).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| expr_fn(values).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| expr_fn(values).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| expr_fn(values).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| expr_fn(values).tan())
            }
            Expr::ctg(expr) => {
                let expr_fn = expr.lambdify(vars);
                Box::new(move |values| 1.0 / expr_fn(values).tan())
            }
        }
    } // end of lambdify

    /// Converts an expression of two named variables into a closure `f(x, y)`.
    ///
    /// Convenience wrapper around `lambdify` for the surface-plotting and
    /// Taylor-comparison paths, where functions of exactly two variables are
    /// the norm.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("sin(x)*sin(y)").unwrap();
    /// let f = expr.lambdify2D("x", "y");
    /// let value = f(0.1, 0.1);
    /// ```
    pub fn lambdify2D(&self, x: &str, y: &str) -> Box<dyn Fn(f64, f64) -> f64 + Send + Sync> {
        let f = self.lambdify(&[x, y]);
        Box::new(move |x_val, y_val| f(&[x_val, y_val]))
    }
}
