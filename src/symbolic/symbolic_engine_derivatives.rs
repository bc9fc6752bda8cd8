//! # Symbolic Engine Derivatives Module
//!
//! Extends the symbolic engine with analytical differentiation, direct
//! evaluation and variable extraction. Differentiation is purely structural:
//! `diff` produces a new expression tree built by the textbook rules, with no
//! simplification of its own (callers simplify when they need compact output).
//!
//! ## Key Methods
//! - `diff(var: &str)` - analytical partial derivative
//! - `sym_to_str()` - expression to human-readable string
//! - `all_arguments_are_variables()` - extract sorted unique variable names
//! - `eval_expression()` - evaluate the tree directly without closure creation

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements the standard differentiation rules:
    /// - Power rule: g*f^(g-1)*f' when the exponent is free of `var`,
    ///   f^g*(g'*ln(f) + g*f'/f) otherwise
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - g'*f)/g^2
    /// - Chain rule for all supported functions
    ///
    /// For functions of several variables this is the partial derivative: every
    /// other variable is treated as a constant.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x^1*1 before simplification
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // logarithmic differentiation: d(f^g) = f^g*(g'*ln(f) + g*f'/f)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                } else {
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
        }
    } // end of diff

    /// Converts symbolic expression to human-readable string representation
    /// with parentheses making the precedence explicit.
    pub fn sym_to_str(&self) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({}) + ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Sub(lhs, rhs) => format!("({}) - ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Mul(lhs, rhs) => format!("({}) * ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Div(lhs, rhs) => format!("({}) / ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Pow(base, exp) => format!("({}^{})", base.sym_to_str(), exp.sym_to_str()),
            Expr::Exp(expr) => format!("exp({})", expr.sym_to_str()),
            Expr::Ln(expr) => format!("ln({})", expr.sym_to_str()),
            Expr::sin(expr) => format!("sin({})", expr.sym_to_str()),
            Expr::cos(expr) => format!("cos({})", expr.sym_to_str()),
            Expr::tg(expr) => format!("tg({})", expr.sym_to_str()),
            Expr::ctg(expr) => format!("ctg({})", expr.sym_to_str()),
        } // end of match
    } // end of sym_to_str

    /// Extracts all unique variable names from the symbolic expression.
    ///
    /// Returns a sorted, deduplicated list of variable names.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("y^2 + x*y + x").unwrap();
    /// assert_eq!(expr.all_arguments_are_variables(), vec!["x", "y"]);
    /// ```
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();

        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
        }

        vars.sort();
        vars.dedup();
        vars
    } // end of all_arguments_are_variables

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression directly without creating a closure.
    ///
    /// More memory-efficient than lambdification for single-use evaluation,
    /// e.g. computing one Taylor coefficient at the expansion point.
    ///
    /// # Arguments
    /// * `vars` - Variable names in order matching the values slice
    /// * `values` - Numerical values for each variable
    ///
    /// Variables missing from `vars` evaluate to NaN instead of panicking.
    pub fn eval_expression(&self, vars: &[&str], values: &[f64]) -> f64 {
        match self {
            Expr::Var(name) => match vars.iter().position(|&x| x == name) {
                Some(index) => values[index],
                None => f64::NAN,
            },
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => {
                lhs.eval_expression(vars, values) + rhs.eval_expression(vars, values)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.eval_expression(vars, values) - rhs.eval_expression(vars, values)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.eval_expression(vars, values) * rhs.eval_expression(vars, values)
            }
            Expr::Div(lhs, rhs) => {
                lhs.eval_expression(vars, values) / rhs.eval_expression(vars, values)
            }
            Expr::Pow(base, exp) => {
                let base_val = base.eval_expression(vars, values);
                let exp_val = exp.eval_expression(vars, values);
                base_val.powf(exp_val)
            }
            Expr::Exp(expr) => expr.eval_expression(vars, values).exp(),
            Expr::Ln(expr) => expr.eval_expression(vars, values).ln(),
            Expr::sin(expr) => expr.eval_expression(vars, values).sin(),
            Expr::cos(expr) => expr.eval_expression(vars, values).cos(),
            Expr::tg(expr) => expr.eval_expression(vars, values).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_expression(vars, values).tan(),
        }
    } // end of eval_expression
}
