//! String → symbolic expression parser.
//!
//! The parser works by recursive splitting: find the rightmost +/- at bracket
//! depth zero and split there (keeping left-associativity), then the rightmost
//! * or /, then the leftmost ^ (right-associative), then function prefixes
//! like `sin(...)`, then leaves (constants, `pi`, `e`, variables), and finally
//! a fully bracketed group which is stripped and re-parsed.
//!
//! ```text
//!                  search recursion diagram
//!                "y^2+exp(x)+ln(x)/y-x^2.3"        |
//!                |       left  | right             |
//!                |_________________________________|
//!                |           split by last -       |
//!                |_________________________________|
//!                | y^2+exp(x)+ln(x)/y  |  x^2.3    |
//!                |       |             |     |     |
//!                |______\|/____________|____\|/____|
//!                |   split by last +   | split by ^|
//!                  etc...
//! ```

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    find_char_position_outside_brackets, find_pair_to_this_bracket,
    find_rightmost_operator_outside_brackets, is_fully_bracketed,
};
use log::trace;
use std::f64::consts::{E, PI};

/// unary function prefixes recognized by the parser; sqrt is desugared to ^0.5
const FUNCTIONS: [&str; 10] = [
    "exp", "ln", "log", "sqrt", "sin", "cos", "tg", "tan", "ctg", "cot",
];

fn apply_function(name: &str, inner: Expr) -> Expr {
    match name {
        "exp" => Expr::Exp(inner.boxed()),
        "ln" | "log" => Expr::Ln(inner.boxed()),
        "sqrt" => inner.pow(Expr::Const(0.5)),
        "sin" => Expr::sin(inner.boxed()),
        "cos" => Expr::cos(inner.boxed()),
        "tg" | "tan" => Expr::tg(inner.boxed()),
        "ctg" | "cot" => Expr::ctg(inner.boxed()),
        _ => unreachable!("unknown function prefix"),
    }
}

pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Invalid expression format: empty (sub)expression".to_string());
    }
    trace!("parsing: {}", input);

    // addition and subtraction, split at the rightmost occurrence
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        trace!("SIGN '{}' at position {}: left: {}, right: {}", op, pos, left, right);

        // unary minus / redundant unary plus
        if left.is_empty() {
            return if op == '-' {
                Ok(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(parse_expression_func(right)?),
                ))
            } else {
                parse_expression_func(right)
            };
        }

        let lhs = parse_expression_func(left)?;
        let rhs = parse_expression_func(right)?;
        return Ok(match op {
            '+' => Expr::Add(Box::new(lhs), Box::new(rhs)),
            '-' => Expr::Sub(Box::new(lhs), Box::new(rhs)),
            _ => unreachable!(),
        });
    }

    // multiplication and division, same precedence level
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        trace!("SIGN '{}' at position {}: left: {}, right: {}", op, pos, left, right);
        if left.is_empty() || right.is_empty() {
            return Err(format!("Invalid expression format: dangling '{}' in {}", op, input));
        }
        let lhs = parse_expression_func(left)?;
        let rhs = parse_expression_func(right)?;
        return Ok(match op {
            '*' => Expr::Mul(Box::new(lhs), Box::new(rhs)),
            '/' => Expr::Div(Box::new(lhs), Box::new(rhs)),
            _ => unreachable!(),
        });
    }

    // exponentiation, split at the leftmost ^ so that chains stay right-associative
    if let Some(pos) = find_char_position_outside_brackets(input, '^') {
        let base = input[..pos].trim();
        let exponent = input[pos + 1..].trim();
        trace!("SIGN '^' at position {}: base: {}, exponent: {}", pos, base, exponent);
        if base.is_empty() || exponent.is_empty() {
            return Err(format!("Invalid expression format: dangling '^' in {}", input));
        }
        let base_expr = parse_expression_func(base)?;
        let exponent_expr = if let Ok(value) = exponent.parse::<f64>() {
            Expr::Const(value)
        } else {
            parse_expression_func(exponent)?
        };
        return Ok(Expr::Pow(Box::new(base_expr), Box::new(exponent_expr)));
    }

    // function application, e.g. sin(...), with the bracket closing at the very end
    for name in FUNCTIONS {
        if let Some(rest) = input.strip_prefix(name) {
            if rest.starts_with('(')
                && find_pair_to_this_bracket(input, name.len()) == Some(input.len() - 1)
            {
                let inner = &input[name.len() + 1..input.len() - 1];
                return Ok(apply_function(name, parse_expression_func(inner)?));
            }
        }
    }

    // leaves: numbers, known constants, variables
    if let Ok(value) = input.parse::<f64>() {
        trace!("found constant: {}", value);
        return Ok(Expr::Const(value));
    }
    match input {
        "pi" | "PI" => return Ok(Expr::Const(PI)),
        "e" | "E" => return Ok(Expr::Const(E)),
        _ => {}
    }
    if !input.is_empty() && input.chars().all(|c| c.is_alphanumeric() || c == '_') {
        trace!("found variable: {}", input);
        return Ok(Expr::Var(input.to_string()));
    }

    // expression that is ALL in brackets
    if is_fully_bracketed(input) {
        return parse_expression_func(&input[1..input.len() - 1]);
    }

    Err(format!("Invalid expression format: {}", input))
}

impl Expr {
    /// Parses a mathematical expression from string representation.
    ///
    /// # Supported Syntax
    /// - Variables: x, y, var_name
    /// - Constants: 3.14, -2.5, pi, e
    /// - Operators: +, -, *, /, ^
    /// - Functions: sin, cos, tg/tan, ctg/cot, exp, ln/log, sqrt
    /// - Parentheses for grouping
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + sin(y)").unwrap();
    /// ```
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }
}
