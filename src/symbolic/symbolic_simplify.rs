//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification for symbolic expressions: constant folding,
//! algebraic identities (x + 0 = x, x * 1 = x, x^0 = 1, ...) and polynomial
//! like-term collection (3x + 2x = 5x). Taylor polynomials produced by the
//! expander lean heavily on all three: numeric coefficients fold into
//! constants, vanishing derivative terms disappear through the zero rules,
//! and repeated monomials from different expansion orders are merged.
//!
//! Non-polynomial terms (sin, exp of a variable argument and so on) are kept
//! symbolic; like-term collection backs off rather than produce a wrong
//! answer.

use crate::symbolic::symbolic_engine::Expr;
use std::collections::{BTreeMap, HashMap};

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Simplifies expressions by evaluating constant arithmetic operations only.
    ///
    /// Pure constant folding: `Const(2) + Const(3)` becomes `Const(5)` while
    /// mixed constant-variable operations are left unchanged. For full
    /// simplification with algebraic identities use `simplify()`.
    pub fn simplify_numbers(&self) -> Expr {
        match self {
            Expr::Var(_) => self.clone(),
            Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs_simplified = lhs.simplify_numbers();
                let rhs_simplified = rhs.simplify_numbers();
                match (lhs_simplified, rhs_simplified) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (lhs, rhs) => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_simplified = lhs.simplify_numbers();
                let rhs_simplified = rhs.simplify_numbers();
                match (lhs_simplified, rhs_simplified) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (lhs, rhs) => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_simplified = lhs.simplify_numbers();
                let rhs_simplified = rhs.simplify_numbers();
                match (lhs_simplified, rhs_simplified) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (lhs, rhs) => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs_simplified = lhs.simplify_numbers();
                let rhs_simplified = rhs.simplify_numbers();
                match (lhs_simplified, rhs_simplified) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a / b),
                    (lhs, rhs) => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.simplify_numbers()),
                Box::new(exp.simplify_numbers()),
            ),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.simplify_numbers())),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.simplify_numbers())),
            Expr::sin(expr) => Expr::sin(Box::new(expr.simplify_numbers())),
            Expr::cos(expr) => Expr::cos(Box::new(expr.simplify_numbers())),
            Expr::tg(expr) => Expr::tg(Box::new(expr.simplify_numbers())),
            Expr::ctg(expr) => Expr::ctg(Box::new(expr.simplify_numbers())),
        }
    }

    /// Core simplification engine.
    ///
    /// Applies, bottom-up:
    /// - constant folding for +, -, *, /, ^
    /// - additive identities: x + 0 = x, x - 0 = x, x - x = 0
    /// - multiplicative identities: x * 1 = x, x * 0 = 0, x / 1 = x, x / x = 1
    /// - power rules: x^0 = 1, x^1 = x, 0^x = 0, 1^x = 1,
    ///   x^a * x^b = x^(a+b), x^a / x^b = x^(a-b), (x^a)^b = x^(a*b)
    /// - special values: exp(0) = 1, ln(1) = 0, sin(0) = 0, cos(0) = 1, tg(0) = 0
    /// - constant collection in nested products: (2 * x) * 3 = 6 * x
    /// - like-term collection for sums via `simplify_polynomial`
    pub fn simplify_(&self) -> Expr {
        match self {
            Expr::Var(_) => self.clone(),
            Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b), // (a) + (b) = (a + b)
                    (Expr::Const(0.0), _) => rhs,                           // 0 + x = x
                    (_, Expr::Const(0.0)) => lhs,                           // x + 0 = x
                    _ => {
                        let expr = Expr::Add(Box::new(lhs), Box::new(rhs));
                        Self::simplify_polynomial(&expr).unwrap_or(expr)
                    }
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b), // (a) - (b) = (a - b)
                    (_, Expr::Const(0.0)) => lhs,                           // x - 0 = x
                    _ if lhs == rhs => Expr::Const(0.0),                    // x - x = 0
                    _ => {
                        // a - b = a + (-1)*b so that like-term collection sees it
                        let neg_rhs =
                            Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(rhs)).simplify_();
                        let add_expr = Expr::Add(Box::new(lhs), Box::new(neg_rhs));
                        Self::simplify_polynomial(&add_expr).unwrap_or(add_expr)
                    }
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b), // (a) * (b) = (a * b)
                    (Expr::Const(0.0), _) | (_, Expr::Const(0.0)) => Expr::Const(0.0), // 0 * x = 0
                    (Expr::Const(1.0), _) => rhs, // 1 * x = x
                    (_, Expr::Const(1.0)) => lhs, // x * 1 = x
                    // Power rules: x^a * x^b = x^(a+b)
                    (Expr::Pow(base1, exp1), Expr::Pow(base2, exp2)) if base1 == base2 => {
                        let new_exp = Expr::Add(exp1.clone(), exp2.clone()).simplify_();
                        Expr::Pow(base1.clone(), Box::new(new_exp))
                    }
                    (Expr::Var(v1), Expr::Pow(base, exp)) | (Expr::Pow(base, exp), Expr::Var(v1)) => {
                        if let Expr::Var(v2) = base.as_ref() {
                            if v1 == v2 {
                                let new_exp =
                                    Expr::Add(Box::new(Expr::Const(1.0)), exp.clone()).simplify_();
                                return Expr::Pow(
                                    Box::new(Expr::Var(v1.clone())),
                                    Box::new(new_exp),
                                );
                            }
                        }
                        Expr::Mul(Box::new(lhs), Box::new(rhs))
                    }
                    (Expr::Var(v1), Expr::Var(v2)) if v1 == v2 => {
                        Expr::Pow(Box::new(Expr::Var(v1.clone())), Box::new(Expr::Const(2.0)))
                    }
                    // Nested multiplications with constants: (c1 * expr) * c2 = (c1 * c2) * expr
                    (Expr::Mul(inner_lhs, inner_rhs), Expr::Const(c)) => {
                        match (inner_lhs.as_ref(), inner_rhs.as_ref()) {
                            (Expr::Const(c1), _) => {
                                Expr::Mul(Box::new(Expr::Const(c1 * c)), inner_rhs.clone())
                                    .simplify_()
                            }
                            (_, Expr::Const(c1)) => {
                                Expr::Mul(Box::new(Expr::Const(c1 * c)), inner_lhs.clone())
                                    .simplify_()
                            }
                            _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                        }
                    }
                    // Symmetric case: c2 * (c1 * expr) = (c1 * c2) * expr
                    (Expr::Const(c), Expr::Mul(inner_lhs, inner_rhs)) => {
                        match (inner_lhs.as_ref(), inner_rhs.as_ref()) {
                            (Expr::Const(c1), _) => {
                                Expr::Mul(Box::new(Expr::Const(c * c1)), inner_rhs.clone())
                                    .simplify_()
                            }
                            (_, Expr::Const(c1)) => {
                                Expr::Mul(Box::new(Expr::Const(c * c1)), inner_lhs.clone())
                                    .simplify_()
                            }
                            _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                        }
                    }
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(0.0), _) => Expr::Const(0.0), // 0 / x = 0
                    (_, Expr::Const(1.0)) => lhs,              // x / 1 = x
                    // Power rules: x^a / x^b = x^(a-b)
                    (Expr::Pow(base1, exp1), Expr::Pow(base2, exp2)) if base1 == base2 => {
                        let new_exp = Expr::Sub(exp1.clone(), exp2.clone()).simplify_();
                        match new_exp {
                            Expr::Const(0.0) => Expr::Const(1.0),
                            _ => Expr::Pow(base1.clone(), Box::new(new_exp)),
                        }
                    }
                    (Expr::Var(v1), Expr::Pow(base, exp)) => {
                        if let Expr::Var(v2) = base.as_ref() {
                            if v1 == v2 {
                                let new_exp =
                                    Expr::Sub(Box::new(Expr::Const(1.0)), exp.clone()).simplify_();
                                match new_exp {
                                    Expr::Const(0.0) => return Expr::Const(1.0),
                                    _ => {
                                        return Expr::Pow(
                                            Box::new(Expr::Var(v1.clone())),
                                            Box::new(new_exp),
                                        );
                                    }
                                }
                            }
                        }
                        Expr::Div(Box::new(lhs), Box::new(rhs))
                    }
                    (Expr::Pow(base, exp), Expr::Var(v2)) => {
                        if let Expr::Var(v1) = base.as_ref() {
                            if v1 == v2 {
                                let new_exp =
                                    Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0))).simplify_();
                                match new_exp {
                                    Expr::Const(0.0) => return Expr::Const(1.0),
                                    _ => {
                                        return Expr::Pow(
                                            Box::new(Expr::Var(v1.clone())),
                                            Box::new(new_exp),
                                        );
                                    }
                                }
                            }
                        }
                        Expr::Div(Box::new(lhs), Box::new(rhs))
                    }
                    (Expr::Var(v1), Expr::Var(v2)) if v1 == v2 => Expr::Const(1.0),
                    // (c1 * expr) / c2 = (c1/c2) * expr
                    (Expr::Mul(inner_lhs, inner_rhs), Expr::Const(c)) if *c != 0.0 => {
                        match (inner_lhs.as_ref(), inner_rhs.as_ref()) {
                            (Expr::Const(c1), _) => {
                                Expr::Mul(Box::new(Expr::Const(c1 / c)), inner_rhs.clone())
                                    .simplify_()
                            }
                            (_, Expr::Const(c1)) => {
                                Expr::Mul(Box::new(Expr::Const(c1 / c)), inner_lhs.clone())
                                    .simplify_()
                            }
                            _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                        }
                    }
                    // expr / (c1 * c2) = expr / (c1*c2)
                    (_, Expr::Mul(inner_lhs, inner_rhs)) => {
                        match (inner_lhs.as_ref(), inner_rhs.as_ref()) {
                            (Expr::Const(c1), Expr::Const(c2)) => {
                                Expr::Div(Box::new(lhs), Box::new(Expr::Const(c1 * c2))).simplify_()
                            }
                            _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                        }
                    }
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_();
                let exp = exp.simplify_();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    (_, Expr::Const(0.0)) => Expr::Const(1.0), // x ^ 0 = 1
                    (_, Expr::Const(1.0)) => base,             // x ^ 1 = x
                    (Expr::Const(0.0), _) => Expr::Const(0.0), // 0 ^ x = 0
                    (Expr::Const(1.0), _) => Expr::Const(1.0), // 1 ^ x = 1
                    // (x^a)^b = x^(a*b)
                    (Expr::Pow(inner_base, inner_exp), _) => {
                        let new_exp = Expr::Mul(inner_exp.clone(), Box::new(exp)).simplify_();
                        Expr::Pow(inner_base.clone(), Box::new(new_exp))
                    }
                    _ => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }
            Expr::Exp(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(0.0) => Expr::Const(1.0),
                    // Only evaluate exp(0), preserve symbolic form otherwise
                    _ => Expr::Exp(Box::new(expr)),
                }
            }
            Expr::Ln(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(1.0) => Expr::Const(0.0),
                    _ => Expr::Ln(Box::new(expr)),
                }
            } // ln
            Expr::sin(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(0.0) => Expr::Const(0.0),
                    _ => Expr::sin(Box::new(expr)),
                }
            } //sin
            Expr::cos(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(0.0) => Expr::Const(1.0),
                    _ => Expr::cos(Box::new(expr)),
                }
            } //cos
            Expr::tg(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(0.0) => Expr::Const(0.0),
                    _ => Expr::tg(Box::new(expr)),
                }
            } //tg
            Expr::ctg(expr) => {
                // no special values worth folding for cotangent
                Expr::ctg(Box::new(expr.simplify_()))
            } //ctg
        }
    }

    /// Simplify sums by collecting like polynomial terms.
    ///
    /// Flattens nested Add/Sub into a term list, extracts (monomial,
    /// coefficient) pairs, groups by monomial and sums coefficients. Returns
    /// `None` when any term is non-polynomial or when grouping would not
    /// reduce the term count, so callers can keep the original expression.
    ///
    /// `3x + 2x` becomes `5x`; `sin(x) + cos(x)` is left alone.
    fn simplify_polynomial(expr: &Expr) -> Option<Expr> {
        let mut terms = Vec::new();
        flatten_add(expr, &mut terms);
        if terms.len() < 2 {
            return None;
        }

        // back off if any term is not coefficient * monomial
        for term in &terms {
            let (_, coeff) = extract_monomial(term);
            if coeff == 0.0 && !matches!(term, Expr::Const(0.0)) {
                return None;
            }
        }

        let poly_map = collect_add_terms(&terms);
        if poly_map.len() == terms.len() {
            return None;
        }

        let mut result_terms = Vec::new();
        for (monomial, coeff) in poly_map {
            if coeff == 0.0 {
                continue;
            }
            result_terms.push(Self::build_monomial_term(&monomial, coeff));
        }

        if result_terms.is_empty() {
            Some(Expr::Const(0.0))
        } else {
            result_terms
                .into_iter()
                .reduce(|a, b| Expr::Add(Box::new(a), Box::new(b)))
        }
    }

    /// Build `coeff * monomial` back into an expression.
    ///
    /// Unit coefficients are omitted, exponent 1 is not wrapped in `Pow`,
    /// an empty monomial yields just the coefficient.
    fn build_monomial_term(monomial: &MonomialKey, coeff: f64) -> Expr {
        if monomial.0.is_empty() {
            return Expr::Const(coeff);
        }

        let mut factors = Vec::new();
        if coeff != 1.0 {
            factors.push(Expr::Const(coeff));
        }

        for (var, exp) in &monomial.0 {
            let var_expr = Expr::Var(var.clone());
            if *exp == 1 {
                factors.push(var_expr);
            } else {
                factors.push(Expr::Pow(
                    Box::new(var_expr),
                    Box::new(Expr::Const(*exp as f64)),
                ));
            }
        }

        if factors.is_empty() {
            Expr::Const(1.0)
        } else if factors.len() == 1 {
            factors.into_iter().next().unwrap_or(Expr::Const(1.0))
        } else {
            factors
                .into_iter()
                .reduce(|a, b| Expr::Mul(Box::new(a), Box::new(b)))
                .unwrap_or(Expr::Const(1.0))
        }
    }

    /// Public interface for expression simplification.
    pub fn simplify(&self) -> Expr {
        self.simplify_()
    }
}

/// Variable part of a polynomial term: maps variable names to exponents.
///
/// `3*x^2*y` has monomial key `{"x": 2, "y": 1}` and coefficient 3. BTreeMap
/// keeps the representation canonical, so `x*y` and `y*x` share one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonomialKey(pub BTreeMap<String, i32>);

/// Flatten nested Add/Sub expressions into a list of terms.
///
/// Subtraction becomes addition of negated terms (`a - b` -> `[a, -1*b]`) and
/// `-1 * (a + b)` is distributed into `[-1*a, -1*b]`, so that like-term
/// collection sees every sign-carrying term individually.
fn flatten_add(expr: &Expr, out: &mut Vec<Expr>) {
    match expr {
        Expr::Add(a, b) => {
            flatten_add(a, out);
            flatten_add(b, out);
        }
        Expr::Sub(a, b) => {
            flatten_add(a, out);
            let neg_b = Expr::Mul(Box::new(Expr::Const(-1.0)), b.clone());
            flatten_add(&neg_b, out);
        }
        Expr::Mul(lhs, rhs) => {
            if let Expr::Const(-1.0) = lhs.as_ref() {
                match rhs.as_ref() {
                    Expr::Add(a, b) => {
                        // distribute: -1 * (a + b) = (-1 * a) + (-1 * b)
                        let neg_a = Expr::Mul(Box::new(Expr::Const(-1.0)), a.clone());
                        let neg_b = Expr::Mul(Box::new(Expr::Const(-1.0)), b.clone());
                        flatten_add(&neg_a, out);
                        flatten_add(&neg_b, out);
                    }
                    _ => out.push(expr.clone()),
                }
            } else if let Expr::Const(-1.0) = rhs.as_ref() {
                match lhs.as_ref() {
                    Expr::Add(a, b) => {
                        let neg_a = Expr::Mul(Box::new(Expr::Const(-1.0)), a.clone());
                        let neg_b = Expr::Mul(Box::new(Expr::Const(-1.0)), b.clone());
                        flatten_add(&neg_a, out);
                        flatten_add(&neg_b, out);
                    }
                    _ => out.push(expr.clone()),
                }
            } else {
                out.push(expr.clone());
            }
        }
        _ => out.push(expr.clone()),
    }
}

/// Flatten nested multiplication into a list of factors: `(a * b) * c` -> `[a, b, c]`.
fn flatten_mul(expr: &Expr, out: &mut Vec<Expr>) {
    match expr {
        Expr::Mul(a, b) => {
            flatten_mul(a, out);
            flatten_mul(b, out);
        }
        _ => out.push(expr.clone()),
    }
}

/// Collect terms of a sum into a polynomial map: monomial -> total coefficient.
fn collect_add_terms(terms: &[Expr]) -> HashMap<MonomialKey, f64> {
    let mut poly = HashMap::new();
    for t in terms {
        let (mon, coeff) = extract_monomial(t);
        *poly.entry(mon).or_insert(0.0) += coeff;
    }
    poly
}

/// Extract a monomial from an expression if it is a product of constants and
/// variables/powers. Non-polynomial terms report coefficient 0.0 as the
/// "not a monomial" marker.
fn extract_monomial(expr: &Expr) -> (MonomialKey, f64) {
    match expr {
        Expr::Const(c) => (MonomialKey(BTreeMap::new()), *c),
        Expr::Var(v) => {
            let mut m = BTreeMap::new();
            m.insert(v.clone(), 1);
            (MonomialKey(m), 1.0)
        }
        Expr::Mul(lhs, rhs) => {
            // fast path for the common shapes first
            match (lhs.as_ref(), rhs.as_ref()) {
                (Expr::Const(-1.0), other) | (other, Expr::Const(-1.0)) => {
                    let (mon, coeff) = extract_monomial(other);
                    (mon, -coeff)
                }
                (Expr::Const(c), other) | (other, Expr::Const(c)) => {
                    let (mon, coeff) = extract_monomial(other);
                    (mon, c * coeff)
                }
                _ => {
                    let mut factors = Vec::new();
                    flatten_mul(expr, &mut factors);
                    let mut coeff = 1.0;
                    let mut map = BTreeMap::new();
                    let mut has_non_poly = false;

                    for f in factors {
                        match f {
                            Expr::Const(c) => coeff *= c,
                            Expr::Var(v) => *map.entry(v).or_insert(0) += 1,
                            Expr::Pow(base, exp) => match (*base, *exp) {
                                (Expr::Var(v), Expr::Const(n))
                                    if n.fract() == 0.0 && n > 0.0 =>
                                {
                                    *map.entry(v).or_insert(0) += n as i32;
                                }
                                _ => has_non_poly = true,
                            },
                            _ => has_non_poly = true,
                        }
                    }

                    if has_non_poly {
                        (MonomialKey(BTreeMap::new()), 0.0)
                    } else {
                        (MonomialKey(map), coeff)
                    }
                }
            }
        }
        Expr::Pow(base, exp) => match (base.as_ref(), exp.as_ref()) {
            // only positive integer exponents form monomials; fractional and
            // non-positive powers must not be folded by like-term collection
            (Expr::Var(v), Expr::Const(n)) if n.fract() == 0.0 && *n > 0.0 => {
                let mut m = BTreeMap::new();
                m.insert(v.clone(), *n as i32);
                (MonomialKey(m), 1.0)
            }
            _ => (MonomialKey(BTreeMap::new()), 0.0),
        },
        _ => (MonomialKey(BTreeMap::new()), 0.0), // non-poly term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_folding() {
        let expr = Expr::parse_expression("(2 + 3) * 4").unwrap();
        assert_eq!(expr.simplify(), Expr::Const(20.0));
    }

    #[test]
    fn test_simplify_numbers_leaves_variables() {
        let expr = Expr::parse_expression("x + 2 * 3").unwrap();
        let simplified = expr.simplify_numbers();
        assert_eq!(
            simplified,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(6.0))
            )
        );
    }

    #[test]
    fn test_additive_identities() {
        let x = Expr::Var("x".to_string());
        let zero = Expr::Const(0.0);
        assert_eq!((x.clone() + zero.clone()).simplify(), x);
        assert_eq!((zero.clone() + x.clone()).simplify(), x);
        assert_eq!((x.clone() - zero).simplify(), x);
        assert_eq!((x.clone() - x.clone()).simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_multiplicative_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() * Expr::Const(1.0)).simplify(), x);
        assert_eq!((x.clone() * Expr::Const(0.0)).simplify(), Expr::Const(0.0));
        assert_eq!((Expr::Const(0.0) * x.clone()).simplify(), Expr::Const(0.0));
        assert_eq!((x.clone() / Expr::Const(1.0)).simplify(), x);
    }

    #[test]
    fn test_power_rules() {
        let x = Expr::Var("x".to_string());
        assert_eq!(
            x.clone().pow(Expr::Const(0.0)).simplify(),
            Expr::Const(1.0)
        );
        assert_eq!(x.clone().pow(Expr::Const(1.0)).simplify(), x);
        assert_eq!(
            (x.clone() * x.clone()).simplify(),
            Expr::Pow(Box::new(x), Box::new(Expr::Const(2.0)))
        );
    }

    #[test]
    fn test_special_function_values() {
        let zero = Expr::Const(0.0);
        assert_eq!(Expr::Exp(zero.clone().boxed()).simplify(), Expr::Const(1.0));
        assert_eq!(Expr::sin(zero.clone().boxed()).simplify(), Expr::Const(0.0));
        assert_eq!(Expr::cos(zero.boxed()).simplify(), Expr::Const(1.0));
        assert_eq!(
            Expr::Ln(Expr::Const(1.0).boxed()).simplify(),
            Expr::Const(0.0)
        );
    }

    #[test]
    fn test_like_term_collection() {
        let x = Expr::Var("x".to_string());
        let expr = x.clone() + x.clone(); // x + x
        assert_eq!(
            expr.simplify(),
            Expr::Mul(Box::new(Expr::Const(2.0)), Box::new(x))
        );
    }

    #[test]
    fn test_like_term_collection_with_powers() {
        // 3*x^2 + 2*x^2 = 5*x^2
        let expr = Expr::parse_expression("3*x^2 + 2*x^2").unwrap();
        let simplified = expr.simplify();
        let f = simplified.lambdify(&["x"]);
        assert_eq!(f(&[2.0]), 20.0);
        // it actually collapsed to a single term
        assert_eq!(
            simplified,
            Expr::Mul(
                Box::new(Expr::Const(5.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_sum_cancels_to_zero() {
        let expr = Expr::parse_expression("x*y - x*y").unwrap();
        assert_eq!(expr.simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_non_polynomial_terms_left_alone() {
        let expr = Expr::parse_expression("sin(x) + cos(x)").unwrap();
        let simplified = expr.simplify();
        assert_eq!(
            simplified,
            Expr::Add(
                Box::new(Expr::sin(Box::new(Expr::Var("x".to_string())))),
                Box::new(Expr::cos(Box::new(Expr::Var("x".to_string()))))
            )
        );
    }

    #[test]
    fn test_nested_constant_collection() {
        // (2 * x) * 3 = 6 * x
        let expr = Expr::parse_expression("(2 * x) * 3").unwrap();
        assert_eq!(
            expr.simplify(),
            Expr::Mul(
                Box::new(Expr::Const(6.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_simplify_preserves_value() {
        let expr = Expr::parse_expression("exp(x)*ln(1+y)").unwrap();
        let messy = expr.diff("x").diff("y");
        let clean = messy.simplify();
        let point = [0.3, 0.7];
        let a = messy.eval_expression(&["x", "y"], &point);
        let b = clean.eval_expression(&["x", "y"], &point);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_powers_are_not_collected() {
        // sqrt(x) + sqrt(x) must stay 2*x^0.5, never fold into a constant
        let expr = Expr::parse_expression("sqrt(x) + sqrt(x)").unwrap();
        let simplified = expr.simplify();
        let f = simplified.lambdify(&["x"]);
        assert_eq!(f(&[4.0]), 4.0);
        assert_eq!(f(&[9.0]), 6.0);
    }

    #[test]
    fn test_negative_powers_are_not_collected() {
        // x/x^2 reduces to x^-1, which is not a monomial
        let expr = Expr::parse_expression("x/x^2 + x/x^2").unwrap();
        let f = expr.simplify().lambdify(&["x"]);
        assert_eq!(f(&[2.0]), 1.0);
        assert_eq!(f(&[4.0]), 0.5);
    }

    #[test]
    fn test_extract_monomial_rejects_fractional_exponent() {
        let expr = Expr::parse_expression("sqrt(x)").unwrap();
        let (mon, coeff) = extract_monomial(&expr);
        assert_eq!(mon, MonomialKey(BTreeMap::new()));
        assert_eq!(coeff, 0.0);
    }

    #[test]
    fn test_extract_monomial_mixed_term() {
        // 2 * x * y^2 -> ({x:1, y:2}, 2.0)
        let expr = Expr::parse_expression("2*x*y^2").unwrap();
        let (mon, coeff) = extract_monomial(&expr);
        let mut expected = BTreeMap::new();
        expected.insert("x".to_string(), 1);
        expected.insert("y".to_string(), 2);
        assert_eq!(mon, MonomialKey(expected));
        assert_eq!(coeff, 2.0);
    }
}
