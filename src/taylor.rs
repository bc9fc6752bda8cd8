#![allow(non_snake_case)]
/// # Taylor approximation of functions of two variables
///
/// The module builds polynomial approximations T(x, y) of a function f(x, y)
/// around an expansion point, from the tangent plane up to arbitrary degree.
///
///# Example
/// ```
/// use RustedTaylor::symbolic::symbolic_engine::Expr;
/// use RustedTaylor::taylor::expander::{ExpansionPoint, TaylorExpander};
/// let expr = Expr::parse_expression("exp(x*y)").unwrap();
/// let point = ExpansionPoint::new(&[("x", 0.0), ("y", 0.0)]).unwrap();
/// let expander = TaylorExpander::new(expr);
/// let taylor = expander.expand(&point, 3).unwrap();
/// println!("T(x, y) = {}", taylor);
/// ```
/// ________________________________________________________________________________________________________________________________
/// error taxonomy shared by the whole Taylor machinery
pub mod errors;
///________________________________________________________________________________________________________________________________________________
/// gradients and higher mixed partial derivatives with per-step simplification
pub mod differential;
///________________________________________________________________________________________________________________________________________________
/// the expansion itself: tangent plane and general degree-d Taylor polynomial
pub mod expander;
///________________________________________________________________________________________________________________________________________________
/// stateless facade bundling function, polynomial and grid comparison
pub mod approximation;
