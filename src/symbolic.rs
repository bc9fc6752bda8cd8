#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedTaylor::symbolic::symbolic_engine::Expr;
/// let input = "sin(x)*sin(y)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify(&["x", "y"]);
/// println!("{}, Rust function: {}  \n", input, parsed_function(&[1.0, 2.0]));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedTaylor::symbolic::symbolic_engine::Expr;
/// let input = "exp(x)*ln(1+y)";
/// // here you've got symbolic expression
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // turn symbolic expression to a pretty human-readable string
/// let readable = parsed_expression.sym_to_str();
/// println!("{}, sym to string: {}  \n", input, readable);
/// // return vec of all arguments
/// let all = parsed_expression.all_arguments_are_variables();
/// println!("all arguments are variables {:?}", all);
/// // differentiate with respect to x and y
/// let df_dx = parsed_expression.diff("x");
/// let df_dy = parsed_expression.diff("y");
/// println!("df_dx = {}, df_dy = {}", df_dx, df_dy);
/// // convert symbolic expression to a Rust function and evaluate the function
/// let function_of_x_and_y = parsed_expression.lambdify2D("x", "y");
/// let f_res = function_of_x_and_y(1.0, 2.0);
/// println!("f_res = {}", f_res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// turning a symbolic expression into a regular Rust closure
pub mod symbolic_lambdify;
///________________________________________________________________________________________________________________________________________________
/// algebraic simplification: constant folding, identities, like-term collection
pub mod symbolic_simplify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
