//! examples of usage of RustedTaylor
/// Taylor approximation examples: the built-in function catalog and a runner
pub mod taylor_examples;
