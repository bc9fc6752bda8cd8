//! different utility modules used throughout the project
/// evaluation of functions and Taylor polynomials on rectangular grids
pub mod grid;
/// tiny module to save surface comparisons into file
pub mod surface_io;
