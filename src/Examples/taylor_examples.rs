// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::surface_io::save_comparison_to_csv;
use crate::taylor::approximation::approximate_str;
use crate::taylor::expander::ExpansionPoint;
use log::{LevelFilter, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// A ready-made demonstration function with a sensible expansion point and
/// plotting window.
pub struct TaylorExample {
    pub name: &'static str,
    pub function: &'static str,
    pub point: (f64, f64),
    /// half-width of the comparison grid around the point
    pub half_width: f64,
}

/// The demonstration catalog: classics of multivariate calculus plus two
/// optimization benchmarks whose curvature makes low-degree expansions fail
/// visibly.
pub fn catalog() -> Vec<TaylorExample> {
    vec![
        TaylorExample {
            name: "sin(x)sin(y)",
            function: "sin(x)*sin(y)",
            point: (0.1, 0.1),
            half_width: 2.5,
        },
        TaylorExample {
            name: "e^(xy)",
            function: "exp(x*y)",
            point: (0.1, 0.1),
            half_width: 2.0,
        },
        TaylorExample {
            name: "x*e^y",
            function: "x*exp(y)",
            point: (0.0, 0.0),
            half_width: 2.0,
        },
        TaylorExample {
            name: "e^x*ln(1+y)",
            function: "exp(x)*ln(1+y)",
            point: (0.0, 0.0),
            half_width: 2.0,
        },
        TaylorExample {
            name: "x^2+y^2",
            function: "x^2 + y^2",
            point: (0.0001, 0.0001),
            half_width: 3.0,
        },
        TaylorExample {
            name: "Himmelblau",
            function: "(x^2+y-11)^2 + (x+y^2-7)^2",
            point: (-0.27084, -0.92304),
            half_width: 4.0,
        },
        TaylorExample {
            name: "Ackley",
            function: "-20*exp(-0.2*sqrt((x^2+y^2)/2))-exp((cos(2*pi*x)+cos(2*pi*y))/2)+20+e",
            point: (0.0, 0.0),
            half_width: 10.0,
        },
    ]
}

/// Runs one catalog entry: expands to the requested degree, prints the
/// polynomial and saves the surface comparison next to the working directory.
#[allow(dead_code)]
pub fn taylor_examples(example: usize, degree: usize) {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let catalog = catalog();
    let Some(entry) = catalog.get(example) else {
        warn!(
            "no example {}; the catalog has entries 0..{}",
            example,
            catalog.len()
        );
        return;
    };

    let point = match ExpansionPoint::new(&[("x", entry.point.0), ("y", entry.point.1)]) {
        Ok(point) => point,
        Err(err) => {
            warn!("{}: {}", entry.name, err);
            return;
        }
    };

    match approximate_str(entry.function, &point, degree) {
        Ok(approximation) => {
            info!("{}: f(x, y) = {}", entry.name, entry.function);
            info!("T(x, y) = {}", approximation.pretty());
            let comparison = approximation.eval_on_grid(entry.half_width, 41);
            info!(
                "max |T - f| on the window: {}",
                comparison.max_abs_deviation()
            );
            let filename = format!("taylor_example_{}.csv", example);
            if let Err(err) = save_comparison_to_csv(&comparison, "x", "y", &filename) {
                warn!("could not save {}: {}", filename, err);
            }
        }
        Err(err) => warn!("{}: {}", entry.name, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_entries() {
        assert_eq!(catalog().len(), 7);
    }

    #[test]
    fn test_every_catalog_function_parses_and_expands() {
        for entry in catalog() {
            let point =
                ExpansionPoint::new(&[("x", entry.point.0), ("y", entry.point.1)]).unwrap();
            let approximation = approximate_str(entry.function, &point, 3)
                .unwrap_or_else(|err| panic!("{} failed: {}", entry.name, err));
            // the polynomial must reproduce the function value at the point;
            // the Ackley entry is exempt: its sqrt term makes the gradient
            // singular at the origin and the coefficients come out non-finite
            let t = approximation.evaluator();
            let f = approximation.function_evaluator();
            let (x0, y0) = entry.point;
            let t_val = t(x0, y0);
            if t_val.is_finite() {
                assert!(
                    (t_val - f(x0, y0)).abs() < 1e-9,
                    "{} disagrees at its own expansion point",
                    entry.name
                );
            }
        }
    }
}
