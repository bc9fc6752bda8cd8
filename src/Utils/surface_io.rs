//! Saving surface comparisons to disk for inspection in external tools.

use crate::Utils::grid::SurfaceComparison;
use csv::Writer;
use std::fs::File;
use std::io;

/// Writes the comparison in long format, one grid node per row:
/// `x, y, f, taylor, deviation`.
pub fn save_comparison_to_csv(
    comparison: &SurfaceComparison,
    x_name: &str,
    y_name: &str,
    filename: &str,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([x_name, y_name, "f", "taylor", "deviation"])?;

    for (i, x) in comparison.x_mesh.iter().enumerate() {
        for (j, y) in comparison.y_mesh.iter().enumerate() {
            let f_val = comparison.original[(i, j)];
            let t_val = comparison.taylor[(i, j)];
            writer.write_record([
                x.to_string(),
                y.to_string(),
                f_val.to_string(),
                t_val.to_string(),
                (t_val - f_val).to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utils::grid::linspace;
    use std::fs;

    #[test]
    fn test_save_comparison_to_csv() {
        let f = |x: f64, y: f64| x + y;
        let t = |x: f64, y: f64| x + y + 1.0;
        let comparison =
            SurfaceComparison::new(&f, &t, linspace(0.0, 1.0, 2), linspace(0.0, 1.0, 2));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        let path_str = path.to_str().unwrap();
        save_comparison_to_csv(&comparison, "x", "y", path_str).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "x,y,f,taylor,deviation");
        // 2x2 grid: four data rows
        assert_eq!(lines.count(), 4);
        assert!(contents.contains("1,1,2,3,1"));
    }
}
