//! Point-file readers and writers.
//!
//! - `.csv`: columns `x` and `y` (any numeric type), read with polars.
//! - anything else: `(x, y), (x, y), ...` text; parentheses and line breaks are
//!   optional, values are comma separated.

use std::path::Path;

use anyhow::{bail, Context, Result};
use hullscan::Point;
use polars::prelude::*;

/// Read a point file, choosing the format by extension.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_points(path)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        parse_point_text(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Read `x`/`y` columns of a CSV file.
pub fn read_csv_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

/// Parse `(x, y), (x, y), ...` text.
pub fn parse_point_text(text: &str) -> Result<Vec<Point>> {
    let cleaned: String = text
        .chars()
        .map(|c| if c == '(' || c == ')' { ' ' } else { c })
        .collect();
    let values = cleaned
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse::<f64>()
                .with_context(|| format!("value #{i} `{s}` is not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;
    if values.len() % 2 != 0 {
        bail!("odd number of coordinates ({})", values.len());
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Inverse of `parse_point_text`: five points per line.
pub fn format_point_text(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(if i % 5 == 0 { ",\n" } else { ", " });
        }
        out.push_str(&format!("({}, {})", p.x, p.y));
    }
    out.push('\n');
    out
}
