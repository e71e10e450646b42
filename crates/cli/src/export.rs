//! Tabular export of the sampled fields via polars.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use fringe::frame::Frame;
use polars::prelude::*;

/// One row per grid node: x, y, path_difference, value (row-major, y outer).
pub fn field_table(frame: &Frame) -> PolarsResult<DataFrame> {
    let n = frame.grid.n;
    let cap = n * n;
    let (mut xs, mut ys, mut diffs, mut vals) = (
        Vec::with_capacity(cap),
        Vec::with_capacity(cap),
        Vec::with_capacity(cap),
        Vec::with_capacity(cap),
    );
    for row in 0..n {
        for col in 0..n {
            let p = frame.grid.node(row, col);
            xs.push(p.x);
            ys.push(p.y);
            diffs.push(frame.path_diff[(row, col)]);
            vals.push(frame.map[(row, col)]);
        }
    }
    df!(
        "x" => xs,
        "y" => ys,
        "path_difference" => diffs,
        "value" => vals
    )
}

/// (min, max) of the `value` column.
pub fn value_range(df: &DataFrame) -> PolarsResult<(Option<f64>, Option<f64>)> {
    let summary = df
        .clone()
        .lazy()
        .select([
            col("value").min().alias("min"),
            col("value").max().alias("max"),
        ])
        .collect()?;
    let min = summary.column("min")?.f64()?.get(0);
    let max = summary.column("max")?.f64()?.get(0);
    Ok((min, max))
}

/// Write `df` as CSV or Parquet, chosen by the extension of `out`.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match ext.as_deref() {
        Some("csv") => {
            CsvWriter::new(&mut file).finish(df)?;
        }
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => bail!(
            "unsupported table format for {} (use .csv or .parquet)",
            out.display()
        ),
    }
    Ok(())
}
