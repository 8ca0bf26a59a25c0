//! Vertex/point files: `.json` (array of `{x, y}`) or `.csv` (columns `x`, `y`).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use pointplane::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PointRow {
    x: i64,
    y: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Csv,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        _ => bail!(
            "unsupported point file {} (expected .json or .csv)",
            path.display()
        ),
    }
}

/// Read points in file order.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match format_of(path)? {
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let rows: Vec<PointRow> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(rows.into_iter().map(|r| Point::new(r.x, r.y)).collect())
        }
        Format::Csv => read_csv(path),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = df.column("x")?.i64()?;
    let ys = df.column("y")?.i64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: row {} has an empty coordinate", path.display(), row + 1),
        }
    }
    Ok(out)
}

/// Write points in the given order, creating parent directories as needed.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let format = format_of(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            let rows: Vec<PointRow> = points.iter().map(|p| PointRow { x: p.x, y: p.y }).collect();
            fs::write(path, serde_json::to_vec_pretty(&rows)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let xs: Vec<i64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<i64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Point> {
        vec![Point::new(10, 10), Point::new(50, 10), Point::new(-3, 7)]
    }

    #[test]
    fn json_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/shape.json");
        write_points(&path, &sample()).unwrap();
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn csv_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shape.csv");
        write_points(&path, &sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("x,y"));
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn json_accepts_hand_written_vertices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("v.json");
        fs::write(&path, r#"[{"x": 0, "y": 0}, {"x": 5, "y": 0}]"#).unwrap();
        assert_eq!(
            read_points(&path).unwrap(),
            vec![Point::new(0, 0), Point::new(5, 0)]
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_points(Path::new("shape.png")).unwrap_err();
        assert!(err.to_string().contains("expected .json or .csv"));
    }
}
