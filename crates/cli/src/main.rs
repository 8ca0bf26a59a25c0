use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pointplane::api::{
    draw_random_shape, Axis, CoordRange, Plane, ShapeCfg, ShapeReplay, VertexCount,
};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Rasterize vertex files into point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Join vertices into a rasterized outline
    Join(RasterArgs),
    /// Join vertices and fill the interior
    Fill(RasterArgs),
    /// Write a reproducible random vertex file
    Random {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10)]
        vertices: usize,
        /// Inclusive lower coordinate bound (both axes)
        #[arg(long, default_value_t = 200)]
        min: i64,
        /// Exclusive upper coordinate bound (both axes)
        #[arg(long, default_value_t = 500)]
        max: i64,
        /// Repeat the first vertex at the end
        #[arg(long)]
        close: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct RasterArgs {
    /// Vertex file (.json or .csv)
    #[arg(long)]
    input: PathBuf,
    /// Point file to write (.json or .csv)
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 512)]
    width: i64,
    #[arg(long, default_value_t = 512)]
    height: i64,
    /// Reject the whole shape if any point leaves [0, width] x [0, height]
    #[arg(long)]
    strict: bool,
    /// Flip the y axis so row 0 is the top, as in image buffers
    #[arg(long)]
    flip_y: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Join,
    Fill,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Mode::Join => "join",
            Mode::Fill => "fill",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Join(args) => raster(Mode::Join, &args),
        Action::Fill(args) => raster(Mode::Fill, &args),
        Action::Random {
            out,
            seed,
            index,
            vertices,
            min,
            max,
            close,
        } => random(out, ShapeReplay { seed, index }, vertices, min..max, close),
        Action::Report => report(),
    }
}

fn raster(mode: Mode, args: &RasterArgs) -> Result<()> {
    let vertices = io::read_points(&args.input)?;
    tracing::info!(
        mode = mode.name(),
        input = %args.input.display(),
        vertices = vertices.len(),
        width = args.width,
        height = args.height,
        "raster"
    );
    let mut plane = Plane::new((args.width, args.height));
    let points = match mode {
        Mode::Join => plane.join_points(&vertices),
        Mode::Fill => plane.join_and_fill_points(&vertices),
    };
    if let Err(err) = plane.write_points(&points, args.strict) {
        tracing::warn!(error = %err, "strict write rejected");
        return Err(err.into());
    }
    if args.flip_y {
        plane.flip(Axis::Y);
    }
    let mut out = plane.read_points();
    out.sort();
    io::write_points(&args.out, &out)?;

    let bounds = plane.points().bounds().map(|(lo, hi)| [[lo.x, lo.y], [hi.x, hi.y]]);
    let payload = Payload::new(
        mode.name(),
        serde_json::json!({
            "input": args.input.to_string_lossy(),
            "width": args.width,
            "height": args.height,
            "strict": args.strict,
            "flip_y": args.flip_y,
        }),
    )
    .with_stats(serde_json::json!({
        "vertices": vertices.len(),
        "points": out.len(),
        "bounds": bounds,
    }));
    let prov = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(
        points = out.len(),
        out = %args.out.display(),
        provenance = %prov.display(),
        "wrote points"
    );
    Ok(())
}

fn random(
    out: PathBuf,
    tok: ShapeReplay,
    vertices: usize,
    range: std::ops::Range<i64>,
    close: bool,
) -> Result<()> {
    let coords = CoordRange {
        start: range.start,
        end: range.end,
    };
    let cfg = ShapeCfg {
        vertex_count: VertexCount::Fixed(vertices),
        x_range: coords,
        y_range: coords,
        close,
    };
    let shape = draw_random_shape(cfg, tok);
    io::write_points(&out, &shape)?;
    let payload = Payload::new(
        "random",
        serde_json::json!({
            "seed": tok.seed,
            "index": tok.index,
            "vertices": vertices,
            "range": [range.start, range.end],
            "close": close,
        }),
    );
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(vertices = shape.len(), out = %out.display(), "random");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "pointplane": pointplane::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointplane::Point;
    use std::fs;
    use tempfile::tempdir;

    fn args(dir: &std::path::Path, input: &str, out: &str) -> RasterArgs {
        RasterArgs {
            input: dir.join(input),
            out: dir.join(out),
            width: 512,
            height: 512,
            strict: true,
            flip_y: false,
        }
    }

    fn square() -> Vec<Point> {
        [(10, 10), (50, 10), (50, 50), (10, 50), (10, 10)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn fill_writes_sorted_points_and_sidecar() {
        let dir = tempdir().unwrap();
        io::write_points(&dir.path().join("square.json"), &square()).unwrap();
        let a = args(dir.path(), "square.json", "filled.csv");
        raster(Mode::Fill, &a).unwrap();
        let pts = io::read_points(&a.out).unwrap();
        assert_eq!(pts.len(), 41 * 41);
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
        assert!(pts.contains(&Point::new(30, 30)));
        assert!(dir.path().join("filled.provenance.json").exists());
    }

    #[test]
    fn join_with_flip_reflects_rows() {
        let dir = tempdir().unwrap();
        let line = vec![Point::new(0, 0), Point::new(3, 0)];
        io::write_points(&dir.path().join("line.json"), &line).unwrap();
        let mut a = args(dir.path(), "line.json", "line_out.json");
        a.flip_y = true;
        raster(Mode::Join, &a).unwrap();
        let pts = io::read_points(&a.out).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0, 512), Point::new(1, 512), Point::new(2, 512)]
        );
    }

    #[test]
    fn strict_raster_rejects_out_of_bounds_shape() {
        let dir = tempdir().unwrap();
        let line = vec![Point::new(-4, 0), Point::new(4, 0)];
        io::write_points(&dir.path().join("line.json"), &line).unwrap();
        let a = args(dir.path(), "line.json", "never.json");
        let err = raster(Mode::Join, &a).unwrap_err();
        assert!(err.to_string().contains("outside the plane"));
        assert!(!a.out.exists());
    }

    #[test]
    fn random_is_reproducible() {
        let dir = tempdir().unwrap();
        let tok = ShapeReplay { seed: 9, index: 2 };
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        random(first.clone(), tok, 6, 0..100, true).unwrap();
        random(second.clone(), tok, 6, 0..100, true).unwrap();
        let a = io::read_points(&first).unwrap();
        assert_eq!(a.len(), 7);
        assert_eq!(a, io::read_points(&second).unwrap());
        assert_eq!(
            fs::read(first).unwrap(),
            fs::read(second).unwrap()
        );
    }
}
