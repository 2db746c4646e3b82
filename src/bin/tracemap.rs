use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tracemap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene file to `<out-dir>/download.png`.
    Render(RenderArgs),
    /// Print the points of an encoded polyline as `lat,lon` lines.
    Decode(DecodeArgs),
    /// Encode a JSON list of `[lat, lon]` pairs as a polyline.
    Encode(EncodeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory that receives the image.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Override the scene's canvas width (CSS pixels).
    #[arg(long)]
    width: Option<f64>,

    /// Override the scene's canvas height (CSS pixels).
    #[arg(long)]
    height: Option<f64>,

    /// Override the scene's device pixel ratio.
    #[arg(long)]
    pixel_ratio: Option<f64>,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Encoded polyline.
    polyline: String,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// JSON file holding `[[lat, lon], ...]`.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Encode(args) => cmd_encode(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut scene = tracemap::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    if let Some(w) = args.width {
        scene.canvas.width = w;
    }
    if let Some(h) = args.height {
        scene.canvas.height = h;
    }
    if let Some(r) = args.pixel_ratio {
        scene.canvas.pixel_ratio = r;
    }

    let total = scene.tracks.len();
    let (store, rejected) = scene.build()?;
    for (index, err) in &rejected {
        eprintln!("skipped track {index}: {err}");
    }
    tracing::info!(
        loaded = total - rejected.len(),
        rejected = rejected.len(),
        "tracks added"
    );

    let path = store.download(&args.out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let points = tracemap::decode_points(&args.polyline).context("decode polyline")?;
    for (lat, lon) in points {
        println!("{lat:.5},{lon:.5}");
    }
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let points = read_points_json(&args.in_path)?;
    println!("{}", tracemap::encode(&points));
    Ok(())
}

fn read_points_json(path: &Path) -> anyhow::Result<Vec<(f64, f64)>> {
    let f = File::open(path).with_context(|| format!("open points '{}'", path.display()))?;
    let points: Vec<(f64, f64)> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse points JSON")?;
    Ok(points)
}
