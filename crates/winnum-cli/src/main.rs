//! winnum - command-line front end for the winnum geometry kernel
//!
//! Inverts and decomposes matrices, builds projections, interpolates
//! quaternions and transforms points from the shell.

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "winnum")]
#[command(author, version, about = "Vector, matrix and quaternion calculator")]
#[command(long_about = "
Evaluates winnum geometry kernel operations from the command line.
Matrices are given row-major as comma-separated floats; vectors are row
vectors, so `a * b` applies `a` first.

Examples:
  winnum invert --m3x2 2,0,0,2,1,1
  winnum invert --m4x4 1,0,0,0,0,1,0,0,0,0,1,0,5,6,7,1
  winnum decompose 2,0,0,0,0,3,0,0,0,0,4,0,1,2,3,1
  winnum perspective --fov 60 --aspect 1.777 --near 0.1 --far 100
  winnum slerp 0,0,0,1 0,0.7071068,0,0.7071068 -t 0.5
  winnum transform 1,2,3 --m4x4 1,0,0,0,0,1,0,0,0,0,1,0,5,6,7,1
  winnum -vv invert --m4x4 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace; RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Digits printed after the decimal point
    #[arg(short, long, global = true, default_value = "6")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Invert a 3x2 or 4x4 matrix (exit status 1 if singular)
    #[command(visible_alias = "inv")]
    Invert(InvertArgs),

    /// Split a 4x4 matrix into scale, rotation and translation
    Decompose(DecomposeArgs),

    /// Build a field-of-view perspective projection
    Perspective(PerspectiveArgs),

    /// Spherically interpolate between two quaternions
    Slerp(SlerpArgs),

    /// Transform a point by a matrix or quaternion
    #[command(visible_alias = "xf")]
    Transform(TransformArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("matrix").required(true).args(["m3x2", "m4x4"])))]
struct InvertArgs {
    /// 3x2 matrix: 6 floats, row-major
    #[arg(long, allow_hyphen_values = true)]
    m3x2: Option<String>,

    /// 4x4 matrix: 16 floats, row-major
    #[arg(long, allow_hyphen_values = true)]
    m4x4: Option<String>,
}

#[derive(Args)]
struct DecomposeArgs {
    /// 4x4 matrix: 16 floats, row-major
    #[arg(allow_hyphen_values = true)]
    matrix: String,
}

#[derive(Args)]
struct PerspectiveArgs {
    /// Vertical field of view in degrees
    #[arg(long, default_value = "60")]
    fov: f32,

    /// Aspect ratio (width / height)
    #[arg(short, long, default_value = "1.0")]
    aspect: f32,

    /// Distance to the near plane
    #[arg(long, allow_hyphen_values = true)]
    near: f32,

    /// Distance to the far plane
    #[arg(long, allow_hyphen_values = true)]
    far: f32,
}

#[derive(Args)]
struct SlerpArgs {
    /// Start quaternion: x,y,z,w
    #[arg(allow_hyphen_values = true)]
    from: String,

    /// End quaternion: x,y,z,w
    #[arg(allow_hyphen_values = true)]
    to: String,

    /// Interpolation amount (0 = from, 1 = to)
    #[arg(short = 't', long, default_value = "0.5", allow_hyphen_values = true)]
    amount: f32,

    /// Use normalized linear interpolation instead
    #[arg(long)]
    nlerp: bool,
}

#[derive(Args)]
#[command(group(ArgGroup::new("by").required(true).args(["m3x2", "m4x4", "quat"])))]
struct TransformArgs {
    /// Point: 2, 3 or 4 floats
    #[arg(allow_hyphen_values = true)]
    point: String,

    /// 3x2 matrix: 6 floats, row-major
    #[arg(long, allow_hyphen_values = true)]
    m3x2: Option<String>,

    /// 4x4 matrix: 16 floats, row-major
    #[arg(long, allow_hyphen_values = true)]
    m4x4: Option<String>,

    /// Rotation quaternion: x,y,z,w
    #[arg(long, allow_hyphen_values = true)]
    quat: Option<String>,

    /// Treat the input as a direction (no translation)
    #[arg(short, long)]
    normal: bool,
}

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let precision = cli.precision;
    match cli.command {
        Commands::Invert(args) => commands::invert::run(args, precision),
        Commands::Decompose(args) => commands::decompose::run(args, precision),
        Commands::Perspective(args) => commands::perspective::run(args, precision),
        Commands::Slerp(args) => commands::slerp::run(args, precision),
        Commands::Transform(args) => commands::transform::run(args, precision),
    }
}
