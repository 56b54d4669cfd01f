//! Decompose command
//!
//! Splits a 4x4 matrix into scale, rotation and translation. The partial
//! result is printed even when decomposition fails.

use crate::DecomposeArgs;
use anyhow::Result;
use std::process::ExitCode;
use tracing::{info, trace};

use super::{format_values, parse_float4x4};

pub fn run(args: DecomposeArgs, precision: usize) -> Result<ExitCode> {
    trace!(matrix = %args.matrix, "decompose::run");

    let m = parse_float4x4(&args.matrix)?;
    let d = m.decompose();
    info!(success = d.success, "decomposed matrix");

    let r = d.rotation;
    println!("scale:       {}", format_values(&d.scale.to_array(), precision));
    println!("rotation:    {}", format_values(&[r.x, r.y, r.z, r.w], precision));
    println!("translation: {}", format_values(&d.translation.to_array(), precision));
    println!("success:     {}", d.success);

    Ok(ExitCode::SUCCESS)
}
