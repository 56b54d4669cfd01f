//! Perspective command
//!
//! Builds a field-of-view perspective projection. Invalid near/far planes
//! surface as the kernel's `InvalidArgument` error.

use crate::PerspectiveArgs;
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{debug, trace};
use winnum_core::to_radians;
use winnum_math::Float4x4;

use super::format_rows;

pub fn run(args: PerspectiveArgs, precision: usize) -> Result<ExitCode> {
    trace!(fov = args.fov, aspect = args.aspect, near = args.near, far = args.far, "perspective::run");

    let fov = to_radians(args.fov);
    debug!(fov_radians = fov, "converted field of view");

    let m = Float4x4::perspective_field_of_view(fov, args.aspect, args.near, args.far)
        .context("Failed to build perspective projection")?;

    println!("{}", format_rows(&m.to_rows(), precision));
    Ok(ExitCode::SUCCESS)
}
