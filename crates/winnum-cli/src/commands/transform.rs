//! Transform command
//!
//! Applies a 3x2 matrix, 4x4 matrix or quaternion to a 2, 3 or 4 component
//! point. `--normal` applies only the linear part of a matrix.

use crate::TransformArgs;
use anyhow::{Result, bail};
use std::process::ExitCode;
use tracing::{debug, trace};
use winnum_math::{Float2, Float3, Float4, Transform, TransformNormal};

use super::{format_values, parse_float3x2, parse_float4x4, parse_floats, parse_quaternion};

pub fn run(args: TransformArgs, precision: usize) -> Result<ExitCode> {
    trace!(point = %args.point, normal = args.normal, "transform::run");

    let p = parse_floats(&args.point)?;
    debug!(components = p.len(), "parsed point");

    let result: Vec<f32> = if let Some(s) = args.m3x2.as_deref() {
        let m = parse_float3x2(s)?;
        match (p.as_slice(), args.normal) {
            (&[x, y], false) => Float2::new(x, y).transform(m).to_array().to_vec(),
            (&[x, y], true) => Float2::new(x, y).transform_normal(m).to_array().to_vec(),
            _ => bail!("a 3x2 matrix transforms 2-component points, got {}", p.len()),
        }
    } else if let Some(s) = args.m4x4.as_deref() {
        let m = parse_float4x4(s)?;
        match (p.as_slice(), args.normal) {
            (&[x, y], false) => Float2::new(x, y).transform(m).to_array().to_vec(),
            (&[x, y], true) => Float2::new(x, y).transform_normal(m).to_array().to_vec(),
            (&[x, y, z], false) => Float3::new(x, y, z).transform(m).to_array().to_vec(),
            (&[x, y, z], true) => Float3::new(x, y, z).transform_normal(m).to_array().to_vec(),
            (&[x, y, z, w], false) => Float4::new(x, y, z, w).transform(m).to_array().to_vec(),
            (&[_, _, _, _], true) => bail!("--normal applies to 2 or 3 component vectors"),
            _ => bail!("a 4x4 matrix transforms 2, 3 or 4 component points, got {}", p.len()),
        }
    } else if let Some(s) = args.quat.as_deref() {
        let q = parse_quaternion(s)?;
        match p.as_slice() {
            &[x, y] => Float2::new(x, y).transform(q).to_array().to_vec(),
            &[x, y, z] => Float3::new(x, y, z).transform(q).to_array().to_vec(),
            &[x, y, z, w] => Float4::new(x, y, z, w).transform(q).to_array().to_vec(),
            _ => bail!("a quaternion rotates 2, 3 or 4 component vectors, got {}", p.len()),
        }
    } else {
        bail!("one of --m3x2, --m4x4 or --quat is required")
    };

    println!("{}", format_values(&result, precision));
    Ok(ExitCode::SUCCESS)
}
