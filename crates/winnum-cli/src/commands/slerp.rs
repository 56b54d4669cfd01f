//! Slerp command
//!
//! Interpolates between two quaternions along the shorter arc.

use crate::SlerpArgs;
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{debug, trace};

use super::{format_values, parse_quaternion};

pub fn run(args: SlerpArgs, precision: usize) -> Result<ExitCode> {
    trace!(from = %args.from, to = %args.to, amount = args.amount, nlerp = args.nlerp, "slerp::run");

    let from = parse_quaternion(&args.from).context("Invalid start quaternion")?;
    let to = parse_quaternion(&args.to).context("Invalid end quaternion")?;
    debug!(dot = from.dot(to), "quaternion alignment");

    let q = if args.nlerp {
        from.lerp(to, args.amount)
    } else {
        from.slerp(to, args.amount)
    };

    println!("{}", format_values(&[q.x, q.y, q.z, q.w], precision));
    Ok(ExitCode::SUCCESS)
}
