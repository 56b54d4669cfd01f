//! Invert command
//!
//! Inverts a 3x2 or 4x4 matrix and prints it row by row. A singular input
//! is reported on stderr with exit status 1.

use crate::InvertArgs;
use anyhow::{Result, bail};
use std::process::ExitCode;
use tracing::{debug, trace};

use super::{format_rows, parse_float3x2, parse_float4x4};

pub fn run(args: InvertArgs, precision: usize) -> Result<ExitCode> {
    trace!(m3x2 = ?args.m3x2, m4x4 = ?args.m4x4, "invert::run");

    let (det, inverse) = if let Some(s) = args.m3x2.as_deref() {
        let m = parse_float3x2(s)?;
        debug!(?m, "parsed 3x2 matrix");
        (m.determinant(), m.invert().map(|inv| format_rows(&inv.to_rows(), precision)))
    } else if let Some(s) = args.m4x4.as_deref() {
        let m = parse_float4x4(s)?;
        debug!(?m, "parsed 4x4 matrix");
        (m.determinant(), m.invert().map(|inv| format_rows(&inv.to_rows(), precision)))
    } else {
        bail!("one of --m3x2 or --m4x4 is required")
    };

    match inverse {
        Some(rows) => {
            println!("{}", rows);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("matrix is singular (determinant {:.*e})", precision, det);
            Ok(ExitCode::FAILURE)
        }
    }
}
