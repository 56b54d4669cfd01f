//! CLI command implementations

pub mod decompose;
pub mod invert;
pub mod perspective;
pub mod slerp;
pub mod transform;

use anyhow::{Context, Result, bail};
use winnum_math::{Float3x2, Float4x4, Quaternion};

/// Parse a comma-separated float list like "1,0,0.5"
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{}'", p, s))
        })
        .collect()
}

/// Parse exactly `N` comma-separated floats
pub fn parse_array<const N: usize>(s: &str, what: &str) -> Result<[f32; N]> {
    let values = parse_floats(s).with_context(|| format!("Failed to parse {}", what))?;
    match <[f32; N]>::try_from(values.as_slice()) {
        Ok(array) => Ok(array),
        Err(_) => bail!("{} needs {} values, got {}", what, N, values.len()),
    }
}

/// Parse a row-major 3x2 matrix
pub fn parse_float3x2(s: &str) -> Result<Float3x2> {
    let [m11, m12, m21, m22, m31, m32] = parse_array::<6>(s, "3x2 matrix")?;
    Ok(Float3x2::new(m11, m12, m21, m22, m31, m32))
}

/// Parse a row-major 4x4 matrix
pub fn parse_float4x4(s: &str) -> Result<Float4x4> {
    let v = parse_array::<16>(s, "4x4 matrix")?;
    Ok(Float4x4::from_rows([
        [v[0], v[1], v[2], v[3]],
        [v[4], v[5], v[6], v[7]],
        [v[8], v[9], v[10], v[11]],
        [v[12], v[13], v[14], v[15]],
    ]))
}

/// Parse an x,y,z,w quaternion
pub fn parse_quaternion(s: &str) -> Result<Quaternion> {
    let [x, y, z, w] = parse_array::<4>(s, "quaternion")?;
    Ok(Quaternion::new(x, y, z, w))
}

/// Format a vector-like list of components
pub fn format_values(values: &[f32], precision: usize) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect();
    format!("({})", parts.join(", "))
}

/// Format a matrix one row per line
pub fn format_rows<const N: usize>(rows: &[[f32; N]], precision: usize) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:>w$.*}", precision, v, w = precision + 5))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
