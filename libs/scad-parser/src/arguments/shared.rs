//! Shared value conversions used by the per-construct mappers.
//!
//! Each conversion returns `None` when the value has the wrong shape; the
//! [`super::Reader`] turns that into a positioned error.

use scad_ast::Value;

/// A finite number.
pub fn finite(value: &Value) -> Option<f64> {
    value.as_number().filter(|n| n.is_finite())
}

/// A non-negative count; fractional values are truncated.
pub fn count(value: &Value) -> Option<u32> {
    let n = finite(value)?;
    (n >= 0.0 && n <= u32::MAX as f64).then(|| n as u32)
}

/// A vector of finite numbers whose length lies in `min..=max`.
fn numbers(value: &Value, min: usize, max: usize) -> Option<Vec<f64>> {
    let items = value.as_vector()?;
    if items.len() < min || items.len() > max {
        return None;
    }
    items.iter().map(finite).collect()
}

/// `[x, y]` or `[x, y, z]`, missing z filled with `fill`.
pub fn vec3_padded(value: &Value, fill: f64) -> Option<[f64; 3]> {
    let n = numbers(value, 2, 3)?;
    Some([n[0], n[1], n.get(2).copied().unwrap_or(fill)])
}

/// Exactly `[x, y]`.
pub fn vec2(value: &Value) -> Option<[f64; 2]> {
    let n = numbers(value, 2, 2)?;
    Some([n[0], n[1]])
}

/// Exactly `[x, y, z]`.
pub fn vec3(value: &Value) -> Option<[f64; 3]> {
    let n = numbers(value, 3, 3)?;
    Some([n[0], n[1], n[2]])
}

/// A scalar applied to every axis, or a 2/3-element vector padded with `fill`.
pub fn scalar_or_vec3(value: &Value, fill: f64) -> Option<[f64; 3]> {
    match value {
        Value::Number(_) => finite(value).map(|s| [s, s, s]),
        _ => vec3_padded(value, fill),
    }
}

/// `[r, g, b]` or `[r, g, b, a]`; alpha defaults to 1.
pub fn rgba(value: &Value) -> Option<[f64; 4]> {
    let n = numbers(value, 3, 4)?;
    Some([n[0], n[1], n[2], n.get(3).copied().unwrap_or(1.0)])
}

/// A list of points, each converted by `point`.
pub fn points<T>(value: &Value, point: impl Fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    value.as_vector()?.iter().map(point).collect()
}

/// A list of index lists (`faces`, `paths`).
pub fn index_lists(value: &Value) -> Option<Vec<Vec<usize>>> {
    value
        .as_vector()?
        .iter()
        .map(|list| {
            list.as_vector()?
                .iter()
                .map(|index| {
                    let n = finite(index)?;
                    (n >= 0.0 && n.fract() == 0.0).then_some(n as usize)
                })
                .collect()
        })
        .collect()
}

/// A 3x4 or 4x4 row-major matrix; a 3x4 matrix gets `[0, 0, 0, 1]` appended.
pub fn matrix(value: &Value) -> Option<[[f64; 4]; 4]> {
    let rows = value.as_vector()?;
    if rows.len() != 3 && rows.len() != 4 {
        return None;
    }
    let mut matrix = [[0.0, 0.0, 0.0, 0.0], [0.0; 4], [0.0; 4], [0.0, 0.0, 0.0, 1.0]];
    for (row, item) in matrix.iter_mut().zip(rows) {
        let n = numbers(item, 4, 4)?;
        row.copy_from_slice(&n);
    }
    Some(matrix)
}
