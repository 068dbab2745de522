//! Transform argument mapping.
//!
//! Vectors may be written with two components; the missing z is filled with
//! the identity value of the transform (0 for offsets and axes, 1 for scale).

use super::shared;
use super::{ArgumentList, Reader, Signature};
use crate::error::ParseError;
use crate::grammar::{NUMBER, STRING, VECTOR};
use crate::lexer::TokenKind;
use scad_ast::{ColorSpec, Rotation, TransformOp, Value};

const TRANSLATE: Signature = Signature {
    positional: &["v"],
    named: &["v"],
};

const ROTATE: Signature = Signature {
    positional: &["a", "v"],
    named: &["a", "v"],
};

const SCALE: Signature = Signature {
    positional: &["v"],
    named: &["v"],
};

const MIRROR: Signature = Signature {
    positional: &["v"],
    named: &["v"],
};

const COLOR: Signature = Signature {
    positional: &["c", "alpha"],
    named: &["c", "alpha"],
};

const RESIZE: Signature = Signature {
    positional: &["newsize"],
    named: &["newsize"],
};

const MULTMATRIX: Signature = Signature {
    positional: &["m"],
    named: &["m"],
};

const OFFSET: Signature = Signature {
    positional: &["r"],
    named: &["r", "delta", "chamfer", "$fn", "$fa", "$fs"],
};

const HULL: Signature = Signature {
    positional: &[],
    named: &[],
};

const MINKOWSKI: Signature = Signature {
    positional: &["convexity"],
    named: &["convexity"],
};

const VECTOR_2_OR_3: &str = "a 2- or 3-element vector";

/// Maps a transform call onto its typed arguments.
pub(crate) fn transform(args: &ArgumentList) -> Result<TransformOp, ParseError> {
    let op = match args.keyword {
        TokenKind::Translate => {
            let reader = Reader::new(args, &TRANSLATE)?;
            let v = reader.get("v", &[VECTOR], VECTOR_2_OR_3, |v| shared::vec3_padded(v, 0.0))?;
            TransformOp::Translate { v: v.unwrap_or([0.0; 3]) }
        }
        TokenKind::Rotate => TransformOp::Rotate {
            rotation: rotation(&Reader::new(args, &ROTATE)?)?,
        },
        TokenKind::Scale => {
            let reader = Reader::new(args, &SCALE)?;
            let v = reader.get("v", &[NUMBER, VECTOR], "a number or a 2- or 3-element vector", |v| {
                shared::scalar_or_vec3(v, 1.0)
            })?;
            TransformOp::Scale { v: v.unwrap_or([1.0; 3]) }
        }
        TokenKind::Mirror => {
            let reader = Reader::new(args, &MIRROR)?;
            let v = reader.get("v", &[VECTOR], VECTOR_2_OR_3, |v| shared::vec3_padded(v, 0.0))?;
            TransformOp::Mirror { v: v.unwrap_or([1.0, 0.0, 0.0]) }
        }
        TokenKind::Color => color(&Reader::new(args, &COLOR)?)?,
        TokenKind::Resize => {
            let reader = Reader::new(args, &RESIZE)?;
            let newsize = reader.get("newsize", &[VECTOR], VECTOR_2_OR_3, |v| shared::vec3_padded(v, 0.0))?;
            let Some(newsize) = newsize else {
                return Err(reader.call_error(&[VECTOR], "resize requires newsize"));
            };
            TransformOp::Resize { newsize }
        }
        TokenKind::Multmatrix => {
            let reader = Reader::new(args, &MULTMATRIX)?;
            let matrix = reader.get("m", &[VECTOR], "a 3x4 or 4x4 matrix", shared::matrix)?;
            let Some(matrix) = matrix else {
                return Err(reader.call_error(&[VECTOR], "multmatrix requires a matrix m"));
            };
            TransformOp::Multmatrix { matrix }
        }
        TokenKind::Offset => offset(&Reader::new(args, &OFFSET)?)?,
        TokenKind::Hull => {
            Reader::new(args, &HULL)?;
            TransformOp::Hull
        }
        _ => {
            Reader::new(args, &MINKOWSKI)?.count("convexity")?;
            TransformOp::Minkowski
        }
    };
    Ok(op)
}

/// Angle argument of `rotate`.
enum Angle {
    Scalar(f64),
    Euler([f64; 3]),
}

/// `rotate(a)`, `rotate([x, y, z])` or `rotate(a, v)`.
fn rotation(reader: &Reader) -> Result<Rotation, ParseError> {
    let angle = reader.get("a", &[NUMBER, VECTOR], "a number or a 2- or 3-element vector", |v| match v {
        Value::Number(_) => shared::finite(v).map(Angle::Scalar),
        _ => shared::vec3_padded(v, 0.0).map(Angle::Euler),
    })?;
    let axis = reader.get("v", &[VECTOR], "a 3-element vector", shared::vec3)?;

    match (angle, axis) {
        (Some(Angle::Scalar(angle)), Some(axis)) => Ok(Rotation::AxisAngle { angle, axis }),
        (_, Some(_)) => Err(reader.call_error(&[NUMBER], "rotate with an axis v requires a single angle a")),
        (Some(Angle::Scalar(angle)), None) => Ok(Rotation::Euler {
            angles: [0.0, 0.0, angle],
        }),
        (Some(Angle::Euler(angles)), None) => Ok(Rotation::Euler { angles }),
        (None, None) => Ok(Rotation::Euler { angles: [0.0; 3] }),
    }
}

/// `color("red")`, `color([1, 0, 0])`, `color(c, alpha)`.
fn color(reader: &Reader) -> Result<TransformOp, ParseError> {
    let color = reader.get("c", &[STRING, VECTOR], "a color name or an [r, g, b(, a)] vector", |v| {
        match v {
            Value::String(name) => Some(ColorSpec::Named(name.clone())),
            _ => shared::rgba(v).map(ColorSpec::Rgba),
        }
    })?;
    let Some(color) = color else {
        return Err(reader.call_error(&[STRING, VECTOR], "color requires a color name or an [r, g, b] vector"));
    };
    Ok(TransformOp::Color {
        color,
        alpha: reader.number("alpha")?,
    })
}

/// `offset(r)` or `offset(delta, chamfer)`; `r` and `delta` are exclusive.
fn offset(reader: &Reader) -> Result<TransformOp, ParseError> {
    let r = reader.number("r")?;
    let delta = reader.number("delta")?;
    if r.is_some() && delta.is_some() {
        return Err(reader.call_error(&[], "offset takes either r or delta, not both"));
    }
    Ok(TransformOp::Offset {
        r,
        delta,
        chamfer: reader.boolean("chamfer")?,
        resolution: reader.resolution()?,
    })
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use scad_ast::{ColorSpec, Node, Rotation, TransformOp};

    fn transform(source: &str) -> TransformOp {
        match parse(source).unwrap().body.into_iter().next() {
            Some(Node::Transform(t)) => t.transform,
            other => panic!("Expected Transform, got {other:?}"),
        }
    }

    fn parse_err(source: &str) -> crate::ParseError {
        parse(source).unwrap_err().as_parse().cloned().unwrap()
    }

    #[test]
    fn test_translate_pads_z() {
        assert_eq!(transform("translate([1, 2]) cube(1);"), TransformOp::Translate { v: [1.0, 2.0, 0.0] });
    }

    #[test]
    fn test_rotate_scalar_is_about_z() {
        assert_eq!(
            transform("rotate(45) cube(1);"),
            TransformOp::Rotate { rotation: Rotation::Euler { angles: [0.0, 0.0, 45.0] } }
        );
    }

    #[test]
    fn test_rotate_axis_angle() {
        assert_eq!(
            transform("rotate(a = 30, v = [1, 1, 0]) cube(1);"),
            TransformOp::Rotate {
                rotation: Rotation::AxisAngle { angle: 30.0, axis: [1.0, 1.0, 0.0] }
            }
        );
    }

    #[test]
    fn test_rotate_vector_with_axis_is_rejected() {
        let err = parse_err("rotate([0, 0, 30], [1, 0, 0]) cube(1);");
        assert!(err.message.contains("single angle"));
    }

    #[test]
    fn test_uniform_scale() {
        assert_eq!(transform("scale(2) cube(1);"), TransformOp::Scale { v: [2.0; 3] });
        assert_eq!(transform("scale([2, 3]) cube(1);"), TransformOp::Scale { v: [2.0, 3.0, 1.0] });
    }

    #[test]
    fn test_color_forms() {
        assert_eq!(
            transform("color(\"red\", 0.5) cube(1);"),
            TransformOp::Color { color: ColorSpec::Named("red".into()), alpha: Some(0.5) }
        );
        assert_eq!(
            transform("color([1, 0, 0]) cube(1);"),
            TransformOp::Color { color: ColorSpec::Rgba([1.0, 0.0, 0.0, 1.0]), alpha: None }
        );
    }

    #[test]
    fn test_multmatrix_requires_matrix() {
        let err = parse_err("multmatrix() cube(1);");
        assert_eq!(err.message, "multmatrix requires a matrix m");
        assert_eq!(err.found, "multmatrix");
    }

    #[test]
    fn test_offset_exclusive_arguments() {
        let err = parse_err("offset(r = 1, delta = 2) square(1);");
        assert!(err.message.contains("either r or delta"));
    }

    #[test]
    fn test_offset_keeps_resolution() {
        match transform("offset(r = 2, $fn = 24) square(1);") {
            TransformOp::Offset { r, resolution, .. } => {
                assert_eq!(r, Some(2.0));
                assert_eq!(resolution.fn_, Some(24));
            }
            other => panic!("Expected offset, got {other:?}"),
        }
    }

    #[test]
    fn test_minkowski_accepts_convexity() {
        assert_eq!(transform("minkowski(convexity = 2) { cube(1); sphere(1); }"), TransformOp::Minkowski);
    }
}
