//! Extrusion argument mapping.

use super::shared;
use super::{ArgumentList, Reader, Signature};
use crate::error::ParseError;
use crate::grammar::{NUMBER, VECTOR};
use crate::lexer::TokenKind;
use scad_ast::{ExtrudeOp, ExtrudeScale, LinearExtrudeArgs, RotateExtrudeArgs, Value};

const LINEAR_EXTRUDE: Signature = Signature {
    positional: &["height", "center", "convexity", "twist", "slices", "scale"],
    named: &["height", "center", "convexity", "twist", "slices", "scale", "$fn", "$fa", "$fs"],
};

const ROTATE_EXTRUDE: Signature = Signature {
    positional: &["angle"],
    named: &["angle", "convexity", "$fn", "$fa", "$fs"],
};

/// Maps an extrusion call onto its typed arguments.
pub(crate) fn extrude(args: &ArgumentList) -> Result<ExtrudeOp, ParseError> {
    if args.keyword == TokenKind::RotateExtrude {
        let reader = Reader::new(args, &ROTATE_EXTRUDE)?;
        reader.count("convexity")?;
        return Ok(ExtrudeOp::RotateExtrude(RotateExtrudeArgs {
            angle: reader.number("angle")?,
            resolution: reader.resolution()?,
        }));
    }

    let reader = Reader::new(args, &LINEAR_EXTRUDE)?;
    reader.count("convexity")?;
    let scale = reader.get("scale", &[NUMBER, VECTOR], "a number or a 2-element vector", |v| match v {
        Value::Number(_) => shared::finite(v).map(ExtrudeScale::Uniform),
        _ => shared::vec2(v).map(ExtrudeScale::Xy),
    })?;

    Ok(ExtrudeOp::LinearExtrude(LinearExtrudeArgs {
        height: reader.number("height")?,
        center: reader.boolean("center")?,
        twist: reader.number("twist")?,
        slices: reader.count("slices")?,
        scale,
        resolution: reader.resolution()?,
    }))
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use scad_ast::{ExtrudeOp, ExtrudeScale, Node};

    fn extrude(source: &str) -> ExtrudeOp {
        match parse(source).unwrap().body.into_iter().next() {
            Some(Node::Extrude(e)) => e.extrude,
            other => panic!("Expected Extrude, got {other:?}"),
        }
    }

    #[test]
    fn test_linear_extrude_arguments() {
        match extrude("linear_extrude(height = 10, twist = 90, slices = 20, scale = [1, 0.5]) square(2);") {
            ExtrudeOp::LinearExtrude(args) => {
                assert_eq!(args.height, Some(10.0));
                assert_eq!(args.twist, Some(90.0));
                assert_eq!(args.slices, Some(20));
                assert_eq!(args.scale, Some(ExtrudeScale::Xy([1.0, 0.5])));
                assert_eq!(args.center, None);
            }
            other => panic!("Expected linear_extrude, got {other:?}"),
        }
    }

    #[test]
    fn test_linear_extrude_positional_height() {
        match extrude("linear_extrude(5) circle(1);") {
            ExtrudeOp::LinearExtrude(args) => assert_eq!(args.height, Some(5.0)),
            other => panic!("Expected linear_extrude, got {other:?}"),
        }
    }

    #[test]
    fn test_rotate_extrude_arguments() {
        match extrude("rotate_extrude(angle = 180, $fn = 40) translate([5, 0]) circle(1);") {
            ExtrudeOp::RotateExtrude(args) => {
                assert_eq!(args.angle, Some(180.0));
                assert_eq!(args.resolution.fn_, Some(40));
            }
            other => panic!("Expected rotate_extrude, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_extrude_argument() {
        let err = parse("linear_extrude(heigth = 3) square(1);").unwrap_err();
        assert!(err.to_string().contains("Unknown argument 'heigth' for linear_extrude"));
    }
}
