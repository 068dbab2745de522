//! # Transform Lowering
//!
//! Transforms wrap the implicit union of their children in a method call.
//! 2D children get the planar form of each call (`[x, y]` vectors, a single
//! z angle, 3x3 matrices).
//!
//! ## Example
//!
//! ```text
//! translate([10, 0, 0]) cube(5);
//! → Manifold.cube([5, 5, 5], false).translate([10, 0, 0])
//! ```

use super::{common_dim, wrong_dim, Dim, Expr, Lowerer};
use crate::context::ResolutionScope;
use crate::diagnostic::Diagnostic;
use crate::emit;
use crate::error::TranspileError;
use config::constants::approx_zero;
use glam::{DMat3, DMat4, DVec3};
use scad_ast::{Position, Resolution, Rotation, Transform, TransformOp};

impl Lowerer<'_> {
    pub(super) fn transform(&mut self, node: &Transform, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        let name = node.transform.name();
        let position = node.position;

        match &node.transform {
            TransformOp::Hull => return self.hull(node, scope),
            TransformOp::Minkowski => return self.minkowski(node, scope),
            _ => {}
        }

        let Some(child) = self.children(&node.children, scope, name, position)? else {
            return Ok(None);
        };

        let dim = child.dim;
        let expr = match &node.transform {
            TransformOp::Translate { v } => child.call("translate", &vector_for(v, dim)),
            TransformOp::Rotate { rotation } => self.rotate(child, rotation, position)?,
            TransformOp::Scale { v } => child.call("scale", &vector_for(v, dim)),
            TransformOp::Mirror { v } => mirror(child, v),
            TransformOp::Color { .. } => {
                self.warn(
                    Diagnostic::warning("color() has no effect on the generated geometry", position)
                        .with_hint("the builder output carries no color; the children are kept as they are"),
                );
                child
            }
            TransformOp::Resize { newsize } => self.resize(child, newsize, position)?,
            TransformOp::Multmatrix { matrix } => multmatrix(child, matrix),
            TransformOp::Offset { r, delta, chamfer, resolution } => {
                let args = OffsetArgs { r: *r, delta: *delta, chamfer: chamfer.unwrap_or(false) };
                self.offset(child, args, resolution, scope, position)?
            }
            TransformOp::Hull | TransformOp::Minkowski => child,
        };
        Ok(Some(expr))
    }

    fn rotate(&mut self, child: Expr, rotation: &Rotation, position: Position) -> Result<Expr, TranspileError> {
        match (rotation, child.dim) {
            (Rotation::Euler { angles }, Dim::Three) => Ok(child.call("rotate", &emit::vector(angles))),
            (Rotation::Euler { angles }, Dim::Two) => {
                if !approx_zero(angles[0]) || !approx_zero(angles[1]) {
                    self.warn(Diagnostic::warning(
                        "Rotation about x or y is ignored for 2D geometry; only the z angle applies",
                        position,
                    ));
                }
                Ok(child.call("rotate", &emit::number(angles[2])))
            }
            (Rotation::AxisAngle { angle, axis }, dim) => {
                let axis = DVec3::from_array(*axis);
                if approx_zero(axis.length()) {
                    return Err(TranspileError::at("rotate", position, "rotate axis v must not be [0, 0, 0]"));
                }
                let axis = axis.normalize();
                match dim {
                    Dim::Three => {
                        let m = DMat4::from_axis_angle(axis, angle.to_radians());
                        Ok(child.call("transform", &emit::vector(&m.to_cols_array())))
                    }
                    Dim::Two if approx_zero(axis.x) && approx_zero(axis.y) => {
                        Ok(child.call("rotate", &emit::number(angle * axis.z.signum())))
                    }
                    Dim::Two => Err(TranspileError::at(
                        "rotate",
                        position,
                        "2D geometry can only be rotated about the z axis",
                    )),
                }
            }
        }
    }

    fn resize(&mut self, child: Expr, newsize: &[f64; 3], position: Position) -> Result<Expr, TranspileError> {
        if newsize.iter().any(|&s| s < 0.0) {
            return Err(TranspileError::at(
                "resize",
                position,
                format!("resize newsize must not be negative, found {}", emit::vector(newsize)),
            ));
        }
        self.helpers.resize = true;
        let size = vector_for(newsize, child.dim);
        Ok(Expr::new(format!("resize({}, {size})", child.code), child.dim))
    }

    fn offset(
        &mut self,
        child: Expr,
        args: OffsetArgs,
        resolution: &Resolution,
        scope: &ResolutionScope,
        position: Position,
    ) -> Result<Expr, TranspileError> {
        if child.dim != Dim::Two {
            return Err(wrong_dim("offset", position, Dim::Two, child.dim));
        }
        let call = match args.r {
            Some(r) => {
                let segments = self.segments(scope, resolution, r.abs(), "offset", position)?;
                format!("{}, \"Round\", 2, {segments}", emit::number(r))
            }
            None => {
                let join = if args.chamfer { "Square" } else { "Miter" };
                format!("{}, \"{join}\", 2", emit::number(args.delta.unwrap_or(1.0)))
            }
        };
        Ok(child.call("offset", &call))
    }

    /// Convex hull of all children together.
    fn hull(&mut self, node: &Transform, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        let mut exprs: Vec<Expr> = self.block(&node.children, scope)?.into_iter().flatten().collect();
        let Some(dim) = common_dim(&exprs, "hull", node.position)? else {
            return Ok(None);
        };
        if exprs.len() == 1 {
            return Ok(exprs.pop().map(|e| e.call("hull", "")));
        }
        let codes: Vec<String> = exprs.into_iter().map(|e| e.code).collect();
        Ok(Some(Expr::new(format!("{}.hull({})", dim.class(), emit::list(&codes)), dim)))
    }

    /// Minkowski sum folded left over the children in source order.
    fn minkowski(&mut self, node: &Transform, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        let exprs: Vec<Expr> = self.block(&node.children, scope)?.into_iter().flatten().collect();
        match common_dim(&exprs, "minkowski", node.position)? {
            None => return Ok(None),
            Some(Dim::Two) => return Err(wrong_dim("minkowski", node.position, Dim::Three, Dim::Two)),
            Some(Dim::Three) => {}
        }
        let mut operands = exprs.into_iter();
        let first = operands.next();
        Ok(first.map(|base| operands.fold(base, |acc, e| acc.call("minkowskiSum", &e.code))))
    }
}

#[derive(Debug, Clone, Copy)]
struct OffsetArgs {
    r: Option<f64>,
    delta: Option<f64>,
    chamfer: bool,
}

/// `[x, y, z]` for 3D, `[x, y]` for 2D.
fn vector_for(v: &[f64; 3], dim: Dim) -> String {
    match dim {
        Dim::Three => emit::vector(v),
        Dim::Two => emit::vector(&v[..2]),
    }
}

/// Mirrors across the plane with normal `v`; a zero normal leaves the child unchanged.
fn mirror(child: Expr, v: &[f64; 3]) -> Expr {
    let significant = match child.dim {
        Dim::Three => &v[..],
        Dim::Two => &v[..2],
    };
    if significant.iter().all(|&c| approx_zero(c)) {
        return child;
    }
    let normal = vector_for(v, child.dim);
    child.call("mirror", &normal)
}

/// Row-major source matrix to a column-major builder matrix.
fn multmatrix(child: Expr, matrix: &[[f64; 4]; 4]) -> Expr {
    let m = DMat4::from_cols_array_2d(matrix).transpose();
    match child.dim {
        Dim::Three => child.call("transform", &emit::vector(&m.to_cols_array())),
        Dim::Two => {
            // Affine 2D part: x/y columns plus the translation column.
            let planar = DMat3::from_cols(
                DVec3::new(m.x_axis.x, m.x_axis.y, 0.0),
                DVec3::new(m.y_axis.x, m.y_axis.y, 0.0),
                DVec3::new(m.w_axis.x, m.w_axis.y, 1.0),
            );
            child.call("transform", &emit::vector(&planar.to_cols_array()))
        }
    }
}
