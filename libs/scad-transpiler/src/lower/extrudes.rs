//! # Extrusion Lowering
//!
//! `linear_extrude` and `rotate_extrude` turn the 2D union of their children
//! into a `Manifold`.
//!
//! OpenSCAD twists clockwise for positive angles while the builder twists
//! counter-clockwise, so the twist is emitted negated.

use super::{wrong_dim, Dim, Expr, Lowerer};
use crate::context::ResolutionScope;
use crate::emit;
use crate::error::TranspileError;
use config::constants::approx_zero;
use scad_ast::{Extrude, ExtrudeOp, LinearExtrudeArgs, Position, RotateExtrudeArgs};

/// OpenSCAD's default `linear_extrude` height.
const DEFAULT_HEIGHT: f64 = 100.0;

/// OpenSCAD's default `rotate_extrude` angle.
const FULL_TURN: f64 = 360.0;

impl Lowerer<'_> {
    pub(super) fn extrude(&mut self, node: &Extrude, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        let name = node.extrude.name();
        let Some(profile) = self.children(&node.children, scope, name, node.position)? else {
            return Ok(None);
        };
        if profile.dim != Dim::Two {
            return Err(wrong_dim(name, node.position, Dim::Two, profile.dim));
        }

        let expr = match &node.extrude {
            ExtrudeOp::LinearExtrude(args) => self.linear_extrude(profile, args, scope, node.position)?,
            ExtrudeOp::RotateExtrude(args) => self.rotate_extrude(profile, args, scope, node.position)?,
        };
        Ok(Some(expr))
    }

    fn linear_extrude(
        &mut self,
        profile: Expr,
        args: &LinearExtrudeArgs,
        scope: &ResolutionScope,
        position: Position,
    ) -> Result<Expr, TranspileError> {
        let height = args.height.unwrap_or(DEFAULT_HEIGHT);
        if height <= 0.0 {
            return Err(TranspileError::at(
                "linear_extrude",
                position,
                format!("linear_extrude height must be greater than 0, found {}", emit::number(height)),
            ));
        }

        let scale = args.scale.map(|s| s.to_vec2()).unwrap_or([1.0, 1.0]);
        if scale.iter().any(|&s| s < 0.0) {
            return Err(TranspileError::at(
                "linear_extrude",
                position,
                format!("linear_extrude scale must not be negative, found {}", emit::vector(&scale)),
            ));
        }

        let twist = args.twist.unwrap_or(0.0);
        let slices = match args.slices {
            Some(slices) if slices > 0 => slices,
            _ if approx_zero(twist) => 0,
            _ => {
                let segments = self.revolve_segments(scope, &args.resolution, "linear_extrude", position)?;
                ((segments as f64 * twist.abs() / FULL_TURN).ceil() as u32).max(1)
            }
        };

        Ok(profile.call(
            "extrude",
            &format!(
                "{}, {slices}, {}, {}, {}",
                emit::number(height),
                emit::number(-twist),
                emit::vector(&scale),
                emit::boolean(args.center.unwrap_or(false))
            ),
        ))
    }

    fn rotate_extrude(
        &mut self,
        profile: Expr,
        args: &RotateExtrudeArgs,
        scope: &ResolutionScope,
        position: Position,
    ) -> Result<Expr, TranspileError> {
        let angle = args.angle.unwrap_or(FULL_TURN).clamp(-FULL_TURN, FULL_TURN);
        if approx_zero(angle) {
            return Err(TranspileError::at(
                "rotate_extrude",
                position,
                "rotate_extrude angle must not be 0",
            ));
        }
        let segments = self.revolve_segments(scope, &args.resolution, "rotate_extrude", position)?;
        Ok(profile.call("revolve", &format!("{segments}, {}", emit::number(angle))))
    }
}
