//! # AST Lowering
//!
//! Depth-first walk from [`Program`] to builder expressions.
//!
//! ## Module Structure
//!
//! - `primitives` - cube, sphere, cylinder, polyhedron, square, circle, polygon
//! - `transforms` - translate, rotate, scale, mirror, multmatrix, resize, offset, color, hull, minkowski
//! - `booleans` - union, difference, intersection
//! - `extrudes` - linear and rotational extrusion
//!
//! ## Dimensions
//!
//! Every lowered subtree is a `CrossSection` (2D), a `Manifold` (3D) or
//! empty. Empty subtrees (`union() {}`, a transform without children) are
//! dropped from their parent; mixing 2D and 3D operands is an error.

mod booleans;
mod extrudes;
mod primitives;
mod transforms;

use crate::context::{ResolutionScope, Site};
use crate::diagnostic::Diagnostic;
use crate::emit;
use crate::error::TranspileError;
use crate::options::TranspileOptions;
use config::constants::MAX_NESTING_DEPTH;
use scad_ast::{Node, Position, Program, Resolution};

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Geometry kind of a lowered subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dim {
    Two,
    Three,
}

impl Dim {
    /// Builder class holding geometry of this kind.
    pub(crate) const fn class(self) -> &'static str {
        match self {
            Self::Two => "CrossSection",
            Self::Three => "Manifold",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Two => "2D",
            Self::Three => "3D",
        }
    }
}

/// Builder expression of a non-empty subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expr {
    pub code: String,
    pub dim: Dim,
}

impl Expr {
    pub(crate) fn new(code: impl Into<String>, dim: Dim) -> Self {
        Self { code: code.into(), dim }
    }

    /// `self.method(args)`, keeping the dimension.
    pub(crate) fn call(self, method: &str, args: &str) -> Self {
        Self {
            code: format!("{}.{method}({args})", self.code),
            dim: self.dim,
        }
    }
}

/// Helper functions the generated program needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Helpers {
    pub resize: bool,
    pub mesh: bool,
}

// =============================================================================
// LOWERER
// =============================================================================

/// Output of lowering a whole program.
pub(crate) struct Lowered {
    pub expr: String,
    pub helpers: Helpers,
    pub diagnostics: Vec<Diagnostic>,
}

pub(crate) struct Lowerer<'o> {
    options: &'o TranspileOptions,
    diagnostics: Vec<Diagnostic>,
    helpers: Helpers,
    depth: usize,
}

impl<'o> Lowerer<'o> {
    pub(crate) fn new(options: &'o TranspileOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
            helpers: Helpers::default(),
            depth: 0,
        }
    }

    /// Lowers the top-level statements as an implicit union.
    pub(crate) fn program(mut self, program: &Program) -> Result<Lowered, TranspileError> {
        let items = self.block(&program.body, &ResolutionScope::default())?;
        let expr = match self.union(items, "program", program.position)? {
            Some(expr) => {
                if expr.dim == Dim::Two {
                    self.diagnostics.push(
                        Diagnostic::warning("The program produces 2D geometry", program.position)
                            .with_hint("wrap it in linear_extrude() to get a solid"),
                    );
                }
                expr.code
            }
            None => {
                self.diagnostics
                    .push(Diagnostic::info("The program produces no geometry", program.position));
                "Manifold.union([])".to_string()
            }
        };

        Ok(Lowered {
            expr,
            helpers: self.helpers,
            diagnostics: self.diagnostics,
        })
    }

    /// Lowers a statement list with its own copy of the resolution scope.
    ///
    /// Returns one entry per geometric statement, `None` for empty subtrees.
    fn block(&mut self, nodes: &[Node], scope: &ResolutionScope) -> Result<Vec<Option<Expr>>, TranspileError> {
        let mut scope = *scope;
        let mut items = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::SpecialVarAssign(assign) => scope.assign(assign)?,
                other => items.push(self.node(other, &scope)?),
            }
        }
        Ok(items)
    }

    fn node(&mut self, node: &Node, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(TranspileError::at(
                node.node_type(),
                node.position(),
                format!("Nesting depth exceeds the limit of {MAX_NESTING_DEPTH}"),
            ));
        }

        self.depth += 1;
        let lowered = match node {
            Node::PrimitiveCall(call) => self.primitive(call, scope).map(Some),
            Node::Transform(transform) => self.transform(transform, scope),
            Node::BooleanOp(op) => self.boolean(op, scope),
            Node::Extrude(extrude) => self.extrude(extrude, scope),
            Node::SpecialVarAssign(_) => Ok(None),
        };
        self.depth -= 1;
        lowered
    }

    /// Children of a node, lowered as an implicit union.
    fn children(
        &mut self,
        children: &[Node],
        scope: &ResolutionScope,
        construct: &str,
        position: Position,
    ) -> Result<Option<Expr>, TranspileError> {
        let items = self.block(children, scope)?;
        self.union(items, construct, position)
    }

    /// `Class.union([...])` over the non-empty items.
    fn union(&mut self, items: Vec<Option<Expr>>, construct: &str, position: Position) -> Result<Option<Expr>, TranspileError> {
        let mut exprs: Vec<Expr> = items.into_iter().flatten().collect();
        let Some(dim) = common_dim(&exprs, construct, position)? else {
            return Ok(None);
        };
        if exprs.len() == 1 {
            return Ok(exprs.pop());
        }
        let codes: Vec<String> = exprs.into_iter().map(|e| e.code).collect();
        Ok(Some(Expr::new(format!("{}.union({})", dim.class(), emit::list(&codes)), dim)))
    }

    fn segments(
        &mut self,
        scope: &ResolutionScope,
        local: &Resolution,
        radius: f64,
        construct: &str,
        position: Position,
    ) -> Result<u32, TranspileError> {
        let site = Site { construct, position };
        scope.segments(local, radius, self.options, site, &mut self.diagnostics)
    }

    fn revolve_segments(
        &mut self,
        scope: &ResolutionScope,
        local: &Resolution,
        construct: &str,
        position: Position,
    ) -> Result<u32, TranspileError> {
        let site = Site { construct, position };
        scope.revolve_segments(local, self.options, site, &mut self.diagnostics)
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Shared dimension of a set of operands, `None` when there are none.
fn common_dim(exprs: &[Expr], construct: &str, position: Position) -> Result<Option<Dim>, TranspileError> {
    let Some(first) = exprs.first() else {
        return Ok(None);
    };
    match exprs.iter().find(|e| e.dim != first.dim) {
        Some(other) => Err(TranspileError::at(
            construct,
            position,
            format!(
                "Cannot combine {} and {} geometry in {construct}",
                first.dim.label(),
                other.dim.label()
            ),
        )),
        None => Ok(Some(first.dim)),
    }
}

/// Error for a node whose children have the wrong dimension.
fn wrong_dim(construct: &str, position: Position, wanted: Dim, found: Dim) -> TranspileError {
    TranspileError::at(
        construct,
        position,
        format!(
            "{construct} requires {} children, found {} geometry",
            wanted.label(),
            found.label()
        ),
    )
}
