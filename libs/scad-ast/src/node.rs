//! # AST Nodes
//!
//! The parser's output: a [`Program`] whose body is a list of [`Node`]s.
//! Nodes own their children, so the AST is always a tree.
//!
//! ## Example
//!
//! ```rust
//! use scad_ast::{BooleanKind, BooleanOp, Node, Position, Program};
//!
//! let program = Program {
//!     body: vec![Node::BooleanOp(BooleanOp {
//!         op: BooleanKind::Union,
//!         children: Vec::new(),
//!         position: Position::new(1, 1),
//!     })],
//!     position: Position::start(),
//! };
//! assert_eq!(program.body[0].node_type(), "BooleanOp");
//! ```

use crate::args::{ExtrudeOp, Primitive, TransformOp};
use crate::position::Position;
use serde::{Deserialize, Serialize};

// =============================================================================
// PROGRAM
// =============================================================================

/// Root node: the ordered top-level statements of one source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub struct Program {
    pub body: Vec<Node>,
    pub position: Position,
}

impl Program {
    /// Counts every node in the tree (the root excluded).
    ///
    /// ```rust
    /// use scad_ast::{Position, Program};
    ///
    /// let empty = Program { body: Vec::new(), position: Position::start() };
    /// assert_eq!(empty.node_count(), 0);
    /// ```
    pub fn node_count(&self) -> usize {
        self.body.iter().map(Node::subtree_size).sum()
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A statement node. The discriminant is serialized as `nodeType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Node {
    PrimitiveCall(PrimitiveCall),
    Transform(Transform),
    BooleanOp(BooleanOp),
    Extrude(Extrude),
    SpecialVarAssign(SpecialVarAssign),
}

impl Node {
    /// Source position of the token that started this statement.
    pub fn position(&self) -> Position {
        match self {
            Self::PrimitiveCall(n) => n.position,
            Self::Transform(n) => n.position,
            Self::BooleanOp(n) => n.position,
            Self::Extrude(n) => n.position,
            Self::SpecialVarAssign(n) => n.position,
        }
    }

    /// Discriminant name, identical to the serialized `nodeType`.
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::PrimitiveCall(_) => "PrimitiveCall",
            Self::Transform(_) => "Transform",
            Self::BooleanOp(_) => "BooleanOp",
            Self::Extrude(_) => "Extrude",
            Self::SpecialVarAssign(_) => "SpecialVarAssign",
        }
    }

    /// Children in source order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Transform(n) => &n.children,
            Self::BooleanOp(n) => &n.children,
            Self::Extrude(n) => &n.children,
            Self::PrimitiveCall(_) | Self::SpecialVarAssign(_) => &[],
        }
    }

    fn subtree_size(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_size).sum::<usize>()
    }
}

/// `cube(10);`, `sphere(r = 5);`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveCall {
    pub primitive: Primitive,
    pub position: Position,
}

/// `translate([1, 0, 0]) cube(1);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub transform: TransformOp,
    pub children: Vec<Node>,
    pub position: Position,
}

/// `union`, `difference` or `intersection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanKind {
    Union,
    Difference,
    Intersection,
}

impl BooleanKind {
    /// Source name of the operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }
}

/// Boolean combination. The first child is the base operand for
/// `difference`/`intersection`; order must never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanOp {
    pub op: BooleanKind,
    pub children: Vec<Node>,
    pub position: Position,
}

/// `linear_extrude(...)` or `rotate_extrude(...)` over 2D children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrude {
    pub extrude: ExtrudeOp,
    pub children: Vec<Node>,
    pub position: Position,
}

/// The three assignable resolution variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialVar {
    #[serde(rename = "$fn")]
    Fn,
    #[serde(rename = "$fa")]
    Fa,
    #[serde(rename = "$fs")]
    Fs,
}

impl SpecialVar {
    /// Looks up an assignable special variable by its source name.
    ///
    /// ```rust
    /// use scad_ast::SpecialVar;
    ///
    /// assert_eq!(SpecialVar::from_name("$fn"), Some(SpecialVar::Fn));
    /// assert_eq!(SpecialVar::from_name("$t"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "$fn" => Some(Self::Fn),
            "$fa" => Some(Self::Fa),
            "$fs" => Some(Self::Fs),
            _ => None,
        }
    }

    /// Source name including the `$`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fn => "$fn",
            Self::Fa => "$fa",
            Self::Fs => "$fs",
        }
    }
}

/// Right-hand side of a special variable assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecialValue {
    Number(f64),
    Vector(Vec<f64>),
}

/// `$fn = 32;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialVarAssign {
    pub name: SpecialVar,
    pub value: SpecialValue,
    pub position: Position,
}
