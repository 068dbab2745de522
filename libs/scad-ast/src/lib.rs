//! # SCAD AST Crate
//!
//! Shared data model for the SCAD subset compiler: source positions,
//! literal values, generic argument records, typed argument shapes and the
//! AST node sum type. Consumed by both the parser and the transpiler.
//!
//! ## Architecture
//!
//! ```text
//! scad-parser (Tokens → Program) → scad-ast → scad-transpiler (Program → builder code)
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: one enum variant per node kind, matched exhaustively by consumers
//! - **Source Mapping**: every node carries a 1-based `Position`
//! - **No Evaluation**: values are literals; there is nothing to evaluate
//! - **Serializable**: every type derives serde so hosts can ship ASTs as JSON

pub mod args;
pub mod node;
pub mod position;
pub mod value;

pub use args::*;
pub use node::*;
pub use position::Position;
pub use value::{Arguments, Value};
