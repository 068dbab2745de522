//! # SCAD Transpiler Crate
//!
//! Lowers a parsed [`Program`] to JavaScript that drives the manifold-3d
//! builder API (`Manifold`, `CrossSection`, `Mesh`), and wires the whole
//! `source → tokens → AST → code` pipeline together in [`compile`].
//!
//! ## Architecture
//!
//! ```text
//! &str → scad_parser::parse → Program → lower (depth-first) → output::program → String
//! ```
//!
//! ## Design Principles
//!
//! - **Pure**: identical input and options give byte-identical output; no I/O
//! - **Fail Fast**: the first error aborts with full positional context
//! - **Dimension Tracking**: 2D and 3D operands are never mixed silently
//! - **Block-Scoped Resolution**: `$fn`/`$fa`/`$fs` assignments affect only
//!   later statements of their block
//!
//! ## Example
//!
//! ```rust
//! use scad_transpiler::{compile, TranspileOptions};
//!
//! let code = compile("translate([0, 0, 5]) cube(10);", &TranspileOptions::default()).unwrap();
//! assert_eq!(
//!     code,
//!     "const { Manifold, CrossSection } = api;\n\nconst result = Manifold.cube([10, 10, 10], false).translate([0, 0, 5]);\nreturn result;\n"
//! );
//! ```

mod compile;
mod context;
pub mod diagnostic;
pub mod emit;
pub mod error;
mod lower;
mod options;
mod output;

pub use compile::{compile, compile_with_diagnostics};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{CompileError, ErrorKind, TranspileError};
pub use options::TranspileOptions;

use scad_ast::Program;
use serde::{Deserialize, Serialize};

/// Generated program text together with non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transpiled {
    /// Program text for the builder API.
    pub code: String,
    /// Warnings and notes, in walk order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Transpiles a program to builder code.
pub fn transpile(program: &Program, options: &TranspileOptions) -> Result<String, TranspileError> {
    Ok(transpile_with_diagnostics(program, options)?.code)
}

/// Transpiles a program, also returning the diagnostics collected on the way.
pub fn transpile_with_diagnostics(program: &Program, options: &TranspileOptions) -> Result<Transpiled, TranspileError> {
    let lowered = lower::Lowerer::new(options).program(program)?;
    Ok(Transpiled {
        code: output::program(&lowered.expr, lowered.helpers),
        diagnostics: lowered.diagnostics,
    })
}
