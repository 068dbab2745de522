//! # Compile Pipeline
//!
//! `source → lex → parse → transpile`. Each stage runs to completion or
//! returns its error; the first failure aborts the pipeline.

use crate::error::CompileError;
use crate::options::TranspileOptions;
use crate::{transpile_with_diagnostics, Transpiled};

/// Compiles source text to builder program text.
///
/// ## Example
///
/// ```rust
/// use scad_transpiler::{compile, TranspileOptions};
///
/// let code = compile("difference() { cube(10); sphere(6); }", &TranspileOptions::default()).unwrap();
/// assert!(code.contains("Manifold.cube([10, 10, 10], false).subtract(Manifold.sphere(6, 19))"));
///
/// let err = compile("cube([10,10,10]", &TranspileOptions::default()).unwrap_err();
/// assert_eq!(err.kind().as_str(), "parse");
/// assert!(err.expected().iter().any(|e| e == "')'"));
/// ```
pub fn compile(source: &str, options: &TranspileOptions) -> Result<String, CompileError> {
    Ok(compile_with_diagnostics(source, options)?.code)
}

/// Like [`compile`], also returning the transpiler's diagnostics.
pub fn compile_with_diagnostics(source: &str, options: &TranspileOptions) -> Result<Transpiled, CompileError> {
    let program = scad_parser::parse(source)?;
    Ok(transpile_with_diagnostics(&program, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_each_stage_reports_its_kind() {
        let options = TranspileOptions::default();
        assert_eq!(compile("cube(1) @", &options).unwrap_err().kind(), ErrorKind::Lex);
        assert_eq!(compile("for (i = [0:3]) cube(i);", &options).unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(compile("linear_extrude(1) cube(1);", &options).unwrap_err().kind(), ErrorKind::Transpile);
    }

    #[test]
    fn test_default_fn_option_reaches_output() {
        let code = compile("sphere(5);", &TranspileOptions::with_default_fn(64)).unwrap();
        assert!(code.contains("Manifold.sphere(5, 64)"));
    }

    #[test]
    fn test_diagnostics_are_returned() {
        let result = compile_with_diagnostics("color(\"blue\") cube(1);", &TranspileOptions::default()).unwrap();
        assert_eq!(result.diagnostics.len(), 1);
    }
}
