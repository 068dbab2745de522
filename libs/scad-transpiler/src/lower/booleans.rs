//! # Boolean Lowering
//!
//! Operands are combined strictly in source order. For `difference` the
//! first geometric child is the base and every later child is subtracted
//! from it; for `intersection` the operands are intersected left to right.

use super::{common_dim, Expr, Lowerer};
use crate::context::ResolutionScope;
use crate::error::TranspileError;
use scad_ast::{BooleanKind, BooleanOp};

impl Lowerer<'_> {
    pub(super) fn boolean(&mut self, node: &BooleanOp, scope: &ResolutionScope) -> Result<Option<Expr>, TranspileError> {
        let name = node.op.name();
        let items = self.block(&node.children, scope)?;

        match node.op {
            BooleanKind::Union => self.union(items, name, node.position),
            BooleanKind::Difference => {
                let mut items = items.into_iter();
                // An empty base leaves nothing to subtract from.
                let Some(Some(base)) = items.next() else {
                    return Ok(None);
                };
                let mut operands = vec![base];
                operands.extend(items.flatten());
                common_dim(&operands, name, node.position)?;
                Ok(fold(operands, "subtract"))
            }
            BooleanKind::Intersection => {
                if items.iter().any(Option::is_none) {
                    // Intersecting with nothing yields nothing.
                    return Ok(None);
                }
                let operands: Vec<Expr> = items.into_iter().flatten().collect();
                common_dim(&operands, name, node.position)?;
                Ok(fold(operands, "intersect"))
            }
        }
    }
}

/// `a.method(b).method(c)...`, or `None` without operands.
fn fold(operands: Vec<Expr>, method: &str) -> Option<Expr> {
    let mut operands = operands.into_iter();
    let base = operands.next()?;
    Some(operands.fold(base, |acc, operand| acc.call(method, &operand.code)))
}

#[cfg(test)]
mod tests {
    use crate::{transpile_with_diagnostics, TranspileError, TranspileOptions};

    fn expr(source: &str) -> String {
        let program = scad_parser::parse(source).unwrap();
        let code = transpile_with_diagnostics(&program, &TranspileOptions::default()).unwrap().code;
        let start = code.find("const result = ").unwrap() + "const result = ".len();
        let end = code.rfind(";\nreturn result;").unwrap();
        code[start..end].to_string()
    }

    fn error(source: &str) -> TranspileError {
        let program = scad_parser::parse(source).unwrap();
        transpile_with_diagnostics(&program, &TranspileOptions::default()).unwrap_err()
    }

    #[test]
    fn test_difference_subtracts_in_source_order() {
        assert_eq!(
            expr("difference() { cube(10); sphere(1, $fn = 16); cylinder(h = 2, r = 1, $fn = 16); }"),
            "Manifold.cube([10, 10, 10], false).subtract(Manifold.sphere(1, 16)).subtract(Manifold.cylinder(2, 1, 1, 16, false))"
        );
    }

    #[test]
    fn test_difference_with_empty_base_is_empty() {
        assert_eq!(expr("difference() { union() {} cube(1); } sphere(1);"), "Manifold.sphere(1, 16)");
    }

    #[test]
    fn test_difference_skips_empty_subtrahends() {
        assert_eq!(
            expr("difference() { cube(2); union() {} }"),
            "Manifold.cube([2, 2, 2], false)"
        );
    }

    #[test]
    fn test_intersection_chain() {
        assert_eq!(
            expr("intersection() { cube(2); sphere(1, $fn = 16); }"),
            "Manifold.cube([2, 2, 2], false).intersect(Manifold.sphere(1, 16))"
        );
    }

    #[test]
    fn test_intersection_with_empty_operand_is_empty() {
        assert_eq!(expr("intersection() { cube(2); union() {} } cube(1);"), "Manifold.cube([1, 1, 1], false)");
    }

    #[test]
    fn test_union_arguments_are_ignored() {
        assert_eq!(
            expr("union(convexity = 3) { cube(1); cube(2); }"),
            "Manifold.union([\n  Manifold.cube([1, 1, 1], false),\n  Manifold.cube([2, 2, 2], false)\n])"
        );
    }

    #[test]
    fn test_boolean_dimension_mismatch() {
        let err = error("difference() { cube(1); square(1); }");
        assert_eq!(err.message, "Cannot combine 3D and 2D geometry in difference");
        assert_eq!(err.construct.as_deref(), Some("difference"));
    }
}
