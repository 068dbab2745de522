//! Assembly of the generated program around the result expression.

use crate::lower::Helpers;

/// Scales a shape to a target bounding box; zero targets keep that axis.
const RESIZE_HELPER: &str = "function resize(shape, size) {
  const box = shape instanceof Manifold ? shape.boundingBox() : shape.bounds();
  const factors = size.map((target, i) => {
    const extent = box.max[i] - box.min[i];
    return target > 0 && extent > 0 ? target / extent : 1;
  });
  return shape.scale(factors);
}";

/// Builds the complete program text.
///
/// ```text
/// const { Manifold, CrossSection } = api;
/// <helpers>
///
/// const result = <expr>;
/// return result;
/// ```
pub(crate) fn program(expr: &str, helpers: Helpers) -> String {
    let mut bindings = vec!["Manifold", "CrossSection"];
    if helpers.mesh {
        bindings.push("Mesh");
    }

    let mut out = format!("const {{ {} }} = api;\n", bindings.join(", "));
    if helpers.resize {
        out.push('\n');
        out.push_str(RESIZE_HELPER);
        out.push('\n');
    }
    out.push_str("\nconst result = ");
    out.push_str(expr);
    out.push_str(";\nreturn result;\n");
    out
}
