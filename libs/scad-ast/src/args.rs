//! Typed argument shapes for every supported construct.
//!
//! Each shape is produced from a generic [`crate::Arguments`] record by the
//! parser. Keys the source did not supply stay `None`: defaults are applied
//! by whoever consumes the AST. Diameters never appear here; `d`, `d1` and
//! `d2` are converted to radii while mapping.

use serde::{Deserialize, Serialize};

// =============================================================================
// SHARED
// =============================================================================

/// Per-call resolution overrides (`$fn`, `$fa`, `$fs`).
///
/// # Examples
/// ```
/// use scad_ast::Resolution;
///
/// let res = Resolution { fn_: Some(64), ..Resolution::default() };
/// assert!(!res.is_empty());
/// assert!(Resolution::default().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// `$fn`: exact fragment count.
    #[serde(rename = "$fn", skip_serializing_if = "Option::is_none", default)]
    pub fn_: Option<u32>,
    /// `$fa`: minimum fragment angle in degrees.
    #[serde(rename = "$fa", skip_serializing_if = "Option::is_none", default)]
    pub fa: Option<f64>,
    /// `$fs`: minimum fragment size.
    #[serde(rename = "$fs", skip_serializing_if = "Option::is_none", default)]
    pub fs: Option<f64>,
}

impl Resolution {
    /// Returns true when no override was supplied.
    pub fn is_empty(&self) -> bool {
        self.fn_.is_none() && self.fa.is_none() && self.fs.is_none()
    }
}

/// Size specification for a cube.
///
/// # Examples
/// ```
/// use scad_ast::CubeSize;
///
/// assert_eq!(CubeSize::Scalar(10.0).to_vec3(), [10.0, 10.0, 10.0]);
/// assert_eq!(CubeSize::Vector([1.0, 2.0, 3.0]).to_vec3(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CubeSize {
    /// `cube(10);` applies to all dimensions.
    Scalar(f64),
    /// `cube([1, 2, 3]);`
    Vector([f64; 3]),
}

impl CubeSize {
    /// Converts the size to a 3D vector, replicating scalars.
    pub fn to_vec3(&self) -> [f64; 3] {
        match self {
            CubeSize::Scalar(s) => [*s, *s, *s],
            CubeSize::Vector(v) => *v,
        }
    }
}

/// Size specification for a square.
///
/// # Examples
/// ```
/// use scad_ast::SquareSize;
///
/// assert_eq!(SquareSize::Scalar(4.0).to_vec2(), [4.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SquareSize {
    /// A scalar size (applies to both dimensions).
    Scalar(f64),
    /// A vector size (x, y).
    Vector([f64; 2]),
}

impl SquareSize {
    /// Converts the square size to a 2D vector.
    pub fn to_vec2(&self) -> [f64; 2] {
        match self {
            SquareSize::Scalar(s) => [*s, *s],
            SquareSize::Vector(v) => *v,
        }
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// `cube(size, center)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<CubeSize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<bool>,
}

/// `sphere(r | d)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SphereArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub r: Option<f64>,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// `cylinder(h, r1, r2, center)` with `r`/`d`/`d1`/`d2` alternatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CylinderArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub r1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub r2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<bool>,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// `polyhedron(points, faces)`; `triangles` is accepted for `faces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyhedronArgs {
    pub points: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

/// `square(size, center)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<SquareSize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<bool>,
}

/// `circle(r | d)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub r: Option<f64>,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// `polygon(points, paths)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonArgs {
    pub points: Vec<[f64; 2]>,
    /// Index paths; `None` means one implicit path over all points.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paths: Option<Vec<Vec<usize>>>,
}

/// `text(text, size, font, halign, valign)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub halign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub valign: Option<String>,
}

/// A primitive together with its typed arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum Primitive {
    Cube(CubeArgs),
    Sphere(SphereArgs),
    Cylinder(CylinderArgs),
    Polyhedron(PolyhedronArgs),
    Square(SquareArgs),
    Circle(CircleArgs),
    Polygon(PolygonArgs),
    Text(TextArgs),
}

impl Primitive {
    /// Source name of the primitive.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cube(_) => "cube",
            Self::Sphere(_) => "sphere",
            Self::Cylinder(_) => "cylinder",
            Self::Polyhedron(_) => "polyhedron",
            Self::Square(_) => "square",
            Self::Circle(_) => "circle",
            Self::Polygon(_) => "polygon",
            Self::Text(_) => "text",
        }
    }

    /// True for primitives that produce planar (2D) geometry.
    pub const fn is_2d(&self) -> bool {
        matches!(self, Self::Square(_) | Self::Circle(_) | Self::Polygon(_) | Self::Text(_))
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Rotation forms accepted by `rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Rotation {
    /// `rotate([x, y, z])` or `rotate(a)` (about Z), degrees.
    Euler { angles: [f64; 3] },
    /// `rotate(a = deg, v = [x, y, z])`
    AxisAngle { angle: f64, axis: [f64; 3] },
}

/// Colour given to `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `color([r, g, b])` or `color([r, g, b, a])`, components in 0..1.
    Rgba([f64; 4]),
    /// `color("red")` or `color("#ff0000")`.
    Named(String),
}

/// A transform together with its typed arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformOp {
    Translate { v: [f64; 3] },
    Rotate { rotation: Rotation },
    Scale { v: [f64; 3] },
    Mirror { v: [f64; 3] },
    Color {
        color: ColorSpec,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        alpha: Option<f64>,
    },
    Resize { newsize: [f64; 3] },
    /// Row-major 4x4 matrix; a 3x4 source matrix gets `[0, 0, 0, 1]` appended.
    Multmatrix { matrix: [[f64; 4]; 4] },
    Offset {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        r: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        delta: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        chamfer: Option<bool>,
        /// Segment overrides for rounded corners.
        #[serde(skip_serializing_if = "Resolution::is_empty", default)]
        resolution: Resolution,
    },
    Hull,
    Minkowski,
}

impl TransformOp {
    /// Source name of the transform.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
            Self::Mirror { .. } => "mirror",
            Self::Color { .. } => "color",
            Self::Resize { .. } => "resize",
            Self::Multmatrix { .. } => "multmatrix",
            Self::Offset { .. } => "offset",
            Self::Hull => "hull",
            Self::Minkowski => "minkowski",
        }
    }
}

// =============================================================================
// EXTRUDES
// =============================================================================

/// Top scale of a linear extrusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtrudeScale {
    Uniform(f64),
    Xy([f64; 2]),
}

impl ExtrudeScale {
    /// Converts the scale to an `[x, y]` pair.
    pub fn to_vec2(&self) -> [f64; 2] {
        match self {
            Self::Uniform(s) => [*s, *s],
            Self::Xy(v) => *v,
        }
    }
}

/// `linear_extrude(height, center, twist, slices, scale)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearExtrudeArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub twist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub slices: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale: Option<ExtrudeScale>,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// `rotate_extrude(angle)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotateExtrudeArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub angle: Option<f64>,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// An extrusion together with its typed arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum ExtrudeOp {
    LinearExtrude(LinearExtrudeArgs),
    RotateExtrude(RotateExtrudeArgs),
}

impl ExtrudeOp {
    /// Source name of the extrusion.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LinearExtrude(_) => "linear_extrude",
            Self::RotateExtrude(_) => "rotate_extrude",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_and_dimensions() {
        assert_eq!(Primitive::Cube(CubeArgs::default()).name(), "cube");
        assert!(!Primitive::Sphere(SphereArgs::default()).is_2d());
        assert!(Primitive::Circle(CircleArgs::default()).is_2d());
        assert!(Primitive::Text(TextArgs::default()).is_2d());
    }

    #[test]
    fn test_sphere_json_omits_absent_keys() {
        let args = SphereArgs { r: Some(10.0), resolution: Resolution::default() };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({ "r": 10.0 }));
    }

    #[test]
    fn test_resolution_json_uses_dollar_names() {
        let args = CircleArgs {
            r: None,
            resolution: Resolution { fn_: Some(24), fa: None, fs: None },
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["$fn"], 24);
    }

    #[test]
    fn test_extrude_scale_to_vec2() {
        assert_eq!(ExtrudeScale::Uniform(0.5).to_vec2(), [0.5, 0.5]);
        assert_eq!(ExtrudeScale::Xy([1.0, 2.0]).to_vec2(), [1.0, 2.0]);
    }

    #[test]
    fn test_transform_names() {
        assert_eq!(TransformOp::Hull.name(), "hull");
        assert_eq!(TransformOp::Translate { v: [0.0; 3] }.name(), "translate");
        assert_eq!(ExtrudeOp::RotateExtrude(RotateExtrudeArgs::default()).name(), "rotate_extrude");
    }
}
