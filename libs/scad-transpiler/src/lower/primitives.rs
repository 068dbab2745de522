//! # Primitive Lowering
//!
//! One builder constructor call per primitive. OpenSCAD defaults for absent
//! arguments are applied here, since the AST records only what the source
//! wrote.

use super::{Dim, Expr, Lowerer};
use crate::context::ResolutionScope;
use crate::emit;
use crate::error::TranspileError;
use scad_ast::{
    CircleArgs, CubeArgs, CylinderArgs, PolygonArgs, PolyhedronArgs, Position, Primitive, PrimitiveCall,
    SphereArgs, SquareArgs,
};

impl Lowerer<'_> {
    pub(super) fn primitive(&mut self, call: &PrimitiveCall, scope: &ResolutionScope) -> Result<Expr, TranspileError> {
        let position = call.position;
        match &call.primitive {
            Primitive::Cube(args) => cube(args, position),
            Primitive::Sphere(args) => self.sphere(args, scope, position),
            Primitive::Cylinder(args) => self.cylinder(args, scope, position),
            Primitive::Polyhedron(args) => {
                let expr = polyhedron(args, position)?;
                self.helpers.mesh = true;
                Ok(expr)
            }
            Primitive::Square(args) => square(args, position),
            Primitive::Circle(args) => self.circle(args, scope, position),
            Primitive::Polygon(args) => polygon(args, position),
            Primitive::Text(_) => Err(TranspileError::at(
                "text",
                position,
                "text() cannot be transpiled; the builder has no font support",
            )),
        }
    }

    fn sphere(&mut self, args: &SphereArgs, scope: &ResolutionScope, position: Position) -> Result<Expr, TranspileError> {
        let r = positive("sphere", "r", args.r.unwrap_or(1.0), position)?;
        let segments = self.segments(scope, &args.resolution, r, "sphere", position)?;
        Ok(Expr::new(
            format!("Manifold.sphere({}, {segments})", emit::number(r)),
            Dim::Three,
        ))
    }

    fn cylinder(&mut self, args: &CylinderArgs, scope: &ResolutionScope, position: Position) -> Result<Expr, TranspileError> {
        let h = positive("cylinder", "h", args.h.unwrap_or(1.0), position)?;
        let r = args.r.unwrap_or(1.0);
        let r1 = args.r1.unwrap_or(r);
        let r2 = args.r2.unwrap_or(r);
        if r1 < 0.0 || r2 < 0.0 {
            return Err(TranspileError::at(
                "cylinder",
                position,
                format!(
                    "cylinder radii must not be negative, found r1 = {} and r2 = {}",
                    emit::number(r1),
                    emit::number(r2)
                ),
            ));
        }
        if r1 <= 0.0 && r2 <= 0.0 {
            return Err(TranspileError::at("cylinder", position, "cylinder needs a radius greater than 0"));
        }

        let segments = self.segments(scope, &args.resolution, r1.max(r2), "cylinder", position)?;
        Ok(Expr::new(
            format!(
                "Manifold.cylinder({}, {}, {}, {segments}, {})",
                emit::number(h),
                emit::number(r1),
                emit::number(r2),
                emit::boolean(args.center.unwrap_or(false))
            ),
            Dim::Three,
        ))
    }

    fn circle(&mut self, args: &CircleArgs, scope: &ResolutionScope, position: Position) -> Result<Expr, TranspileError> {
        let r = positive("circle", "r", args.r.unwrap_or(1.0), position)?;
        let segments = self.segments(scope, &args.resolution, r, "circle", position)?;
        Ok(Expr::new(
            format!("CrossSection.circle({}, {segments})", emit::number(r)),
            Dim::Two,
        ))
    }
}

fn cube(args: &CubeArgs, position: Position) -> Result<Expr, TranspileError> {
    let size = args.size.map(|s| s.to_vec3()).unwrap_or([1.0; 3]);
    all_positive("cube", &size, position)?;
    Ok(Expr::new(
        format!(
            "Manifold.cube({}, {})",
            emit::vector(&size),
            emit::boolean(args.center.unwrap_or(false))
        ),
        Dim::Three,
    ))
}

fn square(args: &SquareArgs, position: Position) -> Result<Expr, TranspileError> {
    let size = args.size.map(|s| s.to_vec2()).unwrap_or([1.0; 2]);
    all_positive("square", &size, position)?;
    Ok(Expr::new(
        format!(
            "CrossSection.square({}, {})",
            emit::vector(&size),
            emit::boolean(args.center.unwrap_or(false))
        ),
        Dim::Two,
    ))
}

/// `Manifold.ofMesh` over fan-triangulated faces.
///
/// OpenSCAD faces wind clockwise seen from outside; the builder expects
/// counter-clockwise, so each triangle is emitted reversed.
fn polyhedron(args: &PolyhedronArgs, position: Position) -> Result<Expr, TranspileError> {
    if args.points.len() < 4 {
        return Err(TranspileError::at(
            "polyhedron",
            position,
            format!("polyhedron needs at least 4 points, found {}", args.points.len()),
        ));
    }
    if args.faces.is_empty() {
        return Err(TranspileError::at("polyhedron", position, "polyhedron needs at least one face"));
    }

    let mut tri_verts = Vec::new();
    for (i, face) in args.faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(TranspileError::at(
                "polyhedron",
                position,
                format!("polyhedron face {i} has {} indices; a face needs at least 3", face.len()),
            ));
        }
        check_indices("polyhedron", face, args.points.len(), position)?;
        for k in 1..face.len() - 1 {
            tri_verts.extend([face[0], face[k + 1], face[k]]);
        }
    }

    let vert_properties: Vec<f64> = args.points.iter().flatten().copied().collect();
    let tri_verts: Vec<String> = tri_verts.iter().map(usize::to_string).collect();
    Ok(Expr::new(
        format!(
            "Manifold.ofMesh(new Mesh({{ numProp: 3, vertProperties: new Float32Array({}), triVerts: new Uint32Array([{}]) }}))",
            emit::vector(&vert_properties),
            tri_verts.join(", ")
        ),
        Dim::Three,
    ))
}

/// `new CrossSection(contours, "EvenOdd")`; without `paths` all points form one contour.
fn polygon(args: &PolygonArgs, position: Position) -> Result<Expr, TranspileError> {
    let all: Vec<usize> = (0..args.points.len()).collect();
    let paths = match &args.paths {
        Some(paths) if !paths.is_empty() => paths.clone(),
        _ => vec![all],
    };

    let mut contours = Vec::with_capacity(paths.len());
    for path in &paths {
        if path.len() < 3 {
            return Err(TranspileError::at(
                "polygon",
                position,
                format!("polygon contours need at least 3 points, found {}", path.len()),
            ));
        }
        check_indices("polygon", path, args.points.len(), position)?;
        let points: Vec<String> = path.iter().map(|&i| emit::vector(&args.points[i])).collect();
        contours.push(format!("[{}]", points.join(", ")));
    }

    Ok(Expr::new(
        format!("new CrossSection([{}], \"EvenOdd\")", contours.join(", ")),
        Dim::Two,
    ))
}

fn check_indices(construct: &str, indices: &[usize], len: usize, position: Position) -> Result<(), TranspileError> {
    match indices.iter().find(|&&i| i >= len) {
        Some(i) => Err(TranspileError::at(
            construct,
            position,
            format!("{construct} index {i} is out of range for {len} points"),
        )),
        None => Ok(()),
    }
}

fn positive(construct: &str, name: &str, value: f64, position: Position) -> Result<f64, TranspileError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(TranspileError::at(
            construct,
            position,
            format!("{construct} {name} must be greater than 0, found {}", emit::number(value)),
        ))
    }
}

fn all_positive(construct: &str, size: &[f64], position: Position) -> Result<(), TranspileError> {
    if size.iter().all(|&s| s > 0.0) {
        Ok(())
    } else {
        Err(TranspileError::at(
            construct,
            position,
            format!("{construct} size must be greater than 0, found {}", emit::vector(size)),
        ))
    }
}
