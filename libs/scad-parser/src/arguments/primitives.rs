//! Primitive argument mapping.
//!
//! # Supported Forms
//! - `cube(10)`, `cube([1, 2, 3], center = true)`
//! - `sphere(5)`, `sphere(r = 5)`, `sphere(d = 10, $fn = 32)`
//! - `cylinder(h, r1, r2, center)` with `r`/`d`/`d1`/`d2`
//! - `polyhedron(points, faces)` (`triangles` for `faces`)
//! - `square`, `circle`, `polygon`, `text`

use super::shared;
use super::{ArgumentList, Reader, Signature};
use crate::error::ParseError;
use crate::grammar::{NUMBER, STRING, VECTOR};
use crate::lexer::TokenKind;
use scad_ast::{
    CircleArgs, CubeArgs, CubeSize, CylinderArgs, PolygonArgs, PolyhedronArgs, Primitive, SphereArgs,
    SquareArgs, SquareSize, TextArgs, Value,
};

const CUBE: Signature = Signature {
    positional: &["size", "center"],
    named: &["size", "center"],
};

const SPHERE: Signature = Signature {
    positional: &["r"],
    named: &["r", "d", "$fn", "$fa", "$fs"],
};

const CYLINDER: Signature = Signature {
    positional: &["h", "r1", "r2", "center"],
    named: &["h", "r", "r1", "r2", "d", "d1", "d2", "center", "$fn", "$fa", "$fs"],
};

const POLYHEDRON: Signature = Signature {
    positional: &["points", "faces", "convexity"],
    named: &["points", "faces", "triangles", "convexity"],
};

const SQUARE: Signature = Signature {
    positional: &["size", "center"],
    named: &["size", "center"],
};

const CIRCLE: Signature = Signature {
    positional: &["r"],
    named: &["r", "d", "$fn", "$fa", "$fs"],
};

const POLYGON: Signature = Signature {
    positional: &["points", "paths", "convexity"],
    named: &["points", "paths", "convexity"],
};

const TEXT: Signature = Signature {
    positional: &["text", "size", "font", "halign", "valign"],
    named: &["text", "size", "font", "halign", "valign", "$fn", "$fa", "$fs"],
};

/// Maps a primitive call onto its typed arguments.
pub(crate) fn primitive(args: &ArgumentList) -> Result<Primitive, ParseError> {
    let primitive = match args.keyword {
        TokenKind::Cube => Primitive::Cube(cube(args)?),
        TokenKind::Sphere => Primitive::Sphere(sphere(args)?),
        TokenKind::Cylinder => Primitive::Cylinder(cylinder(args)?),
        TokenKind::Polyhedron => Primitive::Polyhedron(polyhedron(args)?),
        TokenKind::Square => Primitive::Square(square(args)?),
        TokenKind::Circle => Primitive::Circle(circle(args)?),
        TokenKind::Polygon => Primitive::Polygon(polygon(args)?),
        _ => Primitive::Text(text(args)?),
    };
    Ok(primitive)
}

fn cube(args: &ArgumentList) -> Result<CubeArgs, ParseError> {
    let reader = Reader::new(args, &CUBE)?;
    let size = reader.get("size", &[NUMBER, VECTOR], "a number or a 3-element vector", |v| match v {
        Value::Number(_) => shared::finite(v).map(CubeSize::Scalar),
        _ => shared::vec3(v).map(CubeSize::Vector),
    })?;
    Ok(CubeArgs {
        size,
        center: reader.boolean("center")?,
    })
}

fn sphere(args: &ArgumentList) -> Result<SphereArgs, ParseError> {
    let reader = Reader::new(args, &SPHERE)?;
    Ok(SphereArgs {
        r: reader.radius("r", "d")?,
        resolution: reader.resolution()?,
    })
}

fn cylinder(args: &ArgumentList) -> Result<CylinderArgs, ParseError> {
    let reader = Reader::new(args, &CYLINDER)?;
    Ok(CylinderArgs {
        h: reader.number("h")?,
        r: reader.radius("r", "d")?,
        r1: reader.radius("r1", "d1")?,
        r2: reader.radius("r2", "d2")?,
        center: reader.boolean("center")?,
        resolution: reader.resolution()?,
    })
}

fn polyhedron(args: &ArgumentList) -> Result<PolyhedronArgs, ParseError> {
    let reader = Reader::new(args, &POLYHEDRON)?;
    reader.count("convexity")?;

    let points = reader
        .get("points", &[VECTOR], "a vector of [x, y, z] points", |v| shared::points(v, shared::vec3))?
        .unwrap_or_default();

    let faces_name = if reader.has("faces") { "faces" } else { "triangles" };
    let faces = reader
        .get(faces_name, &[VECTOR], "a vector of index lists", shared::index_lists)?
        .unwrap_or_default();

    Ok(PolyhedronArgs { points, faces })
}

fn square(args: &ArgumentList) -> Result<SquareArgs, ParseError> {
    let reader = Reader::new(args, &SQUARE)?;
    let size = reader.get("size", &[NUMBER, VECTOR], "a number or a 2-element vector", |v| match v {
        Value::Number(_) => shared::finite(v).map(SquareSize::Scalar),
        _ => shared::vec2(v).map(SquareSize::Vector),
    })?;
    Ok(SquareArgs {
        size,
        center: reader.boolean("center")?,
    })
}

fn circle(args: &ArgumentList) -> Result<CircleArgs, ParseError> {
    let reader = Reader::new(args, &CIRCLE)?;
    Ok(CircleArgs {
        r: reader.radius("r", "d")?,
        resolution: reader.resolution()?,
    })
}

fn polygon(args: &ArgumentList) -> Result<PolygonArgs, ParseError> {
    let reader = Reader::new(args, &POLYGON)?;
    reader.count("convexity")?;

    let points = reader
        .get("points", &[VECTOR], "a vector of [x, y] points", |v| shared::points(v, shared::vec2))?
        .unwrap_or_default();
    let paths = reader.get("paths", &[VECTOR], "a vector of index lists", shared::index_lists)?;

    Ok(PolygonArgs { points, paths })
}

fn text(args: &ArgumentList) -> Result<TextArgs, ParseError> {
    let reader = Reader::new(args, &TEXT)?;
    reader.resolution()?;
    let text = reader.get("text", &[STRING], "a string", |v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })?;
    Ok(TextArgs {
        text,
        size: reader.number("size")?,
        font: reader.string("font")?,
        halign: reader.string("halign")?,
        valign: reader.string("valign")?,
    })
}
