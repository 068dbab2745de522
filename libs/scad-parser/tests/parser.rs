use scad_ast::{BooleanKind, Node, Position, Primitive, TransformOp};
use scad_parser::{parse, SyntaxError};

fn parse_error(src: &str) -> scad_parser::ParseError {
    match parse(src) {
        Err(SyntaxError::Parse(err)) => err,
        other => panic!("expected parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn nesting_without_braces() {
    let program = parse("translate([5,0,0]) rotate([0,0,45]) cube(10);").unwrap();
    assert_eq!(program.body.len(), 1);

    let Node::Transform(translate) = &program.body[0] else {
        panic!("expected translate");
    };
    assert!(matches!(translate.transform, TransformOp::Translate { .. }));
    assert_eq!(translate.children.len(), 1);

    let Node::Transform(rotate) = &translate.children[0] else {
        panic!("expected rotate");
    };
    assert!(matches!(rotate.transform, TransformOp::Rotate { .. }));
    assert_eq!(rotate.children.len(), 1);
    assert!(matches!(
        &rotate.children[0],
        Node::PrimitiveCall(call) if matches!(call.primitive, Primitive::Cube(_))
    ));
}

#[test]
fn braces_and_single_child_are_equivalent() {
    let plain = parse("translate([1, 2, 3]) cube(10);").unwrap();
    let braced = parse("translate([1, 2, 3]) { cube(10); }").unwrap();
    assert_eq!(plain.body[0].children().len(), 1);
    assert_eq!(braced.body[0].children().len(), 1);
    assert_eq!(plain.body[0].children()[0].node_type(), braced.body[0].children()[0].node_type());
}

#[test]
fn difference_preserves_child_order() {
    let program = parse("difference() { cube(10); sphere(6); cylinder(h = 20, r = 2); }").unwrap();
    let Node::BooleanOp(op) = &program.body[0] else {
        panic!("expected boolean op");
    };
    assert_eq!(op.op, BooleanKind::Difference);
    let names: Vec<_> = op
        .children
        .iter()
        .map(|child| match child {
            Node::PrimitiveCall(call) => call.primitive.name(),
            other => other.node_type(),
        })
        .collect();
    assert_eq!(names, vec!["cube", "sphere", "cylinder"]);
}

#[test]
fn sphere_diameter_is_normalized() {
    let program = parse("sphere(d=20);").unwrap();
    let json = serde_json::to_value(&program.body[0]).unwrap();
    let args = &json["primitive"]["args"];
    assert_eq!(args["r"], 10.0);
    assert!(args.get("d").is_none());
}

#[test]
fn positions_point_at_real_tokens() {
    let src = "union() {\n  cube(1);\n    sphere(2);\n}";
    let program = parse(src).unwrap();
    assert_eq!(program.body[0].position(), Position::new(1, 1));
    let children = program.body[0].children();
    assert_eq!(children[0].position(), Position::new(2, 3));
    assert_eq!(children[1].position(), Position::new(3, 5));
}

#[test]
fn body_counts_consumed_statements() {
    let program = parse("$fn = 24; cube(1); ; sphere(1); union() {}").unwrap();
    assert_eq!(program.body.len(), 4);
}

#[test]
fn missing_close_paren_expects_paren() {
    let err = parse_error("cube([10,10,10]");
    assert!(err.expected.iter().any(|e| e == "')'"), "{:?}", err.expected);
    assert_eq!(err.found, "EOF");
}

#[test]
fn retry_context_is_stable() {
    let err = parse_error("cube([10,10,10]");
    let first = err.to_retry_context();
    let second = parse_error("cube([10,10,10]").to_retry_context();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "Parse Error at line 1, column 16:\nFound: \"EOF\"\nExpected: ',', ')'\nMessage: Expected ',' or ')' but found end of input"
    );
    assert_eq!(first.lines().count(), 4);
}

#[test]
fn program_round_trips_through_json() {
    let program = parse("linear_extrude(height = 2, twist = 30) offset(r = 1) square([3, 4]);").unwrap();
    let json = serde_json::to_string(&program).unwrap();
    let back: scad_ast::Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn lex_errors_surface_through_parse() {
    match parse("cube(1) & sphere(1);") {
        Err(SyntaxError::Lex(err)) => assert_eq!(err.found, "&"),
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn overflowing_literals_are_rejected_where_they_appear() {
    let err = parse_error("$fa = 1e999; sphere(10);");
    assert_eq!(err.position(), Position::new(1, 7));
    assert_eq!(err.found, "1e999");
    assert_eq!(err.message, "Number out of range: 1e999");

    let err = parse_error("cube(1e999);");
    assert_eq!(err.position(), Position::new(1, 6));
    assert_eq!(err.expected, vec!["number"]);
    assert_eq!(err.message, "Number out of range: 1e999");
}

#[test]
fn program_is_positioned_at_its_first_token() {
    let program = parse("\n   sphere(1);").unwrap();
    assert_eq!(program.position, Position::new(2, 4));
}
