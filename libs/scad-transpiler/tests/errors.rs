use scad_transpiler::{compile, CompileError, ErrorKind, TranspileOptions};

fn fail(source: &str) -> CompileError {
    match compile(source, &TranspileOptions::default()) {
        Ok(code) => panic!("expected an error for {source:?}, got {code}"),
        Err(err) => err,
    }
}

#[test]
fn missing_paren_lists_closing_paren() {
    let err = fail("cube([10,10,10]");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.expected().iter().any(|e| e == "')'"));
    assert_eq!(err.found(), Some("EOF"));
}

#[test]
fn retry_context_is_byte_stable() {
    let err = fail("cube([10,10,10]");
    let first = err.to_retry_context();
    assert_eq!(first, fail("cube([10,10,10]").to_retry_context());
    assert_eq!(
        first,
        "Parse Error at line 1, column 16:\nFound: \"EOF\"\nExpected: ',', ')'\nMessage: Expected ',' or ')' but found end of input"
    );
}

#[test]
fn rejections_have_empty_expected_list() {
    for source in ["for (i = [0:2]) cube(i);", "if (true) cube(1);", "module m() {}", "x = 5;"] {
        let err = fail(source);
        assert_eq!(err.kind(), ErrorKind::Parse, "{source}");
        assert!(err.expected().is_empty(), "{source}");
        assert!(err.to_retry_context().contains("\nExpected: \n"), "{source}");
    }
}

#[test]
fn lex_error_position() {
    let err = fail("cube(1);\n  cube(2) & sphere(1);");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!((err.line(), err.column()), (Some(2), Some(11)));
    assert_eq!(err.found(), Some("&"));
}

#[test]
fn transpile_error_carries_node_position() {
    let err = fail("cube(1);\nlinear_extrude(2)\n  text(\"abc\");");
    assert_eq!(err.kind(), ErrorKind::Transpile);
    assert_eq!((err.line(), err.column()), (Some(3), Some(3)));
    assert!(err.to_retry_context().starts_with("Transpile Error at line 3, column 3:\nFound: \"text\"\n"));
}

#[test]
fn dimension_mixing_is_a_transpile_error() {
    let err = fail("union() { cube(1); circle(1); }");
    assert_eq!(err.kind(), ErrorKind::Transpile);
    assert_eq!(err.message(), "Cannot combine 3D and 2D geometry in union");
    assert_eq!(err.found(), Some("union"));
}

#[test]
fn errors_serialize_with_kind_tag() {
    let json = serde_json::to_value(fail("cube([10,10,10]")).unwrap();
    assert_eq!(json["kind"], "parse");
    assert_eq!(json["line"], 1);
    assert_eq!(json["expected"][1], "')'");

    let json = serde_json::to_value(fail("sphere(-1);")).unwrap();
    assert_eq!(json["kind"], "transpile");
    assert_eq!(json["construct"], "sphere");
}

#[test]
fn overflowing_special_variable_fails_to_parse() {
    let err = fail("$fa = 1e999; sphere(10);");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!((err.line(), err.column()), (Some(1), Some(7)));
}

#[test]
fn non_ascii_identifier_is_a_lex_error() {
    let err = fail("cubeé(1);");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.column(), Some(5));
    assert_eq!(err.found(), Some("é"));
}
