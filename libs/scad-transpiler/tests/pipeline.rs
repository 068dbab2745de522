use rayon::prelude::*;
use scad_transpiler::{compile, compile_with_diagnostics, transpile, TranspileOptions};

const MODEL: &str = r#"
// Bracket with a countersunk hole
$fn = 32;
difference() {
    union() {
        cube([40, 20, 4]);
        translate([0, 0, 4]) cube([4, 20, 20]);
    }
    translate([20, 10, -1]) cylinder(h = 6, r = 3);
    translate([20, 10, 2]) cylinder(h = 3, r1 = 3, r2 = 6);
}
translate([50, 0, 0]) linear_extrude(height = 10, twist = 45) square([5, 5], center = true);
rotate_extrude(angle = 180) translate([10, 0]) circle(d = 4);
"#;

#[test]
fn output_is_deterministic() {
    let options = TranspileOptions::default();
    let first = compile(MODEL, &options).unwrap();
    for _ in 0..10 {
        assert_eq!(compile(MODEL, &options).unwrap(), first);
    }
}

#[test]
fn concurrent_compiles_agree() {
    let options = TranspileOptions::with_default_fn(24);
    let expected = compile(MODEL, &options).unwrap();
    let outputs: Vec<String> = (0..64)
        .into_par_iter()
        .map(|_| compile(MODEL, &options).unwrap())
        .collect();
    assert!(outputs.iter().all(|out| *out == expected));
}

#[test]
fn transpile_matches_compile() {
    let options = TranspileOptions::default();
    let program = scad_parser::parse(MODEL).unwrap();
    assert_eq!(transpile(&program, &options).unwrap(), compile(MODEL, &options).unwrap());
}

#[test]
fn difference_preserves_operand_order() {
    let options = TranspileOptions::default();
    let abc = compile("difference() { cube(10); sphere(2); cylinder(h = 3, r = 1); }", &options).unwrap();
    let acb = compile("difference() { cube(10); cylinder(h = 3, r = 1); sphere(2); }", &options).unwrap();

    let sphere = abc.find(".subtract(Manifold.sphere").unwrap();
    let cylinder = abc.find(".subtract(Manifold.cylinder").unwrap();
    assert!(sphere < cylinder);

    let sphere = acb.find(".subtract(Manifold.sphere").unwrap();
    let cylinder = acb.find(".subtract(Manifold.cylinder").unwrap();
    assert!(cylinder < sphere);
}

#[test]
fn full_program_layout() {
    let code = compile(MODEL, &TranspileOptions::default()).unwrap();
    assert!(code.starts_with("const { Manifold, CrossSection } = api;\n\nconst result = Manifold.union([\n"));
    assert!(code.ends_with(";\nreturn result;\n"));
    assert!(code.contains("Manifold.cylinder(6, 3, 3, 32, false).translate([20, 10, -1])"));
    assert!(code.contains(".extrude(10, 4, -45, [1, 1], false).translate([50, 0, 0])"));
    assert!(code.contains("CrossSection.circle(2, 32).translate([10, 0]).revolve(32, 180)"));
}

#[test]
fn polyhedron_binds_mesh() {
    let code = compile(
        "polyhedron(points = [[0,0,0],[1,0,0],[0,1,0],[0,0,1]], faces = [[0,1,2],[0,3,1],[0,2,3],[1,3,2]]);",
        &TranspileOptions::default(),
    )
    .unwrap();
    assert!(code.starts_with("const { Manifold, CrossSection, Mesh } = api;\n"));
    assert!(code.contains("Manifold.ofMesh(new Mesh({"));
}

#[test]
fn assignments_do_not_leak_out_of_blocks() {
    let code = compile(
        "translate([0, 0, 0]) { $fn = 64; sphere(10); } sphere(10);",
        &TranspileOptions::default(),
    )
    .unwrap();
    assert!(code.contains("Manifold.sphere(10, 64)"));
    assert!(code.contains("Manifold.sphere(10, 30)"));
}

#[test]
fn clamped_segments_are_reported() {
    let result = compile_with_diagnostics("sphere(1, $fn = 1000);", &TranspileOptions::default()).unwrap();
    assert!(result.code.contains("Manifold.sphere(1, 128)"));
    assert_eq!(result.diagnostics.len(), 1);

    let json = serde_json::to_value(&result.diagnostics[0]).unwrap();
    assert_eq!(json["severity"], "warning");
    assert_eq!(json["position"]["line"], 1);
}
