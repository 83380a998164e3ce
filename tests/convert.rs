use model_converter::{
    load_model, CornerRef, DumpExporter, Error, FacePolicy, Format, LineError, Model, ModelParser,
    ObjParser, ParseOptions, Point3, TokenCountError,
};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

fn demo_cube() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/cube.obj")
}

fn parse_file(path: impl AsRef<Path>) -> Model {
    let mut parser = ObjParser::new();
    parser.parse_file(path).unwrap();
    parser.into_model()
}

#[test]
fn demo_cube_contents() {
    let model = parse_file(demo_cube());

    assert_eq!(model.vertices.len(), 8);
    assert_eq!(model.tex_coords.len(), 4);
    assert_eq!(model.normals.len(), 6);
    assert_eq!(model.faces.len(), 12);
    assert_eq!(model.materials, ["front", "sides"]);
    assert_eq!(model.material_libraries, ["cube.mtl"]);
    assert_eq!(model.unknown_keywords.get("o"), Some(&1));
    assert_eq!(model.unknown_keywords.get("s"), Some(&1));

    assert_eq!(model.faces[1].material.as_deref(), Some("front"));
    assert_eq!(model.faces[2].material.as_deref(), Some("sides"));
    assert_eq!(model.faces[11].material.as_deref(), Some("sides"));

    let (min, max) = model.bounds().unwrap();
    assert_eq!(min, Point3::new(-0.5, -0.5, -0.5));
    assert_eq!(max, Point3::new(0.5, 0.5, 0.5));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut parser = ObjParser::new();

    match parser.parse_file(dir.path().join("absent.obj")) {
        Err(Error::Io(error)) => assert_eq!(error.kind(), ErrorKind::NotFound),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(parser.model(), &Model::new());
}

#[test]
fn windows_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.obj");
    fs::write(
        &path,
        "v 1 2 3\r\nv 4 5 6\r\nv 7 8 9\r\nvt 0 1\r\nvn 0 1 0\r\nf 1/1/1 2/1/1 3/1/1\r\n",
    )
    .unwrap();

    let model = parse_file(&path);

    assert_eq!(model.vertices[2], Point3::new(7.0, 8.0, 9.0));
    assert_eq!(model.faces[0].c, CornerRef::new(Some(3), Some(1), Some(1)));
    assert!(model.unknown_keywords.is_empty());
}

#[test]
fn strict_file_reports_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.obj");
    fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\n\nf 1 2 3\n").unwrap();

    let mut parser = ObjParser::with_options(ParseOptions {
        face_policy: FacePolicy::Strict,
    });
    let error = parser.parse_file(&path).unwrap_err();

    assert!(matches!(
        error,
        Error::Line {
            line: 5,
            source: LineError::TokenCount(TokenCountError { expected: 3, got: 1 })
        }
    ));
    assert_eq!(error.to_string(), "line 5: unexpected number of tokens (expected 3, got 1)");
}

#[test]
fn every_format_exports_the_demo_cube() {
    let model = parse_file(demo_cube());

    let dump = Format::Dump.export(&model).unwrap();
    assert_eq!(dump, DumpExporter::new(&model).to_string());
    assert_eq!(dump.lines().filter(|line| line.starts_with("n ")).count(), 8);
    assert_eq!(dump.lines().filter(|line| line.starts_with("f ")).count(), 1);

    let obj = Format::Obj.export(&model).unwrap();
    assert_eq!(obj.lines().filter(|line| line.starts_with("f ")).count(), 12);
    assert_eq!(obj.lines().filter(|line| line.starts_with("usemtl ")).count(), 2);

    let ply = Format::Ply.export(&model).unwrap();
    assert!(ply.contains("element vertex 8\n"));
    assert!(ply.contains("element face 12\n"));
    assert!(ply.ends_with("3 4 0 2\n"));

    let off = Format::Off.export(&model).unwrap();
    assert!(off.starts_with("OFF\n8 12 0\n"));
    assert!(off.ends_with("3 4 0 2\n"));
}

#[test]
fn exported_obj_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.obj");
    let model = parse_file(demo_cube());
    fs::write(&path, Format::Obj.export(&model).unwrap()).unwrap();

    let reloaded = parse_file(&path);

    assert_eq!(reloaded.vertices, model.vertices);
    assert_eq!(reloaded.tex_coords, model.tex_coords);
    assert_eq!(reloaded.normals, model.normals);
    assert_eq!(reloaded.faces, model.faces);
    assert_eq!(reloaded.materials, model.materials);
    assert_eq!(reloaded.material_libraries, model.material_libraries);
}

#[test]
fn face_counts_match_tobj() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wedge.obj");
    fs::write(
        &path,
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\n\
         vt 0 0\nvt 1 0\nvt 0 1\n\
         vn 0 0 -1\nvn 0 -1 0\nvn -1 0 0\nvn 1 1 1\n\
         f 1/1/1 3/3/1 2/2/1\nf 1/1/2 2/2/2 4/3/2\nf 1/1/3 4/2/3 3/3/3\nf 2/1/4 3/2/4 4/3/4\n",
    )
    .unwrap();

    let model = parse_file(&path);
    let (meshes, _) = tobj::load_obj(&path, &tobj::LoadOptions::default()).unwrap();
    let reference_corners: usize = meshes.iter().map(|m| m.mesh.indices.len()).sum();

    assert_eq!(model.faces.len(), 4);
    assert_eq!(reference_corners, model.faces.len() * 3);
    assert_eq!(model.vertices.len(), 4);
    assert_eq!(model.normals.len(), 4);
}

#[test]
fn mesh_survives_every_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let model = parse_file(demo_cube());
    let triangles = model.triangles().unwrap();

    for name in ["cube.obj", "cube.PLY", "cube.off"] {
        let path = dir.path().join(name);
        let format = Format::from_path(&path).unwrap();
        fs::write(&path, format.export(&model).unwrap()).unwrap();

        let reloaded = load_model(&path, ParseOptions::default()).unwrap();
        assert_eq!(reloaded.vertices, model.vertices, "{name}");
        assert_eq!(reloaded.triangles().unwrap(), triangles, "{name}");
    }
}

#[test]
fn ply_normals_are_shared_with_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lit.ply");
    fs::write(
        &path,
        "ply\nformat ascii 1.0\nelement vertex 3\n\
         property float x\nproperty float y\nproperty float z\n\
         property float nx\nproperty float ny\nproperty float nz\n\
         element face 1\nproperty list uchar int vertex_indices\nend_header\n\
         0 0 0 0 0 1\n1 0 0 0 0 1\n0 1 0 0 0 1\n3 0 1 2\n",
    )
    .unwrap();

    let model = load_model(&path, ParseOptions::default()).unwrap();
    let obj = Format::Obj.export(&model).unwrap();

    assert_eq!(model.normals.len(), 3);
    assert!(obj.ends_with("f 1//1 2//2 3//3\n"), "{obj}");
}

#[test]
fn strict_policy_applies_to_off_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quad.off");
    fs::write(&path, "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n").unwrap();

    let strict = ParseOptions {
        face_policy: FacePolicy::Strict,
    };
    assert!(matches!(
        load_model(&path, strict),
        Err(Error::Line { line: 7, .. })
    ));
    assert_eq!(load_model(&path, ParseOptions::default()).unwrap().faces.len(), 1);
}

#[test]
fn output_extension_must_be_known() {
    match Format::from_path("cube.stl") {
        Err(error @ Error::UnsupportedFormat { .. }) => {
            assert_eq!(error.to_string(), "unsupported model format: \"cube.stl\"");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
