//! End-to-end export tests: scene in, file out.

use std::fs;

use nalgebra::Point3;
use planemark::io::{self, ExportOptions, Format};
use planemark::prelude::*;

/// An `n x n` grid of CCW unit quads in the xy-plane.
fn quad_grid(n: usize) -> PolyMesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    let mut faces = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;
            faces.push([v00, v10, v11, v01]);
        }
    }

    build_from_quads(&vertices, &faces).unwrap()
}

fn unit_square() -> PolyMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap()
}

#[test]
fn unit_square_msh_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.msh");

    let mesh = unit_square();
    let mut tags = TagStore::new();
    tags.set_vertex_tag(VertexId::new(0), -100);
    tags.set_edge_tag(EdgeKey::new(0, 1), -10);

    let report = io::export(&mesh, &tags, &path, &ExportOptions::default()).unwrap();
    assert_eq!(report.format, Format::Msh);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[2], "2 4 1 1 0");
    assert_eq!(lines[6], "0 -100 0.00000000 0.00000000");
    assert!(lines.contains(&"0 0 qua4 0 1 2 3"));
    assert_eq!(*lines.last().unwrap(), "-10 0 1");
}

#[test]
fn counts_match_input_for_valid_meshes() {
    let mesh = quad_grid(4);
    let (text, report) =
        io::render(&mesh, &TagStore::new(), Format::Msh, &ExportOptions::default()).unwrap();
    assert_eq!(report.points, 25);
    assert_eq!(report.cells, 16);

    let point_lines = text
        .lines()
        .skip_while(|l| *l != "# points")
        .skip(2)
        .take_while(|l| !l.is_empty())
        .count();
    let cell_lines = text
        .lines()
        .skip_while(|l| *l != "# cells")
        .skip(2)
        .take_while(|l| !l.is_empty())
        .count();
    assert_eq!(point_lines, 25);
    assert_eq!(cell_lines, 16);
}

#[test]
fn export_is_deterministic() {
    let mesh = quad_grid(3);
    let mut tags = TagStore::new();
    let selection = Selection::new()
        .with_vertices([0, 3, 12, 15])
        .with_edges([(0, 1), (1, 2), (2, 3), (14, 15)])
        .with_faces([4, 5]);
    tag_selection(&mut tags, &mesh, &selection, &TagDefaults::default());

    let dir = tempfile::tempdir().unwrap();
    for format in [Format::Msh, Format::List] {
        let a = dir.path().join(format!("a.{}", format.extension()));
        let b = dir.path().join(format!("b.{}", format.extension()));
        io::export(&mesh, &tags, &a, &ExportOptions::default()).unwrap();
        io::export(&mesh, &tags, &b, &ExportOptions::default()).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}

#[test]
fn retagging_does_not_grow_the_store() {
    let mesh = unit_square();
    let mut tags = TagStore::new();
    let selection = Selection::new()
        .with_vertices([1])
        .with_edges([(1, 2)])
        .with_faces([0]);

    let mut defaults = TagDefaults::default();
    tag_selection(&mut tags, &mesh, &selection, &defaults);
    defaults.set(TagKind::Vertex, -7).unwrap();
    defaults.set(TagKind::Edge, -8).unwrap();
    defaults.set(TagKind::Cell, -9).unwrap();
    tag_selection(&mut tags, &mesh, &selection, &defaults);

    assert_eq!(tags.num_vertex_tags(), 1);
    assert_eq!(tags.num_edge_tags(), 1);
    assert_eq!(tags.num_face_tags(), 1);
    assert_eq!(tags.vertex_marker(VertexId::new(1)), -7);
    assert_eq!(tags.edge_marker(EdgeKey::new(2, 1)), -8);
    assert_eq!(tags.face_marker(FaceId::new(0)), -9);
}

#[test]
fn clockwise_cell_fails_msh_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.msh");

    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let mesh = build_from_quads(&vertices, &[[0, 3, 2, 1]]).unwrap();

    let result = io::export(&mesh, &TagStore::new(), &path, &ExportOptions::default());
    assert!(matches!(result, Err(MeshError::WrongWinding { cell: 0 })));
    assert!(!path.exists());

    // An earlier export at the same path is left untouched.
    fs::write(&path, "previous export\n").unwrap();
    let result = io::export(&mesh, &TagStore::new(), &path, &ExportOptions::default());
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous export\n");
}

#[test]
fn clockwise_cell_is_flagged_in_list_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.py");

    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let mesh = build_from_quads(&vertices, &[[0, 3, 2, 1]]).unwrap();

    let report = io::export(&mesh, &TagStore::new(), &path, &ExportOptions::default()).unwrap();
    assert_eq!(report.format, Format::List);
    assert_eq!(report.warnings.len(), 1);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[0, 0, [0, 3, 2, 1], {}],  # ERROR:"));
}

#[test]
fn pentagon_is_rejected_in_every_format() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(3.0, 1.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
    ];
    let mesh = build_from_polygons(&vertices, &[[0, 1, 2, 3, 4]]).unwrap();

    for format in [Format::Msh, Format::List] {
        let options = ExportOptions::default().with_flatten(true);
        let result = io::render(&mesh, &TagStore::new(), format, &options);
        assert!(matches!(
            result,
            Err(MeshError::InvalidCellArity { cell: 0, nodes: 5 })
        ));
    }
}

#[test]
fn diagonal_edge_tags_are_not_exported() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("square.json");
    fs::write(
        &scene_path,
        r#"{
            "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            "faces": [[0, 1, 2, 3]],
            "tags": {
                "edges": [
                    { "v0": 0, "v1": 2, "tag": -10 },
                    { "v0": 3, "v1": 3, "tag": -20 },
                    { "v0": 1, "v1": 2, "tag": -30 }
                ]
            }
        }"#,
    )
    .unwrap();
    let scene = Scene::load(&scene_path).unwrap();

    let msh_path = dir.path().join("square.msh");
    let report = io::export(&scene.mesh, &scene.tags, &msh_path, &ExportOptions::default()).unwrap();
    assert_eq!(report.marked_edges, 1);
    let text = fs::read_to_string(&msh_path).unwrap();
    assert!(text.contains("\n2 4 1 1 0\n"));
    assert!(text.ends_with("# marker p1 p2\n-30 1 2\n"));

    let list_path = dir.path().join("square.py");
    let report = io::export(&scene.mesh, &scene.tags, &list_path, &ExportOptions::default()).unwrap();
    assert_eq!(report.marked_edges, 1);
    let text = fs::read_to_string(&list_path).unwrap();
    assert!(text.contains("    [0, 0, [0, 1, 2, 3], {1: -30}],\n"));

    let labels = tag_labels(&scene.mesh, &scene.tags, &ShowTags::default());
    assert_eq!(labels.len(), 1);
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mesh.txt");

    let options = ExportOptions::default()
        .with_format(Format::List)
        .with_drawing(true);
    io::export(&unit_square(), &TagStore::new(), &path, &options).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# points: [id, marker, x, y]\npoints = [\n"));
    assert!(text.ends_with("draw.show()\n"));
}

#[test]
fn scene_round_trip_then_export() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("plate.json");
    let out_path = dir.path().join("plate.msh");

    let mut scene = Scene::new(quad_grid(2));
    let selection = Selection::new().with_edges([(0, 1), (1, 2)]);
    tag_selection(&mut scene.tags, &scene.mesh, &selection, &scene.defaults);
    scene.save(&scene_path).unwrap();

    let scene = Scene::load(&scene_path).unwrap();
    let report = io::export(&scene.mesh, &scene.tags, &out_path, &ExportOptions::default()).unwrap();
    assert_eq!(report.marked_edges, 2);

    let text = fs::read_to_string(&out_path).unwrap();
    assert!(text.contains("\n2 9 4 2 0\n"));
    assert!(text.ends_with("-10 0 1\n-10 1 2\n"));
}
