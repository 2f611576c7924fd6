//! Tag a unit square and print it in both export formats.
//!
//! Run with: cargo run --example unit_square

use nalgebra::Point3;
use planemark::io::{render, ExportOptions, Format};
use planemark::prelude::*;

fn main() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).expect("Failed to build square");

    // Tag the first corner, the bottom edge and the cell with the defaults
    let mut tags = TagStore::new();
    let selection = Selection::new()
        .with_vertices([0])
        .with_edges([(0, 1)])
        .with_faces([0]);
    let tagged = tag_selection(&mut tags, &mesh, &selection, &TagDefaults::default());
    println!("Tagged {} features", tagged);

    for label in tag_labels(&mesh, &tags, &ShowTags::default()) {
        println!(
            "  {} {} at ({:.2}, {:.2})",
            label.kind,
            label.text(),
            label.position.x,
            label.position.y
        );
    }

    let options = ExportOptions::default().with_drawing(true);
    for format in [Format::Msh, Format::List] {
        let (text, _) = render(&mesh, &tags, format, &options).expect("Failed to export");
        println!("\n--- {} ---\n{}", format.extension(), text);
    }
}
