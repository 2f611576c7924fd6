//! Benchmarks for tagging and export.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use planemark::io::{render, ExportOptions, Format};
use planemark::prelude::*;

fn create_grid_mesh(n: usize) -> PolyMesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Create quads
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

/// Tag every boundary edge of the grid and its four corners.
fn tag_boundary(mesh: &PolyMesh, n: usize) -> TagStore {
    let mut tags = TagStore::new();
    let row = n + 1;
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((i, i + 1));
        edges.push((n * row + i, n * row + i + 1));
        edges.push((i * row, (i + 1) * row));
        edges.push((i * row + n, (i + 1) * row + n));
    }
    let selection = Selection::new()
        .with_vertices([0, n, n * row, n * row + n])
        .with_edges(edges);
    tag_selection(&mut tags, mesh, &selection, &TagDefaults::default());
    tags
}

fn bench_tagging(c: &mut Criterion) {
    let n = 50;
    let mesh = create_grid_mesh(n);

    c.bench_function("tag_boundary_50x50", |b| b.iter(|| tag_boundary(&mesh, n)));
}

fn bench_export(c: &mut Criterion) {
    let n = 100;
    let mesh = create_grid_mesh(n);
    let tags = tag_boundary(&mesh, n);
    let options = ExportOptions::default();

    c.bench_function("render_msh_100x100", |b| {
        b.iter(|| render(&mesh, &tags, Format::Msh, &options).unwrap())
    });

    c.bench_function("render_list_100x100", |b| {
        b.iter(|| render(&mesh, &tags, Format::List, &options).unwrap())
    });
}

criterion_group!(benches, bench_tagging, bench_export);
criterion_main!(benches);
