//! PLY (Stanford polygon) format support.
//!
//! Meshes are loaded with their polygons intact; quads are not triangulated.
//! An optional integer `marker` property on the `vertex` and `face` elements
//! carries tags, so a tagged mesh survives a save/load cycle. Edge tags have
//! no PLY representation and are not stored.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, FaceId, PolyMesh, VertexId};
use crate::tags::TagStore;

/// Load a mesh from a PLY file, ignoring any markers.
///
/// # Example
///
/// ```no_run
/// use planemark::io::ply;
///
/// let mesh = ply::load("plate.ply").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<PolyMesh> {
    load_tagged(path).map(|(mesh, _)| mesh)
}

/// Load a mesh and its vertex/face markers from a PLY file.
///
/// Markers equal to `0` are treated as untagged.
pub fn load_tagged<P: AsRef<Path>>(path: P) -> Result<(PolyMesh, TagStore)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let load_error = |message: &str| MeshError::LoadError {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(&mut reader).map_err(|e| MeshError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let vertex_element = ply
        .payload
        .get("vertex")
        .ok_or_else(|| load_error("PLY file has no vertex element"))?;

    let mut tags = TagStore::new();
    let mut vertices: Vec<Point3<f64>> = Vec::with_capacity(vertex_element.len());
    for (i, vertex) in vertex_element.iter().enumerate() {
        let x = get_float_property(vertex, "x")
            .ok_or_else(|| load_error("vertex missing x coordinate"))?;
        let y = get_float_property(vertex, "y")
            .ok_or_else(|| load_error("vertex missing y coordinate"))?;
        // 2D files may omit z entirely.
        let z = get_float_property(vertex, "z").unwrap_or(0.0);
        vertices.push(Point3::new(x, y, z));

        if let Some(marker) = get_int_property(vertex, "marker").filter(|&m| m != 0) {
            tags.set_vertex_tag(VertexId::new(i), marker);
        }
    }

    let mut faces: Vec<Vec<usize>> = Vec::new();
    if let Some(face_element) = ply.payload.get("face") {
        faces.reserve(face_element.len());
        for (i, face) in face_element.iter().enumerate() {
            let indices = get_list_property(face, "vertex_indices")
                .or_else(|| get_list_property(face, "vertex_index"))
                .ok_or_else(|| load_error("face missing vertex_indices property"))?;
            faces.push(indices);

            if let Some(marker) = get_int_property(face, "marker").filter(|&m| m != 0) {
                tags.set_face_tag(FaceId::new(i), marker);
            }
        }
    }

    let mesh = build_from_polygons(&vertices, &faces)?;
    log::info!(
        "loaded {}: {} vertices, {} faces, {} vertex tags, {} face tags",
        path.display(),
        mesh.num_vertices(),
        mesh.num_faces(),
        tags.num_vertex_tags(),
        tags.num_face_tags()
    );
    Ok((mesh, tags))
}

fn get_float_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        Property::Int(v) => Some(*v as f64),
        Property::UInt(v) => Some(*v as f64),
        Property::Short(v) => Some(*v as f64),
        Property::UShort(v) => Some(*v as f64),
        Property::Char(v) => Some(*v as f64),
        Property::UChar(v) => Some(*v as f64),
        _ => None,
    }
}

fn get_int_property(element: &DefaultElement, name: &str) -> Option<i32> {
    match element.get(name)? {
        Property::Int(v) => Some(*v),
        Property::Short(v) => Some(*v as i32),
        Property::Char(v) => Some(*v as i32),
        Property::UChar(v) => Some(*v as i32),
        Property::UShort(v) => Some(*v as i32),
        Property::UInt(v) => i32::try_from(*v).ok(),
        _ => None,
    }
}

fn get_list_property(element: &DefaultElement, name: &str) -> Option<Vec<usize>> {
    match element.get(name)? {
        Property::ListInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        _ => None,
    }
}

/// Save a mesh and its vertex/face markers to a PLY file (ASCII format).
///
/// Positions are written in object space.
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, tags: &TagStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // Write header
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by planemark")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "property int marker")?;
    writeln!(writer, "element face {}", mesh.num_faces())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "property int marker")?;
    writeln!(writer, "end_header")?;

    for v in mesh.vertex_ids() {
        let p = mesh.position(v);
        writeln!(writer, "{} {} {} {}", p.x, p.y, p.z, tags.vertex_marker(v))?;
    }

    for f in mesh.face_ids() {
        let verts = mesh.face_vertices(f);
        write!(writer, "{}", verts.len())?;
        for v in verts {
            write!(writer, " {v}")?;
        }
        writeln!(writer, " {}", tags.face_marker(f))?;
    }

    writer.flush()?;
    Ok(())
}
