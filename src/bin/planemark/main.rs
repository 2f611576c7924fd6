//! Planemark CLI - tag planar meshes and export them for meshing tools.
//!
//! Usage: planemark <COMMAND> [OPTIONS] <SCENE> ...
//!
//! Run `planemark --help` for available commands. Set `RUST_LOG=info` (or
//! `debug`) for progress logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use planemark::io::scene::Scene;
use planemark::io::{self, ply, ExportOptions, Format};
use planemark::tags::{self, Selection, TagDefaults, TagKind};

#[derive(Parser)]
#[command(name = "planemark")]
#[command(author, version, about = "Tag and export planar meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a scene from a PLY mesh
    Import {
        /// Input PLY file
        input: PathBuf,

        /// Output scene file (JSON)
        scene: PathBuf,
    },

    /// Tag selected features with the scene's default value
    Tag {
        /// Scene file (JSON), updated in place
        scene: PathBuf,

        /// Vertices to tag (comma-separated indices)
        #[arg(long, value_delimiter = ',')]
        vertices: Vec<usize>,

        /// Edges to tag (comma-separated `a-b` pairs)
        #[arg(long, value_delimiter = ',', value_parser = parse_edge)]
        edges: Vec<(usize, usize)>,

        /// Faces to tag (comma-separated indices)
        #[arg(long, value_delimiter = ',')]
        faces: Vec<usize>,

        /// Use this value instead of the scene default
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i32>,
    },

    /// Show or change the default tag values
    Defaults {
        /// Scene file (JSON), updated in place
        scene: PathBuf,

        /// Default vertex tag (-1000 to 0)
        #[arg(long, allow_hyphen_values = true)]
        vertex: Option<i32>,

        /// Default edge tag (-99 to 0)
        #[arg(long, allow_hyphen_values = true)]
        edge: Option<i32>,

        /// Default cell tag (-99 to 0)
        #[arg(long, allow_hyphen_values = true)]
        cell: Option<i32>,
    },

    /// Print tag labels with their world-space anchors
    Labels {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Hide vertex tags
        #[arg(long)]
        no_vertex: bool,

        /// Hide edge tags
        #[arg(long)]
        no_edge: bool,

        /// Hide cell tags
        #[arg(long)]
        no_cell: bool,
    },

    /// Display scene information
    Info {
        /// Scene file (JSON)
        scene: PathBuf,
    },

    /// Export a tagged mesh
    Export {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Output file (.msh or .py)
        output: PathBuf,

        /// Output format (default: from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Tolerance on the x/y components of cell normals
        #[arg(short, long, default_value_t = io::DEFAULT_TOLERANCE)]
        tolerance: f64,

        /// Project vertices onto z = 0 (list format)
        #[arg(long)]
        flatten: bool,

        /// Append drawing boilerplate (list format)
        #[arg(long)]
        drawing: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Structured msh text (strict)
    Msh,
    /// List-of-lists script (lenient)
    List,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Msh => Format::Msh,
            OutputFormat::List => Format::List,
        }
    }
}

fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| format!("expected an edge like `0-1`, got `{s}`"))?;
    let a = a.trim().parse().map_err(|e| format!("bad vertex `{a}`: {e}"))?;
    let b = b.trim().parse().map_err(|e| format!("bad vertex `{b}`: {e}"))?;
    Ok((a, b))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Import { input, scene } => cmd_import(&input, &scene)?,

        Commands::Tag {
            scene,
            vertices,
            edges,
            faces,
            value,
        } => cmd_tag(&scene, vertices, edges, faces, value)?,

        Commands::Defaults {
            scene,
            vertex,
            edge,
            cell,
        } => cmd_defaults(&scene, vertex, edge, cell)?,

        Commands::Labels {
            scene,
            no_vertex,
            no_edge,
            no_cell,
        } => cmd_labels(&scene, !no_vertex, !no_edge, !no_cell)?,

        Commands::Info { scene } => cmd_info(&scene)?,

        Commands::Export {
            scene,
            output,
            format,
            tolerance,
            flatten,
            drawing,
        } => {
            let mut options = ExportOptions::default()
                .with_tolerance(tolerance)
                .with_flatten(flatten)
                .with_drawing(drawing);
            if let Some(format) = format {
                options = options.with_format(format.into());
            }
            cmd_export(&scene, &output, &options)?;
        }
    }

    Ok(())
}

fn cmd_import(input: &Path, scene_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (mesh, tags) = ply::load_tagged(input)?;
    println!("Loaded: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());

    let scene = Scene::with_tags(mesh, tags);
    scene.save(scene_path)?;
    println!("Saved: {}", scene_path.display());
    Ok(())
}

fn cmd_tag(
    scene_path: &Path,
    vertices: Vec<usize>,
    edges: Vec<(usize, usize)>,
    faces: Vec<usize>,
    value: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load(scene_path)?;
    let selection = Selection::new()
        .with_vertices(vertices)
        .with_edges(edges)
        .with_faces(faces);
    if selection.is_empty() {
        println!("Nothing selected");
        return Ok(());
    }

    let tagged = match value {
        Some(value) => {
            let mut total = 0;
            for kind in TagKind::ALL {
                if !selection.is_empty_for(kind) {
                    let value = TagDefaults::check(kind, value)?;
                    total += tags::tag_selected(&mut scene.tags, &scene.mesh, &selection, kind, value);
                }
            }
            total
        }
        None => tags::tag_selection(&mut scene.tags, &scene.mesh, &selection, &scene.defaults),
    };

    scene.save(scene_path)?;
    println!("Tagged {} feature(s)", tagged);
    Ok(())
}

fn cmd_defaults(
    scene_path: &Path,
    vertex: Option<i32>,
    edge: Option<i32>,
    cell: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load(scene_path)?;

    let updates = [(TagKind::Vertex, vertex), (TagKind::Edge, edge), (TagKind::Cell, cell)];
    let mut changed = false;
    for (kind, value) in updates {
        if let Some(value) = value {
            scene.defaults.set(kind, value)?;
            changed = true;
        }
    }
    if changed {
        scene.save(scene_path)?;
    }

    for kind in TagKind::ALL {
        let (min, max) = TagDefaults::range(kind);
        println!("{:<6} {:>5}  [{}, {}]", kind, scene.defaults.get(kind), min, max);
    }
    Ok(())
}

fn cmd_labels(
    scene_path: &Path,
    vertex: bool,
    edge: bool,
    cell: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(scene_path)?;
    let show = tags::ShowTags {
        vertex: vertex && scene.show.vertex,
        edge: edge && scene.show.edge,
        cell: cell && scene.show.cell,
    };

    for label in tags::tag_labels(&scene.mesh, &scene.tags, &show) {
        let p = label.position;
        println!("{:<6} {:>6}  ({:.4}, {:.4}, {:.4})", label.kind, label.text(), p.x, p.y, p.z);
    }
    Ok(())
}

fn cmd_info(scene_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(scene_path)?;
    let mesh = &scene.mesh;

    println!("File: {}", scene_path.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Edges: {}", mesh.edges().len());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    println!("Planar (z = 0): {}", if mesh.is_flat() { "yes" } else { "no" });

    let mut by_arity = std::collections::BTreeMap::new();
    for f in mesh.face_ids() {
        *by_arity.entry(mesh.face_vertices(f).len()).or_insert(0usize) += 1;
    }
    for (nodes, count) in &by_arity {
        println!("  {}-node faces: {}", nodes, count);
    }

    println!(
        "Tags: {} vertex, {} edge, {} cell",
        scene.tags.num_vertex_tags(),
        scene.tags.num_edge_tags(),
        scene.tags.num_face_tags()
    );
    Ok(())
}

fn cmd_export(
    scene_path: &Path,
    output: &Path,
    options: &ExportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(scene_path)?;
    println!(
        "Loaded: {} vertices, {} faces",
        scene.mesh.num_vertices(),
        scene.mesh.num_faces()
    );

    if let Some(format) = options.format.or_else(|| Format::from_path(output)) {
        for name in options.ignored_by(format) {
            eprintln!("Warning: --{} has no effect on {} output", name, format.extension());
        }
    }

    let start = Instant::now();
    let report = io::export(&scene.mesh, &scene.tags, output, options)?;
    let elapsed = start.elapsed();

    println!(
        "Saved: {} ({} points, {} cells, {} marked edges, {:.2?})",
        output.display(),
        report.points,
        report.cells,
        report.marked_edges,
        elapsed
    );
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(())
}
