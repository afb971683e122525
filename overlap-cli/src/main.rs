//! CLI for grouping overlapping shapes.
//!
//! Provides:
//! - Batch analysis: shape descriptors (JSON) in, recolored shapes and overlap groups (JSON) out
//! - Pairwise overlap checks between two shapes of an input file
//! - Boundary dumps, including the polygonal approximation of circles

use std::{fs, io, path::{Path, PathBuf}};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use overlap_core::{overlaps, parse_log_level, Config, Entry, Scene};

/// Package version plus the git revision the binary was built from.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("OVERLAPS_BUILD_SHA"), ")");

#[derive(Parser)]
#[command(name = "overlaps")]
#[command(version = VERSION)]
#[command(about = "Group overlapping circles and polygons", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group overlapping shapes and assign group colors
    Analyze {
        /// Input shapes (JSON array; "-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run the pairwise overlap scan in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Check whether two shapes overlap, in both argument orders
    Pair {
        /// Input shapes (JSON array; "-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the first shape
        a: String,

        /// Id of the second shape
        b: String,
    },

    /// Print a shape's boundary vertices
    Boundary {
        /// Input shapes (JSON array; "-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Shape id
        id: String,

        /// Config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of points approximating a circle
        #[arg(short, long)]
        resolution: Option<usize>,
    },
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read stdin")
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(json).context("Failed to parse shapes")
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => serde_json::from_str(&read_input(path)?)
            .with_context(|| format!("Failed to parse config {}", path.display()))?,
        None => Config::default(),
    };
    Ok(config)
}

fn find<'a>(entries: &'a [Entry], id: &str) -> Result<&'a Entry> {
    entries.iter().find(|e| e.id == id).ok_or_else(|| anyhow!("No shape with id {:?}", id))
}

fn analyze(entries: &[Entry], config: &Config) -> Result<String> {
    config.validate()?;
    let scene = Scene::new(entries, config);
    info!("{} shapes, {} overlap groups (overlaps {})", scene.total_count, scene.groups.len(), VERSION);
    Ok(serde_json::to_string_pretty(&scene)?)
}

fn pair(entries: &[Entry], a: &str, b: &str) -> Result<(bool, bool)> {
    let a = find(entries, a)?;
    let b = find(entries, b)?;
    Ok((overlaps(&a.shape, &b.shape), overlaps(&b.shape, &a.shape)))
}

fn boundary(entries: &[Entry], id: &str, config: &Config) -> Result<String> {
    config.validate()?;
    let entry = find(entries, id)?;
    let vertices = entry.shape.vertices(config.circle_resolution);
    Ok(serde_json::to_string_pretty(&vertices)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level.as_deref() {
        let level = parse_log_level(Some(level)).map_err(|e| anyhow!("{}: {:?}", e, level))?;
        logger.filter_level(level);
    }
    logger.init();
    debug!("overlaps {}", VERSION);

    match cli.command {
        Commands::Analyze { input, config, output, parallel } => {
            let entries = parse_entries(&read_input(&input)?)?;
            let mut config = load_config(config.as_deref())?;
            config.parallel |= parallel;
            let json = analyze(&entries, &config)?;
            match output {
                Some(path) => fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        Commands::Pair { input, a, b } => {
            let entries = parse_entries(&read_input(&input)?)?;
            let (ab, ba) = pair(&entries, &a, &b)?;
            println!("{} ~ {}: {}", a, b, ab);
            println!("{} ~ {}: {}", b, a, ba);
        }
        Commands::Boundary { input, id, config, resolution } => {
            let entries = parse_entries(&read_input(&input)?)?;
            let mut config = load_config(config.as_deref())?;
            if let Some(resolution) = resolution {
                config.circle_resolution = resolution;
            }
            println!("{}", boundary(&entries, &id, &config)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_log::test;

    const SHAPES: &str = r##"[
        { "type": "circle", "id": "circle1", "color": "#101010", "center": { "x": 0, "y": 0 }, "radius": 5 },
        { "type": "circle", "id": "circle2", "color": "#202020", "center": { "x": 8, "y": 0 }, "radius": 5 },
        { "type": "circle", "id": "circle3", "color": "#303030", "center": { "x": 20, "y": 0 }, "radius": 5 },
        { "type": "regularPolygon", "id": "tri", "color": "#404040", "center": { "x": 20, "y": 9 }, "radius": 3,
          "sides": 3, "rotationAngle": 0 }
    ]"##;

    #[test]
    fn cli_definition() {
        Cli::command().debug_assert();
        let version = Cli::command().render_version();
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(env!("OVERLAPS_BUILD_SHA")));
    }

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["overlaps", "analyze", "-i", "shapes.json", "--parallel", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Analyze { input, config, output, parallel } => {
                assert_eq!(input, PathBuf::from("shapes.json"));
                assert_eq!(config, None);
                assert_eq!(output, None);
                assert!(parallel);
            }
            _ => panic!("Expected analyze"),
        }
        let cli = Cli::try_parse_from(["overlaps", "pair", "-i", "-", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Pair { a, b, .. } if a == "a" && b == "b"));
        assert!(Cli::try_parse_from(["overlaps", "boundary", "-i", "x.json"]).is_err());
    }

    #[test]
    fn analyze_json() {
        let entries = parse_entries(SHAPES).unwrap();
        let json = analyze(&entries, &Config::default()).unwrap();
        let scene: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(scene["totalCount"], 4);
        assert_eq!(
            scene["overlapGroups"],
            serde_json::json!([{ "shapeIds": ["circle1", "circle2"], "color": "#FF0000", "size": 2 }])
        );
        assert_eq!(scene["shapes"][2]["color"], "#303030");
    }

    #[test]
    fn analyze_rejects_bad_config() {
        let entries = parse_entries(SHAPES).unwrap();
        let config = Config { circle_resolution: 1, ..Config::default() };
        assert!(analyze(&entries, &config).is_err());
    }

    #[test]
    fn bad_input() {
        assert!(parse_entries(r##"[{ "type": "circle", "id": "x", "color": "#000000", "center": { "x": 0, "y": 0 }, "radius": 0 }]"##).is_err());
        assert!(parse_entries(r##"[{ "type": "hexagon", "id": "x", "color": "#000000" }]"##).is_err());
    }

    #[test]
    fn pairs() {
        let entries = parse_entries(SHAPES).unwrap();
        assert_eq!(pair(&entries, "circle1", "circle2").unwrap(), (true, true));
        assert_eq!(pair(&entries, "circle1", "circle3").unwrap(), (false, false));
        assert_eq!(pair(&entries, "tri", "circle3").unwrap(), (false, false));
        assert!(pair(&entries, "circle1", "nope").is_err());
    }

    #[test]
    fn boundaries() {
        let entries = parse_entries(SHAPES).unwrap();
        let config = Config { circle_resolution: 8, ..Config::default() };
        let vertices: Vec<serde_json::Value> = serde_json::from_str(&boundary(&entries, "circle1", &config).unwrap()).unwrap();
        assert_eq!(vertices.len(), 8);
        let vertices: Vec<serde_json::Value> = serde_json::from_str(&boundary(&entries, "tri", &config).unwrap()).unwrap();
        assert_eq!(vertices.len(), 3);
    }
}
