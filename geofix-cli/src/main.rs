//! Command-line interface for geofix
//! Normalizes the `.geo` script a CAD mesh export left in its scratch directory.
//!
//! Usage:
//!   geofix `<base>` `<shape>` [--config `<file>`] [--scratch-dir `<dir>`] [--output-dir `<dir>`] [--report]
//!   geofix `<base>` --script `<file>`     - Normalize a script file and print it to stdout

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use geofix_config::{GeofixConfig, Loader};
use geofix_core::{normalize_script, Normalizer};

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "geofix.toml";

fn cli() -> Command {
    Command::new("geofix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize FreeCAD-generated Gmsh .geo scripts for batch meshing")
        .arg_required_else_help(true)
        .arg(
            Arg::new("base")
                .help("Output base name; writes <base>.geo and <base>.brep")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("shape")
                .help("Shape identifier used to name the exported geometry (e.g. 'Cut')")
                .required_unless_present("script")
                .index(2),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .short('s')
                .help("Normalize this script file and print the result instead of relocating artifacts")
                .conflicts_with_all(["shape", "report"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("scratch-dir")
                .long("scratch-dir")
                .help("Directory holding the exported script and geometry"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory to write <base>.geo and <base>.brep into"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Print a JSON summary of the run to stdout")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    logging::init_tracing();
    let matches = cli().get_matches();

    let base = matches
        .get_one::<String>("base")
        .expect("base is a required argument");

    if let Some(script) = matches.get_one::<String>("script") {
        handle_script_command(script, base);
        return;
    }

    let shape = matches
        .get_one::<String>("shape")
        .expect("shape is required unless --script is given");
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    handle_normalize_command(&config, base, shape, matches.get_flag("report"));
}

fn load_config(matches: &ArgMatches) -> Result<GeofixConfig, geofix_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dir) = matches.get_one::<String>("scratch-dir") {
        loader = loader.set_override("scratch.dir", dir.as_str())?;
    }
    if let Some(dir) = matches.get_one::<String>("output-dir") {
        loader = loader.set_override("output.dir", dir.as_str())?;
    }
    loader.build()
}

/// Handle the artifact normalization command
fn handle_normalize_command(config: &GeofixConfig, base: &str, shape: &str, report: bool) {
    let normalizer = Normalizer::new(config.artifact_paths());
    let summary = normalizer.run(base, shape).unwrap_or_else(|e| {
        eprintln!("Normalization error: {}", e);
        std::process::exit(1);
    });

    if report {
        let json = serde_json::to_string_pretty(&summary).unwrap_or_else(|e| {
            eprintln!("Error formatting report: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
    }
}

/// Handle the in-memory script command
fn handle_script_command(path: &str, base: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let output = normalize_script(&source, base).unwrap_or_else(|e| {
        eprintln!("Normalization error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}
