//! Command-line interface for visitorgen
//! Regenerates `AllNodesVisitor.h` from `NodesList.txt` in the working directory.
//!
//! Usage:
//!   gen-all-nodes-visitor                                  - Conventional paths, default template
//!   gen-all-nodes-visitor --input `<path>` --output `<path>` - Explicit paths
//!   gen-all-nodes-visitor --config `<file>`                  - Layer a TOML file over the defaults
//!   gen-all-nodes-visitor --stdout                         - Print the header instead of writing it

use clap::{Arg, ArgAction, ArgMatches, Command};
use visitorgen::{Generator, Outcome};
use visitorgen_config::{Loader, VisitorGenConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("gen-all-nodes-visitor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate the all-nodes visitor header from a list of AST node names")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Node list to read (default: NodesList.txt)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Header to write (default: AllNodesVisitor.h)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the header instead of writing the output file")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    let generator = Generator::from_config(&config);

    if matches.get_flag("stdout") {
        handle_print_command(&generator);
    } else {
        handle_generate_command(&generator);
    }
}

/// Embedded defaults, then `--config`, then the path flags
fn load_config(matches: &ArgMatches) -> visitorgen::Result<VisitorGenConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(input) = matches.get_one::<String>("input") {
        loader = loader.set_override("paths.input", input.as_str())?;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        loader = loader.set_override("paths.output", output.as_str())?;
    }
    Ok(loader.build()?)
}

/// Write the header; an empty node list is reported and skipped
fn handle_generate_command(generator: &Generator) {
    match generator.run() {
        Ok(Outcome::Written { path, node_count }) => {
            log::info!("generated {} ({} nodes)", path.display(), node_count);
        }
        Ok(Outcome::Skipped { input }) => {
            log::debug!("skipped generation, {} has no node names", input.display());
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_print_command(generator: &Generator) {
    match generator.render_only() {
        Ok(Some(header)) => print!("{}", header),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
