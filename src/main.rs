//! Rainbow Arcs CLI
//!
//! Usage:
//!   rainbow-arcs [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>      Configuration file (TOML format)
//!   -o, --output-dir <DIR>   Directory to write the SVG into
//!   --stdout                 Print the document instead of writing it
//!   -d, --debug              Print computed band geometry to stderr
//!   --strict                 Fail on degenerate geometry
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;

use rainbow_arcs::{
    compute_arcs, lint, render_document, write_document, Arc, RainbowConfig, RainbowError,
};

#[derive(Parser)]
#[command(name = "rainbow-arcs")]
#[command(about = "Generate a rainbow of nested Bezier arcs as an SVG file")]
struct Cli {
    /// Configuration file (TOML format); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write rainbow-{W}x{H}.svg into (defaults to the working directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Debug mode: print each band's points to stderr
    #[arg(short, long)]
    debug: bool,

    /// Treat geometry lint warnings as errors
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RainbowError> {
    let config = match &cli.config {
        Some(path) => RainbowConfig::from_file(path)?,
        None => RainbowConfig::default(),
    };

    let arcs = compute_arcs(&config);
    if cli.debug {
        print_arcs(&arcs);
    }

    let warnings = lint::check(&config, &arcs);
    if cli.strict && !warnings.is_empty() {
        return Err(RainbowError::Lint(warnings));
    }
    for warning in &warnings {
        eprintln!("{}", warning);
    }

    let svg = render_document(&config, &arcs);
    if cli.stdout {
        print!("{}", svg);
        return Ok(());
    }

    let dir = cli.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = write_document(&svg, &config, &dir)?;
    if cli.debug {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn print_arcs(arcs: &[Arc]) {
    eprintln!("=== Arc Debug ===");
    for (i, arc) in arcs.iter().enumerate() {
        eprintln!(
            "[{}] start=({}, {}) apex=({}, {}) end=({}, {}) c1=({}, {}) c2=({}, {}) c3=({}, {})",
            i,
            arc.start.x,
            arc.start.y,
            arc.apex.x,
            arc.apex.y,
            arc.end.x,
            arc.end.y,
            arc.control1.x,
            arc.control1.y,
            arc.control2.x,
            arc.control2.y,
            arc.control3.x,
            arc.control3.y
        );
    }
    eprintln!("=================");
}
