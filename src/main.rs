//! Mindboggle VM configurator CLI
//!
//! Usage:
//!   mindboggle-vagrant [OPTIONS]
//!
//! Options:
//!   --out <DIR>         Host directory for Mindboggle output
//!   --work <DIR>        Host directory for intermediate working files
//!   --cache <DIR>       Host directory for downloaded data
//!   --freesurfer <DIR>  FreeSurfer subjects directory (default: $SUBJECTS_DIR)
//!   --ants <DIR>        ANTs subjects directory
//!   --atlases <DIR>     Extra atlases directory
//!   --cpus <N>          Number of virtual CPUs
//!   --cpumax <N>        Per-CPU utilization cap, percent
//!   --mem <N>           Guest memory in MB
//!   -s, --settings <FILE>  Settings file with defaults (TOML format)
//!   -h, --help          Print help

use std::path::{Path, PathBuf};

use clap::Parser;

use mindboggle_vagrant::{generate, Environment, Overrides, SettingsFile};

#[derive(Parser)]
#[command(name = "mindboggle-vagrant")]
#[command(about = "Generate a Vagrantfile for the Mindboggle virtual machine")]
struct Cli {
    /// Host directory mounted for Mindboggle output
    #[arg(long)]
    out: Option<PathBuf>,

    /// Host directory for intermediate working files
    #[arg(long)]
    work: Option<PathBuf>,

    /// Host directory for downloaded data
    #[arg(long)]
    cache: Option<PathBuf>,

    /// FreeSurfer subjects directory (defaults to $SUBJECTS_DIR)
    #[arg(long)]
    freesurfer: Option<PathBuf>,

    /// ANTs subjects directory (mount omitted if not given)
    #[arg(long)]
    ants: Option<PathBuf>,

    /// Extra atlases directory (mount omitted if not given)
    #[arg(long)]
    atlases: Option<PathBuf>,

    /// Number of virtual CPUs
    #[arg(long)]
    cpus: Option<u32>,

    /// Per-CPU utilization cap, percent
    #[arg(long)]
    cpumax: Option<u32>,

    /// Guest memory in MB
    #[arg(long)]
    mem: Option<u32>,

    /// Settings file with defaults for any of the above (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

fn setup_logging() {
    let mut builder =
        &mut env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if std::env::var("RUST_LOG").is_err() {
        // Simplify log format
        builder = builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging();

    // Load settings file
    let file = match &cli.settings {
        Some(path) => match SettingsFile::from_file(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SettingsFile::default(),
    };

    // Capture environment state once
    let env = match Environment::from_process() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let overrides = Overrides {
        out: cli.out,
        work: cli.work,
        cache: cli.cache,
        freesurfer: cli.freesurfer,
        ants: cli.ants,
        atlases: cli.atlases,
        cpus: cli.cpus,
        cpumax: cli.cpumax,
        mem: cli.mem,
    };

    match generate(overrides, file, &env, Path::new(".")) {
        Ok(_) => {
            println!("Run 'vagrant up' in this directory to launch the virtual machine.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
