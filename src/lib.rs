//! Mindboggle VM configurator - generates a Vagrantfile for the Mindboggle
//! virtual machine
//!
//! This library resolves a handful of host directory paths and resource
//! limits from command-line overrides, an optional settings file, and the
//! process environment, then renders them into the Vagrant configuration
//! consumed by `vagrant up`.
//!
//! # Example
//!
//! ```rust
//! use std::path::PathBuf;
//! use mindboggle_vagrant::{vagrantfile, Environment, Overrides, Settings, SettingsFile};
//!
//! let env = Environment {
//!     home: PathBuf::from("/home/arno"),
//!     subjects_dir: Some(PathBuf::from("/data/subjects")),
//! };
//! let settings = Settings::resolve(Overrides::default(), SettingsFile::default(), &env).unwrap();
//! let text = vagrantfile::render(&settings);
//!
//! assert!(text.contains("Vagrant.configure"));
//! assert!(text.contains("/home/arno/mindboggled"));
//! ```

pub mod environment;
pub mod settings;
pub mod vagrantfile;

pub use environment::{Environment, EnvironmentError};
pub use settings::{Overrides, Settings, SettingsError, SettingsFile};
pub use vagrantfile::{render, VAGRANTFILE_NAME};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during the generate pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error while resolving settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error while writing the Vagrantfile
    #[error("could not write Vagrantfile: {0}")]
    Write(#[from] std::io::Error),
}

/// Resolve settings and write the Vagrantfile into `dir`.
///
/// This is the main entry point for the library and the only operation
/// with a side effect. Resolution failures surface before the file is
/// touched; on success the previous artifact, if any, is fully replaced.
pub fn generate(
    overrides: Overrides,
    file: SettingsFile,
    env: &Environment,
    dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let settings = Settings::resolve(overrides, file, env)?;
    let path = vagrantfile::write(&settings, dir)?;
    Ok(path)
}
