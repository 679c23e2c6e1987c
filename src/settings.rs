//! Settings resolution for the generated virtual machine
//!
//! Every value the Vagrantfile needs comes from one of three layers, in
//! order of precedence: a command-line flag, an optional TOML settings
//! file, and a default derived from the captured [`Environment`]. Each
//! field resolves independently.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::environment::Environment;

/// Default number of virtual CPUs
pub const DEFAULT_CPUS: u32 = 1;
/// Default per-CPU utilization cap, in percent
pub const DEFAULT_CPU_CAP: u32 = 80;
/// Default guest memory allocation, in MB
pub const DEFAULT_MEMORY_MB: u32 = 4096;

/// Home-relative directory names used when the corresponding flag is absent
const OUT_DIR_NAME: &str = "mindboggled";
const WORK_DIR_NAME: &str = "mindboggle_working";
const CACHE_DIR_NAME: &str = "mindboggle_cache";

/// Errors that can occur while resolving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("no FreeSurfer subjects directory: pass --freesurfer or set SUBJECTS_DIR")]
    SubjectsDirUnset,
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Optional values taken verbatim from the command line
///
/// A `None` field means the flag was not given and the next layer decides.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out: Option<PathBuf>,
    pub work: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    pub freesurfer: Option<PathBuf>,
    pub ants: Option<PathBuf>,
    pub atlases: Option<PathBuf>,
    pub cpus: Option<u32>,
    pub cpumax: Option<u32>,
    pub mem: Option<u32>,
}

/// TOML settings file carrying the same fields as the CLI, all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    pub out: Option<PathBuf>,
    pub work: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    pub freesurfer: Option<PathBuf>,
    pub ants: Option<PathBuf>,
    pub atlases: Option<PathBuf>,
    pub cpus: Option<u32>,
    pub cpumax: Option<u32>,
    pub mem: Option<u32>,
}

impl SettingsFile {
    /// Load a settings file from disk
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a settings file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

/// Fully resolved settings for one invocation
///
/// Construction goes through [`Settings::resolve`]; after that the record
/// is plain data with no further defaulting behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Host directory mounted for Mindboggle output
    pub out: PathBuf,
    /// Host directory for intermediate working files
    pub work: PathBuf,
    /// Host directory for downloaded data
    pub cache: PathBuf,
    /// FreeSurfer subjects directory on the host
    pub freesurfer: PathBuf,
    /// ANTs subjects directory; no mount is emitted when absent
    pub ants: Option<PathBuf>,
    /// Extra atlases directory; no mount is emitted when absent
    pub atlases: Option<PathBuf>,
    /// Number of virtual CPUs allocated to the guest
    pub cpus: u32,
    /// Per-CPU utilization cap, in percent
    pub cpumax: u32,
    /// Guest memory allocation, in MB
    pub mem: u32,
}

impl Settings {
    /// Resolve settings from the three layers: flags, file, environment.
    ///
    /// The only resolution that can fail is the FreeSurfer subjects
    /// directory: with no flag, no file entry, and no `SUBJECTS_DIR`,
    /// there is nothing sensible to mount and resolution stops before
    /// any output is written.
    pub fn resolve(
        overrides: Overrides,
        file: SettingsFile,
        env: &Environment,
    ) -> Result<Self, SettingsError> {
        let freesurfer = overrides
            .freesurfer
            .or(file.freesurfer)
            .or_else(|| env.subjects_dir.clone())
            .ok_or(SettingsError::SubjectsDirUnset)?;

        Ok(Settings {
            out: overrides
                .out
                .or(file.out)
                .unwrap_or_else(|| env.home.join(OUT_DIR_NAME)),
            work: overrides
                .work
                .or(file.work)
                .unwrap_or_else(|| env.home.join(WORK_DIR_NAME)),
            cache: overrides
                .cache
                .or(file.cache)
                .unwrap_or_else(|| env.home.join(CACHE_DIR_NAME)),
            freesurfer,
            ants: overrides.ants.or(file.ants),
            atlases: overrides.atlases.or(file.atlases),
            cpus: overrides.cpus.or(file.cpus).unwrap_or(DEFAULT_CPUS),
            cpumax: overrides.cpumax.or(file.cpumax).unwrap_or(DEFAULT_CPU_CAP),
            mem: overrides.mem.or(file.mem).unwrap_or(DEFAULT_MEMORY_MB),
        })
    }
}
