//! Ambient process state the generator depends on
//!
//! Everything read from the process environment is captured here, once, at
//! startup. Rendering and settings resolution receive an [`Environment`]
//! value instead of touching globals, so tests can inject fabricated home
//! and subjects directories.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while capturing the environment
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("could not determine a home directory for the current user")]
    HomeNotFound,
}

/// Snapshot of the environment state consulted during defaulting
#[derive(Debug, Clone)]
pub struct Environment {
    /// Home directory of the invoking user
    pub home: PathBuf,
    /// Value of `SUBJECTS_DIR`, if set
    pub subjects_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the real process environment
    pub fn from_process() -> Result<Self, EnvironmentError> {
        let home = dirs::home_dir().ok_or(EnvironmentError::HomeNotFound)?;
        let subjects_dir = env::var_os("SUBJECTS_DIR").map(PathBuf::from);
        Ok(Environment { home, subjects_dir })
    }
}
