//! Run configuration for the service wizard.
//!
//! The template and output locations are resolved once at process start and
//! threaded through `render`/`apply_feature` explicitly, so nothing about a
//! run hides in global state.

use crate::cli::Args;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Resolved locations for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the template set (contains base/, docker/, ci/, ...)
    pub template_root: PathBuf,
    /// Parent directory the generated project is created under
    pub output_parent: PathBuf,
}

impl Config {
    /// Builds a run configuration from parsed arguments.
    ///
    /// # Errors
    /// * `Error::MissingTemplateError` if the template set is not at the
    ///   expected location (an installation defect, fatal)
    pub fn from_args(args: &Args) -> Result<Self> {
        let template_root = args.template_dir.clone();
        if !template_root.is_dir() {
            return Err(Error::MissingTemplateError {
                template_dir: template_root.display().to_string(),
            });
        }
        debug!("Using template set at {}", template_root.display());

        Ok(Self { template_root, output_parent: args.output_dir.clone() })
    }

    /// Path of a named subtree inside the template set.
    pub fn subtree(&self, name: &str) -> PathBuf {
        self.template_root.join(name)
    }

    /// Destination directory for a project with the given name.
    pub fn output_root(&self, name_project: &str) -> PathBuf {
        self.output_parent.join(name_project)
    }
}

/// Validates that a destination is safe to generate into.
///
/// # Errors
/// * `Error::OutputExistsError` if the directory exists; the wizard never
///   overwrites a user's prior work
pub fn ensure_output_dir<P: AsRef<Path>>(output_root: P) -> Result<PathBuf> {
    let output_root = output_root.as_ref();
    if output_root.exists() {
        return Err(Error::OutputExistsError {
            output_dir: output_root.display().to_string(),
        });
    }
    Ok(output_root.to_path_buf())
}
