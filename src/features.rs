//! Feature toggles and their template bundles.
//!
//! Each toggle maps to one named bundle: an optional subtree copied into the
//! output tree plus an optional directory of fragments appended to already
//! generated files. Adding a toggle means adding one bundle entry, not
//! editing control flow elsewhere. Bundles are applied in the fixed order of
//! the table, so appended fragments land in a deterministic sequence no
//! matter how the user answered.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::processor::{append_fragment, render_tree_into};
use crate::renderer::{Bindings, TemplateRenderer};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Feature choices made during the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggles {
    pub docker: bool,
    pub ci: bool,
    pub registry: bool,
    pub swagger: bool,
}

impl Toggles {
    /// Names of the enabled features, in application order.
    pub fn enabled(&self) -> Vec<&'static str> {
        BUNDLES
            .iter()
            .filter(|bundle| match bundle.name {
                "docker" => self.docker,
                "ci" => self.ci,
                "registry" => self.registry,
                "swagger" => self.swagger,
                _ => false,
            })
            .map(|bundle| bundle.name)
            .collect()
    }
}

struct Bundle {
    name: &'static str,
    /// Template subtree copied on top of the output tree
    tree: Option<&'static str>,
    /// Directory of fragments appended to their rendered relative targets
    fragments: Option<&'static str>,
}

/// The closed set of feature bundles, in application order.
const BUNDLES: &[Bundle] = &[
    Bundle { name: "docker", tree: Some("docker/tree"), fragments: Some("docker/fragments") },
    Bundle { name: "ci", tree: Some("ci/tree"), fragments: None },
    Bundle { name: "registry", tree: None, fragments: Some("registry/fragments") },
    Bundle { name: "swagger", tree: None, fragments: Some("swagger/fragments") },
];

/// Applies one feature bundle to an already rendered output tree.
///
/// # Errors
/// * `Error::UnknownFeatureError` for a name outside the bundle table.
///   Unreachable from the wizard, which only hands out names it knows.
/// * `Error::MissingTemplateError` if the bundle's subtree or fragments
///   directory is absent from the template set
pub fn apply_feature(
    name: &str,
    config: &Config,
    renderer: &dyn TemplateRenderer,
    output_root: &Path,
    bindings: &Bindings,
) -> Result<()> {
    let bundle = BUNDLES
        .iter()
        .find(|bundle| bundle.name == name)
        .ok_or_else(|| Error::UnknownFeatureError { feature: name.to_string() })?;

    if let Some(tree) = bundle.tree {
        debug!("Copying '{}' subtree into {}", name, output_root.display());
        render_tree_into(renderer, &config.subtree(tree), output_root, bindings)?;
    }

    if let Some(fragments) = bundle.fragments {
        append_fragments(renderer, &config.subtree(fragments), output_root, bindings)?;
    }

    Ok(())
}

/// Walks a fragments directory and appends each rendered fragment to the
/// file at its rendered relative path inside the output tree.
fn append_fragments(
    renderer: &dyn TemplateRenderer,
    fragments_root: &Path,
    output_root: &Path,
    bindings: &Bindings,
) -> Result<()> {
    if !fragments_root.is_dir() {
        return Err(Error::MissingTemplateError {
            template_dir: fragments_root.display().to_string(),
        });
    }

    for entry in WalkDir::new(fragments_root) {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path
            .strip_prefix(fragments_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?
            .to_str()
            .ok_or_else(|| Error::TemplateError(format!("non UTF-8 path: {}", path.display())))?;

        let target = output_root.join(renderer.render(relative, bindings));
        debug!("Appending fragment to {}", target.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        append_fragment(&target, &renderer.render(&content, bindings))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_order_is_fixed() {
        let toggles = Toggles { docker: true, ci: true, registry: true, swagger: true };
        assert_eq!(toggles.enabled(), vec!["docker", "ci", "registry", "swagger"]);

        let toggles = Toggles { swagger: true, docker: true, ..Toggles::default() };
        assert_eq!(toggles.enabled(), vec!["docker", "swagger"]);
    }

    #[test]
    fn test_nothing_enabled_by_default() {
        assert!(Toggles::default().enabled().is_empty());
    }
}
