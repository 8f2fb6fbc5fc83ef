//! Core tree rendering: walks a template subtree and materializes it in the
//! output tree, substituting placeholder tokens in directory names, file
//! names and file contents.

use crate::config::{ensure_output_dir, Config};
use crate::constants::BASE_TREE;
use crate::error::{Error, Result};
use crate::renderer::{Bindings, TemplateRenderer};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Renders the unconditional base tree of the template set into a fresh
/// output directory.
///
/// # Errors
/// * `Error::MissingTemplateError` if the base subtree is absent
/// * `Error::OutputExistsError` if the destination already exists; the
///   existing directory is left untouched
pub fn render(
    config: &Config,
    renderer: &dyn TemplateRenderer,
    bindings: &Bindings,
    output_root: &Path,
) -> Result<()> {
    ensure_output_dir(output_root)?;
    render_tree_into(renderer, &config.subtree(BASE_TREE), output_root, bindings)
}

/// Walks `template_root` and writes the substituted tree under
/// `output_root`, which may already contain previously generated files
/// (feature subtrees land on top of the base tree).
pub fn render_tree_into(
    renderer: &dyn TemplateRenderer,
    template_root: &Path,
    output_root: &Path,
    bindings: &Bindings,
) -> Result<()> {
    if !template_root.is_dir() {
        return Err(Error::MissingTemplateError {
            template_dir: template_root.display().to_string(),
        });
    }

    for entry in WalkDir::new(template_root) {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let path = entry.path();
        let relative = path
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let relative = relative
            .to_str()
            .ok_or_else(|| Error::TemplateError(format!("non UTF-8 path: {}", path.display())))?;

        let target = output_root.join(renderer.render(relative, bindings));
        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target.display());
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            debug!("Writing file: {}", target.display());
            let content = fs::read_to_string(path).map_err(Error::IoError)?;
            write_file(&target, &renderer.render(&content, bindings))?;
        }
    }
    Ok(())
}

/// Appends a rendered fragment to a target file, creating it if needed.
/// A separating newline is inserted when the target does not end with one.
pub fn append_fragment(target: &Path, content: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    let mut combined = if target.is_file() {
        fs::read_to_string(target).map_err(Error::IoError)?
    } else {
        String::new()
    };
    if !combined.is_empty() && !combined.ends_with('\n') {
        combined.push('\n');
    }
    combined.push_str(content);
    fs::write(target, combined).map_err(Error::IoError)
}

/// Marks generated shell scripts as executable.
///
/// Side effect only: a filesystem that refuses the permission bit does not
/// corrupt the generated project, so failures are downgraded to warnings.
pub fn finalize_permissions(output_root: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        for entry in WalkDir::new(output_root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "sh") {
                if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o755)) {
                    warn!("Could not mark {} as executable: {}", path.display(), err);
                }
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = output_root;
        warn!("Executable bits are not supported on this platform; shell scripts keep default permissions");
    }
}
