use service_wizard::error::Error;
use service_wizard::processor::{append_fragment, finalize_permissions, render_tree_into};
use service_wizard::renderer::{Bindings, TokenRenderer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Lays out a small template tree with tokens in contents, a file name and
/// a directory name.
fn make_template_tree(root: &Path) {
    fs::create_dir_all(root.join("{{name_project}}/settings")).unwrap();
    fs::write(root.join("README.md"), "# {{ display_name }}\n").unwrap();
    fs::write(root.join("{{name_project}}/settings/base.py"), "ROOT_URLCONF = '{{ name_project }}.urls'\n")
        .unwrap();
    fs::write(root.join("{{name_project}}/__init__.py"), "").unwrap();
}

#[test]
fn test_render_tree_substitutes_paths_and_contents() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    make_template_tree(template.path());
    let output_root = output.path().join("customer_service");

    let ctx = bindings(&[("name_project", "customer_service"), ("display_name", "Customer Service")]);
    render_tree_into(&TokenRenderer::new(), template.path(), &output_root, &ctx).unwrap();

    assert_eq!(
        fs::read_to_string(output_root.join("README.md")).unwrap(),
        "# Customer Service\n"
    );
    assert_eq!(
        fs::read_to_string(output_root.join("customer_service/settings/base.py")).unwrap(),
        "ROOT_URLCONF = 'customer_service.urls'\n"
    );
    assert!(output_root.join("customer_service/__init__.py").is_file());
}

#[test]
fn test_render_missing_template_root() {
    let output = TempDir::new().unwrap();

    let result = render_tree_into(
        &TokenRenderer::new(),
        Path::new("/nonexistent/template/root"),
        &output.path().join("out"),
        &Bindings::new(),
    );

    match result {
        Err(Error::MissingTemplateError { .. }) => (),
        other => panic!("Expected MissingTemplateError, got {:?}", other),
    }
}

#[test]
fn test_existing_output_dir_is_left_untouched() {
    use service_wizard::config::ensure_output_dir;

    let output = TempDir::new().unwrap();
    let existing = output.path().join("customer_service");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("precious.txt"), "do not overwrite").unwrap();

    match ensure_output_dir(&existing) {
        Err(Error::OutputExistsError { .. }) => (),
        other => panic!("Expected OutputExistsError, got {:?}", other),
    }
    assert_eq!(
        fs::read_to_string(existing.join("precious.txt")).unwrap(),
        "do not overwrite"
    );
}

#[test]
fn test_append_fragment_adds_separating_newline() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("settings.py");
    fs::write(&target, "DEBUG = True").unwrap();

    append_fragment(&target, "SWAGGER = True\n").unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "DEBUG = True\nSWAGGER = True\n"
    );
}

#[test]
fn test_append_fragment_creates_missing_target() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested/new.txt");

    append_fragment(&target, "content\n").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "content\n");
}

#[cfg(unix)]
#[test]
fn test_finalize_permissions_marks_scripts_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("scripts")).unwrap();
    let script = dir.path().join("scripts/run-tests.sh");
    fs::write(&script, "#!/bin/sh\n").unwrap();
    let regular = dir.path().join("README.md");
    fs::write(&regular, "# readme\n").unwrap();

    finalize_permissions(dir.path());

    let mode = fs::metadata(&script).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
    let mode = fs::metadata(&regular).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0, "non-scripts keep their permissions");
}
