//! User input and interaction handling.
//!
//! The wizard runs a fixed, ordered sequence of prompts and produces the
//! variable bindings and feature toggles for a run. Answers can also be
//! supplied non-interactively as a JSON object on stdin.

use crate::constants::MAX_PROMPT_RETRIES;
use crate::error::{Error, Result};
use crate::features::Toggles;
use crate::renderer::Bindings;
use dialoguer::{Confirm, Input};
use serde::Deserialize;
use std::io::Read;

/// Trait for interactive prompters, so the wizard can be driven by a
/// scripted implementation in tests.
pub trait Prompter {
    /// Asks for a line of text; an empty reply takes the default.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Console prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::ValidationError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::ValidationError(e.to_string()))
    }
}

/// Checks a service or application name against module-naming rules:
/// non-empty, no path separators, no leading digit, word characters only.
pub fn validate_identifier(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.contains('/') || value.contains('\\') {
        return Err("must not contain path separators".to_string());
    }
    if value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err("must not start with a digit".to_string());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("may only contain letters, digits and underscores".to_string());
    }
    Ok(())
}

fn validate_non_empty(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Asks until the validator accepts the reply, re-prompting on bad input
/// up to the retry cap.
fn ask_validated(
    prompter: &dyn Prompter,
    prompt: &str,
    default: &str,
    validate: fn(&str) -> std::result::Result<(), String>,
) -> Result<String> {
    for _ in 0..MAX_PROMPT_RETRIES {
        let value = prompter.input(prompt, default)?;
        match validate(&value) {
            Ok(()) => return Ok(value),
            Err(reason) => eprintln!("Invalid value: {}. Please try again.", reason),
        }
    }
    Err(Error::ValidationError(format!(
        "no valid answer for '{}' after {} attempts",
        prompt, MAX_PROMPT_RETRIES
    )))
}

/// Derives a human-readable display name from a module-style service name,
/// e.g. `customer_service` becomes `Customer Service`.
pub fn display_name_from(name_project: &str) -> String {
    name_project
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_bindings(
    name_project: String,
    name_app: String,
    display_name: String,
    description: String,
    registry: Option<(String, String)>,
) -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert("name_project".to_string(), name_project.clone());
    bindings.insert("name_app".to_string(), name_app);
    bindings.insert("display_name".to_string(), display_name);
    bindings.insert("description".to_string(), description);
    if let Some((domain, folder)) = registry {
        let registry_url = format!("{}/{}/{}", domain, folder, name_project);
        bindings.insert("registry_domain".to_string(), domain);
        bindings.insert("registry_folder".to_string(), folder);
        bindings.insert("registry_url".to_string(), registry_url);
    }
    bindings
}

/// Runs the ordered prompt sequence and returns the immutable bindings and
/// feature toggles for this run.
///
/// # Errors
/// * `Error::ValidationError` once the retry budget for a required field is
///   exhausted; individual bad answers are re-asked, not fatal
pub fn collect_inputs(prompter: &dyn Prompter) -> Result<(Bindings, Toggles)> {
    let name_project = ask_validated(
        prompter,
        "Name of your service (e.g.: appointments_service)",
        "appointments_service",
        validate_identifier,
    )?;
    let name_app = ask_validated(
        prompter,
        "Name of your application (e.g.: appointment)",
        "appointment",
        validate_identifier,
    )?;

    let docker = prompter.confirm("Add Docker support?", false)?;
    let ci = prompter.confirm("Add CI test support?", false)?;
    let swagger = prompter.confirm("Add Swagger docs?", true)?;

    let display_name = prompter.input(
        "Displayed name of your service (e.g.: Appointment Service)",
        &display_name_from(&name_project),
    )?;
    let description = prompter.input("Description of your service", "")?;

    let registry = if docker && ci {
        prompter.confirm("Add Docker registry support to CI?", false)?
    } else {
        false
    };
    let registry_values = if registry {
        let domain = ask_validated(
            prompter,
            "Domain of the registry (e.g.: hub.docker.com)",
            "hub.docker.com",
            validate_non_empty,
        )?;
        let folder = ask_validated(
            prompter,
            "Folder of the registry (e.g.: buildly)",
            "buildly",
            validate_non_empty,
        )?;
        Some((domain, folder))
    } else {
        None
    };

    let toggles = Toggles { docker, ci, registry, swagger };
    let bindings =
        build_bindings(name_project, name_app, display_name, description, registry_values);
    Ok((bindings, toggles))
}

fn default_swagger() -> bool {
    true
}

/// Answers payload accepted on stdin in place of the interactive wizard.
#[derive(Debug, Deserialize)]
pub struct Answers {
    pub name_project: String,
    pub name_app: String,
    #[serde(default)]
    pub docker: bool,
    #[serde(default)]
    pub ci: bool,
    #[serde(default = "default_swagger")]
    pub swagger: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub registry_domain: Option<String>,
    #[serde(default)]
    pub registry_folder: Option<String>,
}

/// Builds bindings and toggles from a JSON answers object.
///
/// There is no terminal to re-ask on, so validation failures are
/// immediately fatal here.
pub fn collect_inputs_from(reader: impl Read) -> Result<(Bindings, Toggles)> {
    let answers: Answers = serde_json::from_reader(reader)
        .map_err(|e| Error::AnswersError(e.to_string()))?;

    validate_identifier(&answers.name_project)
        .map_err(|reason| Error::ValidationError(format!("name_project {}", reason)))?;
    validate_identifier(&answers.name_app)
        .map_err(|reason| Error::ValidationError(format!("name_app {}", reason)))?;

    let registry_values = match (answers.registry_domain, answers.registry_folder) {
        (Some(domain), Some(folder)) if answers.docker && answers.ci => {
            validate_non_empty(&domain)
                .map_err(|reason| Error::ValidationError(format!("registry_domain {}", reason)))?;
            validate_non_empty(&folder)
                .map_err(|reason| Error::ValidationError(format!("registry_folder {}", reason)))?;
            Some((domain, folder))
        }
        _ => None,
    };

    let toggles = Toggles {
        docker: answers.docker,
        ci: answers.ci,
        registry: registry_values.is_some(),
        swagger: answers.swagger,
    };
    let display_name = answers
        .display_name
        .unwrap_or_else(|| display_name_from(&answers.name_project));
    let bindings = build_bindings(
        answers.name_project,
        answers.name_app,
        display_name,
        answers.description,
        registry_values,
    );
    Ok((bindings, toggles))
}
