//! service-wizard scaffolds a new Buildly (micro)service from the template
//! set shipped with the tool. It runs a fixed wizard, then renders the
//! templates into a fresh directory tree with placeholder substitution.

/// Command-line interface module
pub mod cli;

/// Run configuration: template and output locations, resolved once
pub mod config;

/// Common constants used across modules
pub mod constants;

/// Error types and handling for the wizard
pub mod error;

/// Feature toggles and their template bundles
/// (Docker, CI, Docker registry, Swagger docs)
pub mod features;

/// Core tree rendering and output finalization
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder token substitution
pub mod renderer;
