//! Main application entry point and orchestration logic.
//! Parses command-line arguments, runs the wizard, renders the base tree,
//! applies the selected feature bundles and finalizes the output.

use service_wizard::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    features::apply_feature,
    processor::{finalize_permissions, render},
    prompt::{collect_inputs, collect_inputs_from, DialoguerPrompter},
    renderer::TokenRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn welcome() {
    println!("Welcome to the Buildly Core (Micro)Service wizard!");
    println!(
        r"
 _           _ _     _ _
| |__  _   _(_) | __| | |_   _
| '_ \| | | | | |/ _` | | | | |
| |_) | |_| | | | (_| | | |_| |
|_.__/ \__,_|_|_|\__,_|_|\__, |
                         |___/
"
    );
    println!("We will help you to set up a Micro or Right Size Service :)");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template set location
/// 2. Collects bindings and toggles (wizard or stdin answers)
/// 3. Renders the base tree into a fresh output directory
/// 4. Applies enabled feature bundles in their fixed order
/// 5. Marks generated shell scripts executable
fn run(args: Args) -> Result<()> {
    let renderer = TokenRenderer::new();
    let config = Config::from_args(&args)?;

    let (bindings, toggles) = if args.stdin {
        collect_inputs_from(std::io::stdin().lock())?
    } else {
        welcome();
        collect_inputs(&DialoguerPrompter::new())?
    };

    let name_project = bindings.get("name_project").map(String::as_str).unwrap_or_default();
    let output_root = config.output_root(name_project);

    render(&config, &renderer, &bindings, &output_root)?;
    println!("The service \"{}\" was successfully created", name_project);

    for feature in toggles.enabled() {
        apply_feature(feature, &config, &renderer, &output_root, &bindings)?;
        println!("{} support was successfully added", feature);
    }

    finalize_permissions(&output_root);

    println!(
        "Great! Now you can find your new service in \"{}\"",
        output_root.display()
    );
    Ok(())
}
