use glasspane::{KindRegistry, ShellConfig, UiError};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: glasspane-check <manifest.yaml>");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  glasspane-check kinds.yaml");
        eprintln!("  glasspane-check shell.yaml kinds.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;
    let files: Vec<_> = args[1..].to_vec();

    for file_path in files {
        match validate_file(&file_path) {
            Ok(()) => {
                println!("✓ {} is valid", file_path);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &str) -> Result<(), UiError> {
    let content = fs::read_to_string(path)
        .map_err(|e| UiError::ValidationError(format!("Failed to read file: {}", e)))?;

    // Shell configs have top-level "features:"/"extensions:" keys; kind
    // manifests are a sequence of kind specs.
    let is_shell_config = content
        .lines()
        .any(|l| l.starts_with("features:") || l.starts_with("extensions:"));

    if is_shell_config {
        ShellConfig::from_yaml(&content)?;
    } else {
        KindRegistry::from_yaml(&content)?;
    }
    Ok(())
}

fn print_error(error: &UiError) {
    match error {
        UiError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        UiError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        UiError::InvalidKindName { kind } => {
            eprintln!("  Invalid kind name '{}':", kind);
            eprintln!("    Kind names must be PascalCase");
        }
        UiError::DuplicateKind { kind } => {
            eprintln!("  Component kind '{}' is registered twice", kind);
        }
        UiError::MissingViewPath { component } => {
            eprintln!("  '{}' has no view path", component);
            eprintln!("    Every kind must declare the template it renders");
        }
        UiError::InvalidRoute { route } => {
            eprintln!("  Invalid route '{}':", route);
            eprintln!("    Expected 'controller/action' in lowercase snake_case");
        }
        UiError::InvalidComponentId { id } => {
            eprintln!("  Invalid id '{}':", id);
            eprintln!("    Ids must be lowercase snake_case");
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
