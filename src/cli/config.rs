//! `pinger config init`

use crate::cli::ConfigInitArgs;
use crate::config::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Annotated example written by `config init`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../pinger.example.toml");

/// Write [`EXAMPLE_CONFIG`] to `path`.
///
/// Without `force` the file is created with `create_new`, so an existing file
/// is never truncated, even if it appears between check and write.
pub fn write_example_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => ConfigError::Validation {
            field: "output".to_string(),
            message: format!("{} already exists; pass --force to overwrite", path.display()),
        },
        _ => ConfigError::Io(e),
    })?;
    file.write_all(EXAMPLE_CONFIG.as_bytes())?;
    Ok(())
}

/// Handle `pinger config init`
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    write_example_config(&args.output, args.force)?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!(
        "  Try it with: pinger check --config {}",
        args.output.display()
    );

    Ok(())
}
