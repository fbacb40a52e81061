//! Prints the JSON schema of `config.toml`, or writes it to the path given as
//! the first argument.

use anyhow::{Context, Result};
use std::fs;

fn main() -> Result<()> {
    let schema = serde_json::to_string_pretty(&bmpedit::Config::json_schema())?;

    match std::env::args_os().nth(1) {
        Some(path) => fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
