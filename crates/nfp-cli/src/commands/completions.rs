use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap_complete::{generate, Shell};

use nfp_cli::cli::build_cli_command;

pub fn handle(shell: Shell, out: Option<&Path>) -> Result<()> {
    let mut cmd = build_cli_command();
    let mut target: Box<dyn Write> = match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("creating completion file {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };
    generate(shell, &mut cmd, "nfp-cli", &mut target);
    if let Some(path) = out {
        println!("Wrote {shell:?} completion to {}", path.display());
    }
    Ok(())
}
