use std::io;

use anyhow::Result;
use clap_complete::{Shell, generate};

use crate::cli::{CliArgs, CompletionsArgs, build_cli};
use crate::error::{AppError, ErrorKind};

pub fn run(_args: &CliArgs, cmd: &CompletionsArgs) -> Result<()> {
    let shell = match cmd.shell.as_deref() {
        Some(name) => name
            .parse::<Shell>()
            .map_err(|_| AppError::new(ErrorKind::Usage, format!("Unsupported shell: {}", name)))?,
        None => Shell::from_env().ok_or_else(|| {
            AppError::new(
                ErrorKind::Usage,
                "--shell is required when $SHELL is not a supported shell",
            )
        })?,
    };

    let mut cli = build_cli(true);
    let name = cli.get_name().to_string();
    generate(shell, &mut cli, name, &mut io::stdout());
    Ok(())
}
