use std::io::{self, Write};

use crate::cli::build_cli;
use crate::error::{AppError, ErrorKind};

pub fn run(show_all: bool, command: Option<&str>) -> anyhow::Result<()> {
    let mut cmd = build_cli(show_all);

    let Some(name) = command else {
        cmd.print_long_help()?;
        io::stdout().flush()?;
        return Ok(());
    };

    // Hidden commands still get help when named explicitly.
    let mut cmd = if cmd.find_subcommand(name).is_some() {
        cmd
    } else {
        build_cli(true)
    };
    let sub = cmd.find_subcommand_mut(name).ok_or_else(|| {
        AppError::new(
            ErrorKind::Usage,
            format!("Unknown command '{}'. Run 'paramctl help --all' to list commands.", name),
        )
    })?;
    sub.print_long_help()?;
    io::stdout().flush()?;
    Ok(())
}
