use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{CliArgs, EnvArgs};
use crate::commands::common;
use crate::error::{AppError, ErrorKind};
use crate::output::{OutputFormat, TableOptions, json, table};

pub fn run(args: &CliArgs, cmd: &EnvArgs) -> Result<()> {
    let name = cmd
        .name
        .as_deref()
        .ok_or_else(|| AppError::new(ErrorKind::Usage, "NAME is required"))?;
    let path = common::require_path(cmd.path.as_ref(), "PATH")?;
    let env = common::load_env(args)?;
    let format = common::output_format(args);

    let loaded = common::load_api_params(path, &env)?;
    let Some(environment) = loaded.get_env(name) else {
        let known = loaded.env_names().collect::<Vec<_>>().join(", ");
        return Err(AppError::new(
            ErrorKind::NotFound,
            format!(
                "Environment '{}' not found in {} (available: {})",
                name,
                path.display(),
                if known.is_empty() { "none" } else { known.as_str() }
            ),
        )
        .into());
    };
    tracing::debug!(environment = name, keys = environment.config.len(), "environment found");

    if args.quiet {
        return Ok(());
    }

    let body = match format {
        OutputFormat::Json => json::emit_json_value(&json::environment_to_json(environment)?, true)?,
        _ => {
            let mut rows = Vec::new();
            for (key, value) in &environment.config {
                table::flatten_value(key, value, &mut rows);
            }
            let title = format!("Environment: {}", environment.name);
            table::render_key_value_table(&title, &rows, format, &TableOptions::default())
        }
    };
    writeln!(io::stdout(), "{}", body)?;
    Ok(())
}
