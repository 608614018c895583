use std::fs;
use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, EndpointConfigArgs};
use crate::commands::common;
use crate::output::{OutputFormat, TableOptions, json as json_out, table};
use crate::params::{self, EndpointData, ParamsError};

pub fn run(args: &CliArgs, cmd: &EndpointConfigArgs) -> Result<()> {
    let path = common::require_path(cmd.path.as_ref(), "PATH")?;
    let format = common::output_format(args);

    let bytes = fs::read(path).map_err(|err| ParamsError::io(path, err))?;
    let raw = params::extract_endpoint_config(&bytes)?;

    let body = if cmd.parsed {
        let data = EndpointData::from_endpoint_config(&raw)?;
        render_parsed(&data, format)?
    } else if matches!(format, OutputFormat::Json) {
        json_out::emit_json_value(&json!({ "endpointConfig": raw }), true)?
    } else {
        raw
    };

    if args.quiet {
        return Ok(());
    }
    writeln!(io::stdout(), "{}", body)?;
    Ok(())
}

fn render_parsed(data: &EndpointData, format: OutputFormat) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        return json_out::emit_json(data, true);
    }
    let mut rows = Vec::new();
    table::flatten_value("", &serde_yaml::to_value(data)?, &mut rows);
    Ok(table::render_key_value_table(
        "Endpoint",
        &rows,
        format,
        &TableOptions::default(),
    ))
}
