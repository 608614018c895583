use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::cli::{CliArgs, ParamsArgs, ParamsKind};
use crate::commands::common;
use crate::output::{OutputFormat, TableOptions, json, table};
use crate::params::{self, ApiParams, ApiProductParams, ApplicationParams};

pub fn run(args: &CliArgs, cmd: &ParamsArgs) -> Result<()> {
    let path = common::require_path(cmd.path.as_ref(), "PATH")?;
    let env = common::load_env(args)?;
    let format = common::output_format(args);

    let sections = match cmd.kind {
        ParamsKind::Api => {
            let loaded = common::load_api_params(path, &env)?;
            render(&loaded, format, api_sections)?
        }
        ParamsKind::ApiProduct => {
            let loaded = params::load_api_product_params(path, &env)?;
            render(&loaded, format, product_sections)?
        }
        ParamsKind::Application => {
            let loaded = params::load_application_params(path, &env)?;
            render(&loaded, format, application_sections)?
        }
    };

    if args.quiet {
        return Ok(());
    }
    writeln!(io::stdout(), "{}", sections)?;
    Ok(())
}

fn render<T: Serialize>(
    model: &T,
    format: OutputFormat,
    sections: fn(&T) -> Vec<(&'static str, Vec<(String, String)>)>,
) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        return json::emit_json(model, true);
    }

    let options = TableOptions::default();
    let rendered = sections(model)
        .into_iter()
        .map(|(title, rows)| table::render_key_value_table(title, &rows, format, &options))
        .collect::<Vec<_>>();
    Ok(rendered.join("\n"))
}

fn api_sections(model: &ApiParams) -> Vec<(&'static str, Vec<(String, String)>)> {
    let import = &model.deploy.import;
    let environments = model
        .environments
        .iter()
        .map(|env| (env.name.clone(), format!("{} config keys", env.config.len())))
        .collect();
    vec![
        ("Environment", environments),
        (
            "Import",
            common::flag_rows(&[
                ("update", import.update),
                ("preserveProvider", import.preserve_provider),
                ("rotateRevision", import.rotate_revision),
            ]),
        ),
    ]
}

fn product_sections(model: &ApiProductParams) -> Vec<(&'static str, Vec<(String, String)>)> {
    let import = &model.deploy.import;
    vec![(
        "Import",
        common::flag_rows(&[
            ("importApis", import.import_apis),
            ("updateApis", import.update_apis),
            ("updateApiProduct", import.update_api_product),
            ("preserveProvider", import.preserve_provider),
            ("rotateRevision", import.rotate_revision),
        ]),
    )]
}

fn application_sections(model: &ApplicationParams) -> Vec<(&'static str, Vec<(String, String)>)> {
    let import = &model.deploy.import;
    let mut rows = common::flag_rows(&[("update", import.update)]);
    rows.push(("targetOwner".to_string(), import.target_owner.clone()));
    rows.extend(common::flag_rows(&[
        ("preserveOwner", import.preserve_owner),
        ("skipKeys", import.skip_keys),
        ("skipSubscriptions", import.skip_subscriptions),
    ]));
    vec![("Import", rows)]
}
