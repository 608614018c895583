use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub markdown: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub env_file: Option<PathBuf>,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Help { all: bool, command: Option<String> },
    Params(ParamsArgs),
    Env(EnvArgs),
    EndpointConfig(EndpointConfigArgs),
    Init(InitArgs),
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamsKind {
    #[default]
    Api,
    ApiProduct,
    Application,
}

impl ParamsKind {
    fn from_arg(value: &str) -> Self {
        match value {
            "api-product" => ParamsKind::ApiProduct,
            "application" => ParamsKind::Application,
            _ => ParamsKind::Api,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsArgs {
    pub path: Option<PathBuf>,
    pub kind: ParamsKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvArgs {
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfigArgs {
    pub path: Option<PathBuf>,
    pub parsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitArgs {
    pub path: Option<PathBuf>,
    pub force: bool,
    pub environments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionsArgs {
    pub shell: Option<String>,
}

pub fn build_cli(show_all: bool) -> Command {
    let mut cmd = Command::new("paramctl")
        .about("Load and inspect per-environment API deployment params")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .disable_help_subcommand(true)
        .subcommand_value_name("COMMAND");

    cmd = add_global_args(cmd);

    cmd = cmd.subcommand(command_help());

    cmd = cmd.subcommand(command_params(show_all));
    cmd = cmd.subcommand(command_env(show_all));
    cmd = cmd.subcommand(command_endpoint_config(show_all));
    cmd = cmd.subcommand(command_init(show_all));

    cmd = cmd.subcommand(command_completions(show_all));

    cmd
}

pub fn parse_args() -> CliArgs {
    let matches = build_cli(false).get_matches();
    parse_matches(&matches)
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("env-file")
            .long("env-file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Load environment variables from file before substitution (default: .env)"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("markdown")
            .long("markdown")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force markdown table output"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn command_help() -> Command {
    Command::new("help")
        .about("Show help for commands")
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Show all commands, including advanced ones"),
        )
        .arg(Arg::new("command").value_name("COMMAND"))
}

fn command_core(
    name: &'static str,
    about: &'static str,
    aliases: &'static [&'static str],
    _show_all: bool,
) -> Command {
    let mut cmd = Command::new(name).about(about);
    for alias in aliases {
        cmd = cmd.visible_alias(*alias);
    }
    cmd
}

fn command_advanced(
    name: &'static str,
    about: &'static str,
    aliases: &'static [&'static str],
    show_all: bool,
) -> Command {
    let mut cmd = Command::new(name).about(about);
    for alias in aliases {
        cmd = cmd.visible_alias(*alias);
    }
    if !show_all {
        cmd = cmd.hide(true);
    }
    cmd
}

fn command_params(show_all: bool) -> Command {
    command_core(
        "params",
        "Load a params file and show the parsed model",
        &["show"],
        show_all,
    )
    .arg(
        Arg::new("path")
            .index(1)
            .value_name("PATH")
            .value_hint(ValueHint::AnyPath)
            .help("Params file, or project directory for API params"),
    )
    .arg(
        Arg::new("kind")
            .long("kind")
            .value_name("KIND")
            .value_parser(["api", "api-product", "application"])
            .default_value("api")
            .help("Artifact kind the params describe"),
    )
}

fn command_env(show_all: bool) -> Command {
    command_core(
        "env",
        "Show the configs of one environment",
        &["get-env"],
        show_all,
    )
    .arg(
        Arg::new("name")
            .index(1)
            .value_name("NAME")
            .help("Environment name (exact match)"),
    )
    .arg(
        Arg::new("path")
            .index(2)
            .value_name("PATH")
            .value_hint(ValueHint::AnyPath)
            .help("API params file or project directory"),
    )
}

fn command_endpoint_config(show_all: bool) -> Command {
    command_core(
        "endpoint-config",
        "Extract the endpoint config from an API definition JSON",
        &["endpoints"],
        show_all,
    )
    .arg(
        Arg::new("path")
            .index(1)
            .value_name("PATH")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("parsed")
            .long("parsed")
            .action(ArgAction::SetTrue)
            .help("Show typed production/sandbox endpoints instead of the raw string"),
    )
}

fn command_init(show_all: bool) -> Command {
    command_core("init", "Create a params file template", &[], show_all)
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("path")
                .value_hint(ValueHint::AnyPath),
        )
        .arg(Arg::new("force").long("force").action(ArgAction::SetTrue))
        .arg(
            Arg::new("env")
                .long("env")
                .value_name("name")
                .action(ArgAction::Append)
                .help("Environment to include (repeatable; default: dev, prod)"),
        )
}

fn command_completions(show_all: bool) -> Command {
    command_advanced("completions", "Generate shell completions", &[], show_all).arg(
        Arg::new("shell")
            .long("shell")
            .value_name("name")
            .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
    )
}

fn parse_matches(matches: &ArgMatches) -> CliArgs {
    let env_file = matches.get_one::<String>("env-file").map(PathBuf::from);
    let output = OutputFlags {
        json: matches.get_flag("json"),
        markdown: matches.get_flag("markdown"),
        pretty: matches.get_flag("pretty"),
    };
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let command = match matches.subcommand() {
        Some(("help", sub_m)) => CommandKind::Help {
            all: sub_m.get_flag("all"),
            command: sub_m.get_one::<String>("command").cloned(),
        },
        Some(("params", sub_m)) => CommandKind::Params(ParamsArgs {
            path: sub_m.get_one::<String>("path").map(PathBuf::from),
            kind: sub_m
                .get_one::<String>("kind")
                .map(|kind| ParamsKind::from_arg(kind))
                .unwrap_or_default(),
        }),
        Some(("env", sub_m)) => CommandKind::Env(EnvArgs {
            name: sub_m.get_one::<String>("name").cloned(),
            path: sub_m.get_one::<String>("path").map(PathBuf::from),
        }),
        Some(("endpoint-config", sub_m)) => CommandKind::EndpointConfig(EndpointConfigArgs {
            path: sub_m.get_one::<String>("path").map(PathBuf::from),
            parsed: sub_m.get_flag("parsed"),
        }),
        Some(("init", sub_m)) => CommandKind::Init(InitArgs {
            path: sub_m.get_one::<String>("path").map(PathBuf::from),
            force: sub_m.get_flag("force"),
            environments: sub_m
                .get_many::<String>("env")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }),
        Some(("completions", sub_m)) => CommandKind::Completions(CompletionsArgs {
            shell: sub_m.get_one::<String>("shell").cloned(),
        }),
        _ => CommandKind::Help {
            all: false,
            command: None,
        },
    };

    CliArgs {
        env_file,
        output,
        verbose,
        quiet,
        command,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        let matches = build_cli(true)
            .try_get_matches_from(argv)
            .expect("valid args");
        parse_matches(&matches)
    }

    #[test]
    fn params_kind_defaults_to_api() {
        let args = parse(&["paramctl", "params", "api_params.yaml"]);
        assert_eq!(
            args.command,
            CommandKind::Params(ParamsArgs {
                path: Some(PathBuf::from("api_params.yaml")),
                kind: ParamsKind::Api,
            })
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args = parse(&[
            "paramctl",
            "params",
            "app.yaml",
            "--kind",
            "application",
            "--json",
            "-vv",
            "--env-file",
            "ci.env",
        ]);
        assert!(args.output.json);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.env_file, Some(PathBuf::from("ci.env")));
        assert!(matches!(
            args.command,
            CommandKind::Params(ParamsArgs {
                kind: ParamsKind::Application,
                ..
            })
        ));
    }

    #[test]
    fn env_takes_name_then_path() {
        let args = parse(&["paramctl", "env", "prod", "project"]);
        assert_eq!(
            args.command,
            CommandKind::Env(EnvArgs {
                name: Some("prod".to_string()),
                path: Some(PathBuf::from("project")),
            })
        );
    }

    #[test]
    fn init_collects_repeated_envs() {
        let args = parse(&["paramctl", "init", "--env", "dev", "--env", "qa", "--force"]);
        match args.command {
            CommandKind::Init(init) => {
                assert_eq!(init.environments, ["dev", "qa"]);
                assert!(init.force);
                assert!(init.path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(
            build_cli(true)
                .try_get_matches_from(["paramctl", "params", "x.yaml", "--kind", "widget"])
                .is_err()
        );
    }
}
