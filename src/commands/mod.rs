mod common;
mod completions;
mod endpoint;
mod env;
mod help;
mod init;
mod params;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Help { all, command } => help::run(*all, command.as_deref()),
        CommandKind::Params(cmd) => params::run(args, cmd),
        CommandKind::Env(cmd) => env::run(args, cmd),
        CommandKind::EndpointConfig(cmd) => endpoint::run(args, cmd),
        CommandKind::Init(cmd) => init::run(args, cmd),
        CommandKind::Completions(cmd) => completions::run(args, cmd),
    }
}
