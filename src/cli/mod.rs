mod args;

pub use args::{
    CliArgs, CommandKind, CompletionsArgs, EndpointConfigArgs, EnvArgs, InitArgs, OutputFlags,
    ParamsArgs, ParamsKind, build_cli,
};

pub fn parse() -> CliArgs {
    args::parse_args()
}
