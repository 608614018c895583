pub mod json;
pub mod table;

use std::io::IsTerminal;

use crate::cli::OutputFlags;

pub use table::TableOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

pub fn select_format(flags: &OutputFlags) -> OutputFormat {
    if flags.json {
        return OutputFormat::Json;
    }
    if flags.markdown {
        return OutputFormat::Markdown;
    }
    if flags.pretty {
        return OutputFormat::Pretty;
    }

    if std::io::stdout().is_terminal() {
        OutputFormat::Pretty
    } else {
        OutputFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_pick_format() {
        let flags = OutputFlags {
            json: true,
            markdown: true,
            pretty: false,
        };
        assert_eq!(select_format(&flags), OutputFormat::Json);

        let flags = OutputFlags {
            json: false,
            markdown: false,
            pretty: true,
        };
        assert_eq!(select_format(&flags).as_str(), "pretty");
    }
}
