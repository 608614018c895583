use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::error::ParamsError;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("valid regex")
    })
}

/// Replaces `${NAME}` and `$NAME` references using `lookup`.
///
/// `$$` yields a literal `$`. Anything else starting with `$` that is not a
/// well-formed reference is copied through unchanged. Replacement values are
/// not rescanned. The first reference that `lookup` cannot resolve fails the
/// whole substitution.
pub fn substitute<'a, F>(text: &str, lookup: F) -> Result<String, ParamsError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for caps in token_re().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&text[last..whole.start()]);
        last = whole.end();

        if caps.get(1).is_some() {
            output.push('$');
            continue;
        }

        let name = variable_name(&caps);
        let value = lookup(name).ok_or_else(|| ParamsError::UndefinedVariable {
            name: name.to_string(),
        })?;
        tracing::trace!(variable = name, "substituted environment variable");
        output.push_str(value);
    }

    output.push_str(&text[last..]);
    Ok(output)
}

fn variable_name<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
        .unwrap_or_default()
}
