use comfy_table::{ContentArrangement, Table, presets};
use serde_yaml::Value;

use super::OutputFormat;

const NULL_DISPLAY: &str = "—";
const ELLIPSIS: &str = "…";
const DEFAULT_MAX_CELL_WIDTH: usize = 140;
const DEFAULT_MAX_OUTPUT_CHARS: usize = 25_000;

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub max_cell_width: usize,
    pub max_output_chars: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
        }
    }
}

pub fn render_key_value_table(
    title: &str,
    rows: &[(String, String)],
    format: OutputFormat,
    options: &TableOptions,
) -> String {
    let mut table = Table::new();
    match format {
        OutputFormat::Markdown => {
            table.load_preset(presets::ASCII_MARKDOWN);
        }
        _ => {
            table.load_preset(presets::UTF8_FULL);
        }
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![title.to_string(), "Value".to_string()]);

    for (key, value) in rows {
        let key = truncate_string(key, options.max_cell_width);
        let value = truncate_string(value, options.max_cell_width);
        table.add_row(vec![key, value]);
    }

    truncate_output(table.to_string(), options.max_output_chars)
}

/// Flattens a YAML value into dotted-path rows, e.g. `endpoints.production.url`.
pub fn flatten_value(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            for (key, child) in map {
                let key = scalar_display(key);
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(&path, child, rows);
            }
        }
        Value::Sequence(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_value(&format!("{}[{}]", prefix, index), child, rows);
            }
        }
        Value::Tagged(tagged) => flatten_value(prefix, &tagged.value, rows),
        _ => rows.push((prefix.to_string(), scalar_display(value))),
    }
}

fn scalar_display(value: &Value) -> String {
    match value {
        Value::Null => NULL_DISPLAY.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Mapping(map) if map.is_empty() => "{}".to_string(),
        Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn truncate_string(input: &str, max_len: usize) -> String {
    let len = input.chars().count();
    if len <= max_len {
        return input.to_string();
    }
    if max_len <= 1 {
        return ELLIPSIS.to_string();
    }
    let truncated: String = input.chars().take(max_len - 1).collect();
    format!("{}{}", truncated, ELLIPSIS)
}

fn truncate_output(output: String, max_len: usize) -> String {
    if output.len() <= max_len {
        return output;
    }
    let mut truncated = output.chars().take(max_len).collect::<String>();
    truncated.push_str("\n[output truncated]");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(yaml: &str) -> Vec<(String, String)> {
        let value: Value = serde_yaml::from_str(yaml).expect("yaml");
        let mut rows = Vec::new();
        flatten_value("", &value, &mut rows);
        rows
    }

    #[test]
    fn truncates_cells() {
        assert_eq!(truncate_string("abcdefghijklmnopqrstuvwxyz", 8), "abcdefg…");
    }

    #[test]
    fn flattens_nested_configs() {
        let rows = rows_for(
            "endpoints:\n  production:\n    url: https://a\n    config:\n      factor: 2\ntags: [x, y]\nempty: {}\nunset: ~\n",
        );
        let expected = [
            ("endpoints.production.url", "https://a"),
            ("endpoints.production.config.factor", "2"),
            ("tags[0]", "x"),
            ("tags[1]", "y"),
            ("empty", "{}"),
            ("unset", "—"),
        ];
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn renders_markdown_key_values() {
        let rows = vec![("update".to_string(), "true".to_string())];
        let out = render_key_value_table(
            "Import",
            &rows,
            OutputFormat::Markdown,
            &TableOptions::default(),
        );
        assert!(out.contains("| Import"));
        assert!(out.contains("update"));
    }

    #[test]
    fn truncates_output_when_too_long() {
        let rows = vec![("key".to_string(), "x".repeat(200))];
        let options = TableOptions {
            max_output_chars: 50,
            ..TableOptions::default()
        };
        let out = render_key_value_table("Config", &rows, OutputFormat::Pretty, &options);
        assert!(out.contains("[output truncated]"));
    }
}
