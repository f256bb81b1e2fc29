use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One line per item. Objects become rows whose columns are padded to the
/// widest cell; the last column is never padded.
fn render_rows(items: &[Value]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| match item {
            Value::Object(map) => map.values().map(cell).collect(),
            other => vec![cell(other)],
        })
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let last = row.len().saturating_sub(1);
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == last {
                    c.clone()
                } else {
                    format!("{c:<width$}", width = widths[i])
                }
            })
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    format!("{empty_msg}\n")
                } else {
                    let items: Vec<Value> = list
                        .iter()
                        .map(|item| serde_json::to_value(item).unwrap_or(Value::Null))
                        .collect();
                    let content = render_rows(&items);
                    if title.is_empty() {
                        content
                    } else {
                        format!("{title}\n{content}")
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string());
                format!("{json}\n")
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        kind: &'static str,
        value: &'static str,
    }

    #[test]
    fn test_text_rows_are_aligned() {
        let rows = [
            Row {
                kind: "keyword",
                value: "def",
            },
            Row {
                kind: "text",
                value: "=",
            },
        ];
        let out = Formatter::new(OutputFormat::Text).format_list(&rows, "", "none");
        assert_eq!(out, "keyword  def\ntext     =\n");
    }

    #[test]
    fn test_text_list_of_strings_with_title() {
        let out = Formatter::new(OutputFormat::Text).format_list(&["if", "else"], "Keywords:", "none");
        assert_eq!(out, "Keywords:\nif\nelse\n");
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        let text = Formatter::new(OutputFormat::Text).format_list(&empty, "T", "Nothing here");
        assert_eq!(text, "Nothing here\n");
        let json = Formatter::new(OutputFormat::Json).format_list(&empty, "T", "Nothing here");
        assert_eq!(json, "[]\n");
    }
}
