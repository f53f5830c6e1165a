//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde_json::Value;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a section as `field: value` lines
    pub fn print_section(&self, key: &str, section: &Value) {
        match self.format {
            OutputFormat::Human => {
                println!("[{}]", key);
                if let Some(fields) = section.as_object() {
                    for (name, value) in fields {
                        match value {
                            Value::Array(entries) => {
                                println!("{:<18} {} entr{}", name, entries.len(),
                                    if entries.len() == 1 { "y" } else { "ies" });
                            }
                            Value::String(s) => println!("{:<18} {}", name, s),
                            other => println!("{:<18} {}", name, other),
                        }
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(section).unwrap());
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a collection's entries, one row per entry
    pub fn print_entries(&self, entries: &Value) {
        let entries = entries.as_array().cloned().unwrap_or_default();
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No entries.");
                    return;
                }
                for (index, entry) in entries.iter().enumerate() {
                    let id = entry
                        .get("id")
                        .and_then(Value::as_str)
                        .unwrap_or("-");
                    let fields: Vec<String> = entry
                        .as_object()
                        .map(|obj| {
                            obj.iter()
                                .filter(|(name, _)| name.as_str() != "id")
                                .map(|(name, value)| {
                                    let text = match value {
                                        Value::String(s) => s.clone(),
                                        other => other.to_string(),
                                    };
                                    format!("{}={}", name, truncate(&text, 40))
                                })
                                .collect()
                        })
                        .unwrap_or_default();
                    println!("{:>3}  {}  {}", index, id, fields.join("  "));
                }
                println!("\n{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries).unwrap());
            }
            OutputFormat::Quiet => {
                for entry in &entries {
                    if let Some(id) = entry.get("id").and_then(Value::as_str) {
                        println!("{}", id);
                    }
                }
            }
        }
    }

    /// Print an arbitrary JSON value
    pub fn print_value(&self, value: &Value) {
        match self.format {
            OutputFormat::Human | OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap());
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // must not panic on multi-byte characters
        let truncated = truncate("día de montaña y más texto aquí", 10);
        assert!(truncated.ends_with("..."));
    }
}
