//! Human-readable text output formatter

use super::OutputFormatter;
use crate::diagnostic::{Diagnostic, Severity};
use crate::engine::CheckRun;
use crate::version::Versions;
use colored::*;

/// Text formatter in the layout of HTML Tidy's report
pub struct TextFormatter {
    /// Enable colored output
    pub colored: bool,

    /// Show the version profiles the document is still compatible with
    pub show_versions: bool,

    /// Show accessibility advice for raised flags
    pub show_advice: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            colored: true,
            show_versions: true,
            show_advice: true,
        }
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable colors
    pub fn without_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn severity_str(&self, severity: Severity) -> ColoredString {
        let s = format!("{}", severity);
        if !self.colored {
            return s.normal();
        }
        match severity {
            Severity::Error => s.red().bold(),
            Severity::Warning => s.yellow().bold(),
            Severity::Info => s.blue(),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, run: &CheckRun) -> String {
        let mut output = String::new();

        if let Some(file) = &run.file {
            if self.colored {
                output.push_str(&format!("{}\n", file.display().to_string().underline()));
            } else {
                output.push_str(&format!("{}\n", file.display()));
            }
        }

        for diag in &run.report.diagnostics {
            output.push_str(&self.format_diagnostic(diag));
            output.push('\n');
        }

        if run.skipped > 0 {
            output.push_str(&format!(
                "{} unknown {} skipped\n",
                run.skipped,
                if run.skipped == 1 { "element" } else { "elements" }
            ));
        }

        if self.show_versions && run.summary.versions != Versions::EVERYTHING {
            let profiles = run.summary.versions.profiles();
            output.push_str(&format!(
                "\nCompatible with: {}\n",
                if profiles.is_empty() {
                    "none".to_string()
                } else {
                    profiles.join(", ")
                }
            ));
        }

        if self.show_advice {
            for advice in run.summary.access.advice() {
                output.push('\n');
                output.push_str(advice);
                output.push('\n');
            }
        }

        let summary = run.report.summary_line();
        output.push('\n');
        if !self.colored {
            output.push_str(&summary);
        } else if run.report.has_errors() {
            output.push_str(&summary.red().to_string());
        } else if run.report.is_clean() {
            output.push_str(&summary.green().to_string());
        } else {
            output.push_str(&summary.yellow().to_string());
        }
        output.push('\n');

        output
    }

    fn format_diagnostic(&self, diag: &Diagnostic) -> String {
        if diag.line == 0 {
            return format!("{}: {}", self.severity_str(diag.severity), diag.message);
        }
        format!(
            "line {} column {} - {}: {}",
            diag.line,
            diag.column,
            self.severity_str(diag.severity),
            diag.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessFlags;
    use crate::config::Config;
    use crate::engine::Engine;
    use crate::node::{Node, TagId};
    use std::path::PathBuf;

    fn plain() -> TextFormatter {
        TextFormatter::new().without_color()
    }

    #[test]
    fn test_tidy_line_layout() {
        let run = Engine::new().run(
            &Config::default(),
            vec![Node::element(TagId::Form).at(12, 3)],
        );
        let line = plain().format_diagnostic(&run.report.diagnostics[0]);
        assert_eq!(line, "line 12 column 3 - Warning: <form> lacks \"action\" attribute");
    }

    #[test]
    fn test_unknown_position() {
        let run = Engine::new().run(&Config::default(), vec![Node::element(TagId::Meta)]);
        let line = plain().format_diagnostic(&run.report.diagnostics[0]);
        assert_eq!(line, "Warning: <meta> lacks \"content\" attribute");
    }

    #[test]
    fn test_clean_run() {
        let mut run = Engine::new().run(
            &Config::default(),
            vec![Node::element(TagId::Script).with_attr("type", "text/javascript")],
        );
        run.file = Some(PathBuf::from("page.yaml"));
        let output = plain().format(&run);

        assert!(output.starts_with("page.yaml\n"));
        assert!(output.ends_with("No warnings or errors were found.\n"));
        assert!(!output.contains("Compatible with"));
    }

    #[test]
    fn test_summary_versions_and_advice() {
        let run = Engine::new().run(
            &Config::default(),
            vec![
                Node::element(TagId::Table).at(1, 1),
                Node::element(TagId::Td).with_attr("width", "10"),
            ],
        );
        assert!(run.summary.access.contains(AccessFlags::MISSING_SUMMARY));

        let output = plain().format(&run);
        assert!(output.contains("line 1 column 1 - Warning: <table> lacks \"summary\" attribute"));
        assert!(output.contains("Compatible with: HTML 2.0, HTML 3.2, HTML 4.0 Transitional"));
        assert!(!output.contains("HTML 4.01 Strict"));
        assert!(output.contains("The table summary attribute should be used"));
        assert!(output.ends_with("1 warning, 0 errors were found!\n"));
    }

    #[test]
    fn test_advice_can_be_hidden() {
        let run = Engine::new().run(&Config::default(), vec![Node::element(TagId::Table)]);
        let formatter = TextFormatter {
            show_advice: false,
            ..plain()
        };
        assert!(!formatter.format(&run).contains("table summary attribute"));
    }
}
