//! User-facing messages for `add` results
//!
//! Messages are built as [`Line`]s first so their wording can be tested
//! without capturing the process output.
//!
//! # Output Format
//!
//! ```text
//! ✅ 1 component(s) successfully added.
//! ℹ️ Dependencies: button, badge
//! ```

use crate::resolve::{Outcome, ResolutionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One message line and where it is printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub text: String,
}

impl Line {
    fn out(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stdout,
            text: text.into(),
        }
    }

    fn err(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stderr,
            text: text.into(),
        }
    }
}

/// Build the report for a resolution result
///
/// Dependency details are only shown on full success with dependency
/// resolution enabled; per-component relationships need `verbose`.
pub fn report_lines(result: &ResolutionResult, include_deps: bool, verbose: bool) -> Vec<Line> {
    let mut lines = Vec::new();

    if result.wildcard {
        lines.push(Line::out("✅ All Volt components successfully added."));
        return lines;
    }

    if result.shared_support.is_empty() {
        lines.push(Line::err("⚠️ Utils folder not found in the repository."));
    }

    for name in &result.failed {
        lines.push(Line::err(format!("❌ Component {} not found!", name)));
    }

    let succeeded = result.succeeded.len();
    let failed = result.failed.len();

    match result.outcome() {
        Outcome::FullSuccess => {
            lines.push(Line::out(format!(
                "✅ {} component(s) successfully added.",
                succeeded
            )));

            if include_deps && !result.pulled_in.is_empty() {
                lines.push(Line::out(format!(
                    "ℹ️ Dependencies: {}",
                    result.pulled_in.join(", ")
                )));

                if verbose {
                    lines.push(Line::out("📌 Dependency relationships:"));
                    for name in &result.succeeded {
                        if let Some(deps) = result.dependencies.get(name) {
                            let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
                            lines.push(Line::out(format!(
                                "  - {} depends on: {}",
                                name,
                                deps.join(", ")
                            )));
                        }
                    }
                }
            }
        }
        Outcome::PartialSuccess => {
            lines.push(Line::out(format!(
                "⚠️ {} component(s) added, {} failed.",
                succeeded, failed
            )));
        }
        Outcome::TotalFailure => {
            lines.push(Line::err(format!(
                "❌ No components were added. All {} component(s) failed.",
                failed
            )));
        }
    }

    lines
}

/// Print the report for a resolution result
pub fn print_report(result: &ResolutionResult, include_deps: bool, verbose: bool) {
    for line in report_lines(result, include_deps, verbose) {
        match line.stream {
            Stream::Stdout => println!("{}", line.text),
            Stream::Stderr => eprintln!("{}", line.text),
        }
    }
}
