//! Error types for the portions library.

use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred when rendering a page through a template.
    #[error("template error")]
    TemplateError(#[from] minijinja::Error),

    /// An error occurred when parsing a classifier rule set.
    #[error("error parsing rounding rules")]
    RulesError(#[from] serde_yaml::Error),

    /// An error occurred when reading a rule set file.
    #[error("error reading rounding rules")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Format the error with full context including the source chain and,
    /// for template errors, minijinja's debug info and a hint for the most
    /// common mistakes in template overrides.
    #[must_use]
    pub fn format_with_source(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        if let Error::TemplateError(minijinja_err) = self {
            // minijinja's debug display includes line numbers and source context
            let _ = write!(output, "{}", minijinja_err.display_debug_info());

            match minijinja_err.kind() {
                minijinja::ErrorKind::SyntaxError => {
                    output.push_str("\n\nHint: This is a syntax error. Check for:");
                    output.push_str("\n  • Missing closing tags ({% endif %}, {% endfor %}, etc.)");
                    output.push_str("\n  • Unclosed strings or brackets");
                }
                minijinja::ErrorKind::UndefinedError => {
                    output.push_str("\n\nHint: A variable or attribute is undefined. Check that:");
                    output.push_str("\n  • The template only uses the context the renderer provides");
                    output.push_str("\n  • Property names are spelled correctly");
                }
                _ => {}
            }
        } else {
            let _ = write!(output, "Error: {self:#}");
        }

        // Traverse the error chain
        let mut current_error: &dyn std::error::Error = self;
        while let Some(source) = current_error.source() {
            let _ = write!(output, "\n\nCaused by:\n    {source:#}");
            current_error = source;
        }

        output
    }
}
