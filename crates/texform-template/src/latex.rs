//! Syntactic LaTeX well-formedness check.
//!
//! Imports are gated on a light structural check: group braces must balance
//! and `\begin{...}`/`\end{...}` environments must nest properly. This is not
//! a LaTeX parser; semantic validity is the compiler's job.

use std::sync::LazyLock;

use regex::Regex;

use crate::TemplateError;

/// Matches `\begin{name}` and `\end{name}` tags.
static ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(begin|end)\{([^}]*)\}").expect("environment pattern is valid")
});

/// Checks that `source` is structurally well-formed LaTeX.
///
/// Verifies, over the source with comments removed:
/// - every `}` closes an open group and every `{` is eventually closed
///   (escaped `\{`/`\}` are ignored)
/// - every `\end{name}` closes the innermost open `\begin{name}`
pub fn check_well_formed(source: &str) -> Result<(), TemplateError> {
    let stripped = strip_comments(source);
    check_braces(&stripped)?;
    check_environments(&stripped)
}

/// Removes `%` comments (to end of line), keeping escaped `\%` literals.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        let mut escaped = false;
        for ch in line.chars() {
            if escaped {
                out.push(ch);
                escaped = false;
                continue;
            }
            match ch {
                '\\' => {
                    out.push(ch);
                    escaped = true;
                }
                '%' => break,
                _ => out.push(ch),
            }
        }
        out.push('\n');
    }
    out
}

/// Verifies brace balance, ignoring escaped braces.
fn check_braces(source: &str) -> Result<(), TemplateError> {
    let mut depth = 0usize;
    let mut last_open = 0usize;
    let mut escaped = false;

    for (position, ch) in source.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => {
                depth += 1;
                last_open = position;
            }
            '}' => {
                if depth == 0 {
                    return Err(TemplateError::UnbalancedBraces { position });
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(TemplateError::UnbalancedBraces {
            position: last_open,
        });
    }
    Ok(())
}

/// Verifies `\begin`/`\end` nesting.
fn check_environments(source: &str) -> Result<(), TemplateError> {
    let mut open: Vec<String> = Vec::new();

    for capture in ENVIRONMENT.captures_iter(source) {
        let name = capture[2].to_string();
        if &capture[1] == "begin" {
            open.push(name);
        } else {
            match open.pop() {
                Some(expected) if expected == name => {}
                Some(expected) => {
                    return Err(TemplateError::MismatchedEnvironment {
                        expected,
                        found: name,
                    });
                }
                None => return Err(TemplateError::UnexpectedEnd { name }),
            }
        }
    }

    if let Some(name) = open.pop() {
        return Err(TemplateError::UnclosedEnvironment { name });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\\documentclass{article}\n\\begin{document}\nHello {{name}}.\n\\end{document}\n";

    #[test]
    fn minimal_document_passes() {
        assert!(check_well_formed(MINIMAL).is_ok());
    }

    #[test]
    fn nested_environments_pass() {
        let source = "\\begin{document}\\begin{itemize}\\item a\\end{itemize}\\end{document}";
        assert!(check_well_formed(source).is_ok());
    }

    #[test]
    fn stray_closing_brace_fails() {
        let err = check_well_formed("a } b").unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedBraces { .. }));
    }

    #[test]
    fn unclosed_group_fails() {
        let err = check_well_formed("\\textbf{bold").unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedBraces { .. }));
    }

    #[test]
    fn escaped_braces_are_ignored() {
        assert!(check_well_formed("a \\{ literal \\} b").is_ok());
    }

    #[test]
    fn crossed_environments_fail() {
        let source = "\\begin{a}\\begin{b}\\end{a}\\end{b}";
        let err = check_well_formed(source).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MismatchedEnvironment { expected, found }
                if expected == "b" && found == "a"
        ));
    }

    #[test]
    fn unclosed_environment_fails() {
        let err = check_well_formed("\\begin{document} text").unwrap_err();
        assert!(matches!(err, TemplateError::UnclosedEnvironment { name } if name == "document"));
    }

    #[test]
    fn end_without_begin_fails() {
        let err = check_well_formed("\\end{document}").unwrap_err();
        assert!(matches!(err, TemplateError::UnexpectedEnd { name } if name == "document"));
    }

    #[test]
    fn commented_out_syntax_is_ignored() {
        assert!(check_well_formed("ok % \\begin{broken} {{{\n").is_ok());
    }

    #[test]
    fn escaped_percent_does_not_start_comment() {
        let err = check_well_formed("50\\% of {unclosed").unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedBraces { .. }));
    }
}
