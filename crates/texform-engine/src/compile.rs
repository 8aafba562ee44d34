//! The PDF compiler capability.
//!
//! The engine never shells out directly; it talks to a [`Compiler`] so tests
//! can script success and failure without a LaTeX toolchain.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::EngineError;

/// Result of one compilation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The compiler produced a PDF at the deterministic output path.
    Success {
        /// Path of the produced PDF (`<output-dir>/<job-name>.pdf`).
        pdf_path: PathBuf,
    },
    /// The compiler exited non-zero.
    Failure {
        /// Verbatim diagnostic text captured from the compiler. Shown to the
        /// caller, never parsed.
        log: String,
    },
}

/// Compiles bound LaTeX source into a PDF.
///
/// Implementations are synchronous and may block for the full duration of the
/// external process; there is no cancellation.
pub trait Compiler {
    /// Compiles `tex_path`, producing `<output_dir>/<job_name>.pdf` on
    /// success. A non-zero compiler exit is a [`CompileOutcome::Failure`];
    /// `Err` is reserved for failures to run the compiler at all.
    fn compile(
        &self,
        tex_path: &Path,
        job_name: &str,
        output_dir: &Path,
    ) -> Result<CompileOutcome, EngineError>;

    /// Reports whether the compiler can be invoked on this system.
    fn is_available(&self) -> bool {
        true
    }
}

/// Invokes an external `pdflatex`-compatible engine.
#[derive(Debug, Clone)]
pub struct PdflatexCompiler {
    /// Program name or path of the LaTeX engine.
    program: String,
}

impl PdflatexCompiler {
    /// Creates a compiler invoking `program` (e.g. `pdflatex`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured program name.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Compiler for PdflatexCompiler {
    fn compile(
        &self,
        tex_path: &Path,
        job_name: &str,
        output_dir: &Path,
    ) -> Result<CompileOutcome, EngineError> {
        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", output_dir.display()))
            .arg(format!("-jobname={job_name}"))
            .arg(tex_path)
            .output()
            .map_err(|e| EngineError::from_io(tex_path, e))?;

        if output.status.success() {
            return Ok(CompileOutcome::Success {
                pdf_path: output_dir.join(format!("{job_name}.pdf")),
            });
        }

        // pdflatex reports errors on stdout; keep stderr too, verbatim.
        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !log.is_empty() {
                log.push('\n');
            }
            log.push_str(&stderr);
        }
        Ok(CompileOutcome::Failure { log })
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_available() {
        let compiler = PdflatexCompiler::new("definitely-not-a-latex-engine");
        assert!(!compiler.is_available());
    }

    #[test]
    fn missing_program_compile_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let tex = dir.path().join("job.tex");
        std::fs::write(&tex, "x").unwrap();

        let compiler = PdflatexCompiler::new("definitely-not-a-latex-engine");
        let err = compiler.compile(&tex, "job", dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failing_engine_yields_failure_with_log() {
        // `false` exits non-zero and prints nothing; the outcome must still
        // be Failure, not Err.
        let dir = tempfile::tempdir().unwrap();
        let tex = dir.path().join("job.tex");
        std::fs::write(&tex, "x").unwrap();

        let compiler = PdflatexCompiler::new("false");
        let outcome = compiler.compile(&tex, "job", dir.path()).unwrap();
        assert!(matches!(outcome, CompileOutcome::Failure { .. }));
    }
}
