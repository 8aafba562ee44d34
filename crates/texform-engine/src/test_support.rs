//! Test doubles for the engine's capability seams.

use std::{fs, path::Path};

use crate::{CompileOutcome, Compiler, EngineError};

/// What a [`ScriptedCompiler`] should do when invoked.
enum Script {
    /// Write a fake PDF at the deterministic path and report success.
    Succeed,
    /// Report a non-zero exit with the given diagnostic log.
    Fail(String),
}

/// A compiler that follows a fixed script instead of invoking LaTeX.
pub(crate) struct ScriptedCompiler {
    /// The scripted behavior.
    script: Script,
}

impl ScriptedCompiler {
    /// A compiler whose every invocation succeeds.
    pub(crate) fn succeeding() -> Self {
        Self {
            script: Script::Succeed,
        }
    }

    /// A compiler whose every invocation fails with `log`.
    pub(crate) fn failing(log: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(log.into()),
        }
    }
}

impl Compiler for ScriptedCompiler {
    fn compile(
        &self,
        _tex_path: &Path,
        job_name: &str,
        output_dir: &Path,
    ) -> Result<CompileOutcome, EngineError> {
        match &self.script {
            Script::Succeed => {
                let pdf_path = output_dir.join(format!("{job_name}.pdf"));
                fs::write(&pdf_path, b"%PDF-1.4\nfake\n")
                    .map_err(|e| EngineError::from_io(&pdf_path, e))?;
                Ok(CompileOutcome::Success { pdf_path })
            }
            Script::Fail(log) => Ok(CompileOutcome::Failure { log: log.clone() }),
        }
    }
}
