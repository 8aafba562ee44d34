//! The generation orchestrator and registry maintenance operations.
//!
//! A generation request moves through fixed stages: template selection,
//! value collection, optional custom-ID validation, compilation, then commit.
//! Validation failures happen before any side effect; a compiler rejection
//! leaves the bound `.tex` and parameter file on disk as a debugging aid but
//! never touches the document registry.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use texform_registry::{
    DocumentRecord, Registry, TemplateRecord, registry_timestamp, sanitize_description,
};
use texform_template::{
    ParameterSet, allocate_index, bind, check_well_formed, extract_placeholders,
    unique_placeholders, validate_template_name,
};

use crate::{
    CompileOutcome, Compiler, ConsistencyIssue, EngineError, generate_document_id,
    validate_id_format,
};

/// Filesystem layout the engine works in.
#[derive(Debug, Clone)]
pub struct EnginePaths {
    /// Directory holding stored copies of imported templates.
    pub templates_dir: PathBuf,
    /// Directory the compiler writes PDFs into.
    pub documents_dir: PathBuf,
    /// Directory for `key = value` parameter side files.
    pub parameters_dir: PathBuf,
    /// Directory for bound `.tex` working files.
    pub work_dir: PathBuf,
}

/// One document generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Name of the template to generate from.
    pub template_name: String,
    /// Placeholder values, one per unique placeholder.
    pub values: ParameterSet,
    /// Description for the document registry entry.
    pub description: String,
    /// Custom document ID format; `None` uses the default format.
    pub id_format: Option<String>,
}

/// Result of a generation request that got as far as the compiler.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The document was compiled and committed to the registry.
    Generated {
        /// The committed registry record.
        record: DocumentRecord,
    },
    /// The compiler rejected the bound source. Nothing was committed; the
    /// bound `.tex` and parameter file remain on disk for inspection.
    CompileFailed {
        /// Verbatim compiler diagnostics.
        log: String,
        /// The bound source that failed to compile.
        tex_path: PathBuf,
        /// The parameter side file written for this attempt.
        param_file_path: PathBuf,
    },
}

/// Existence flags for a document's on-disk artifacts.
///
/// Registry rows and artifacts have independent lifecycles, so listings check
/// existence up front and label missing files instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactStatus {
    /// Whether the generated PDF exists.
    pub pdf_exists: bool,
    /// Whether the parameter side file exists.
    pub params_exist: bool,
}

/// What a template deletion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDeletion {
    /// Whether the stored `.tex` file was found and removed.
    pub removed_file: bool,
    /// Number of documents still referencing the template by name.
    /// Deletion proceeds regardless; callers surface this as a warning.
    pub referencing_documents: usize,
}

/// What a document deletion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentDeletion {
    /// Whether the PDF was found and removed.
    pub removed_pdf: bool,
    /// Whether the parameter file was found and removed.
    pub removed_params: bool,
}

/// Orchestrates template import, document generation, and registry
/// maintenance over the two registries and a [`Compiler`].
#[derive(Debug)]
pub struct Engine<C> {
    /// Working directory layout.
    paths: EnginePaths,
    /// The template registry.
    templates: Registry<TemplateRecord>,
    /// The document registry.
    documents: Registry<DocumentRecord>,
    /// The PDF compiler capability.
    compiler: C,
}

impl<C: Compiler> Engine<C> {
    /// Creates an engine over the given layout, registries, and compiler.
    pub fn new(
        paths: EnginePaths,
        templates: Registry<TemplateRecord>,
        documents: Registry<DocumentRecord>,
        compiler: C,
    ) -> Self {
        Self {
            paths,
            templates,
            documents,
            compiler,
        }
    }

    /// Creates both registry files with their headers if missing. Idempotent.
    pub fn bootstrap(&self) -> Result<(), EngineError> {
        self.templates.ensure_initialized()?;
        self.documents.ensure_initialized()?;
        Ok(())
    }

    /// The template registry.
    pub fn templates(&self) -> &Registry<TemplateRecord> {
        &self.templates
    }

    /// The document registry.
    pub fn documents(&self) -> &Registry<DocumentRecord> {
        &self.documents
    }

    /// The compiler capability.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Looks up a template record by exact name.
    pub fn find_template(&self, name: &str) -> Result<TemplateRecord, EngineError> {
        self.templates
            .filter(|r| r.name == name)?
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up a document record by exact ID.
    pub fn find_document(&self, id: &str) -> Result<DocumentRecord, EngineError> {
        self.documents
            .filter(|r| r.id == id)?
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::DocumentNotFound { id: id.to_string() })
    }

    /// Reads a template's source and returns its unique placeholder names in
    /// first-seen order.
    pub fn template_placeholders(
        &self,
        record: &TemplateRecord,
    ) -> Result<Vec<String>, EngineError> {
        let source = read_existing(Path::new(&record.file_path))?;
        Ok(unique_placeholders(&source)?)
    }

    /// Imports a LaTeX template into the store and registry.
    ///
    /// Validates the name and description, requires at least one placeholder,
    /// gates on syntactic well-formedness, and rejects duplicate names, all
    /// before any side effect. The source is then copied into the templates
    /// directory, an index code is allocated against the live code set, and
    /// the record is appended. If the append fails, the copied file is
    /// removed again.
    pub fn import_template(
        &self,
        source: &Path,
        name: &str,
        description: &str,
    ) -> Result<TemplateRecord, EngineError> {
        validate_template_name(name)?;
        let description = sanitize_description(description);
        if description.is_empty() {
            return Err(EngineError::EmptyDescription);
        }

        let source_text = read_existing(source)?;
        extract_placeholders(&source_text)?;
        check_well_formed(&source_text)?;

        let records = self.templates.records()?;
        if records.iter().any(|r| r.name == name) {
            return Err(EngineError::DuplicateTemplate {
                name: name.to_string(),
            });
        }

        fs::create_dir_all(&self.paths.templates_dir)
            .map_err(|e| EngineError::from_io(&self.paths.templates_dir, e))?;
        let stored_path = self.paths.templates_dir.join(format!("{name}.tex"));
        fs::write(&stored_path, &source_text).map_err(|e| EngineError::from_io(&stored_path, e))?;

        let existing_codes: HashSet<String> = records.iter().map(|r| r.index.clone()).collect();
        let record = TemplateRecord {
            index: allocate_index(name, &existing_codes),
            name: name.to_string(),
            imported_at: registry_timestamp(),
            description,
            file_path: stored_path.display().to_string(),
        };

        if let Err(e) = self.templates.append(&record) {
            if let Err(cleanup) = fs::remove_file(&stored_path) {
                log::warn!(
                    "could not remove {} after failed import: {cleanup}",
                    stored_path.display()
                );
            }
            return Err(e.into());
        }
        Ok(record)
    }

    /// Runs one generation request to completion.
    ///
    /// Stage order: template lookup, value collection (all missing
    /// placeholders reported together), optional custom-ID validation, ID
    /// generation against the live ID set, bind + persist working files,
    /// compile, and (only on compiler success) registry commit.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutcome, EngineError> {
        let template = self.find_template(&request.template_name)?;
        let source = read_existing(Path::new(&template.file_path))?;

        let placeholders = unique_placeholders(&source)?;
        let missing: Vec<String> = placeholders
            .iter()
            .filter(|name| {
                request
                    .values
                    .get(name)
                    .is_none_or(|value| value.trim().is_empty())
            })
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::MissingValues { names: missing });
        }

        let description = sanitize_description(&request.description);
        if description.is_empty() {
            return Err(EngineError::EmptyDescription);
        }

        if let Some(format) = request.id_format.as_deref() {
            validate_id_format(format)?;
        }

        if !self.compiler.is_available() {
            return Err(EngineError::CompilerUnavailable);
        }

        let existing_ids = self.documents.keys()?;
        let now = Local::now();
        let id = generate_document_id(
            request.id_format.as_deref(),
            &template.index,
            now.date_naive(),
            &existing_ids,
        )?;

        for dir in [
            &self.paths.work_dir,
            &self.paths.parameters_dir,
            &self.paths.documents_dir,
        ] {
            fs::create_dir_all(dir).map_err(|e| EngineError::from_io(dir, e))?;
        }

        let tex_path = self.paths.work_dir.join(format!("{id}.tex"));
        fs::write(&tex_path, bind(&source, &request.values))
            .map_err(|e| EngineError::from_io(&tex_path, e))?;

        let param_file_path = self.paths.parameters_dir.join(format!(
            "{}_{}.txt",
            template.name,
            now.format("%Y%m%d%H%M%S")
        ));
        request.values.save(&param_file_path)?;

        match self
            .compiler
            .compile(&tex_path, &id, &self.paths.documents_dir)?
        {
            CompileOutcome::Failure { log } => Ok(GenerationOutcome::CompileFailed {
                log,
                tex_path,
                param_file_path,
            }),
            CompileOutcome::Success { pdf_path } => {
                let record = DocumentRecord {
                    id,
                    template_name: template.name,
                    generated_at: registry_timestamp(),
                    description,
                    param_file_path: param_file_path.display().to_string(),
                    pdf_path: pdf_path.display().to_string(),
                };
                self.documents.append(&record)?;
                Ok(GenerationOutcome::Generated { record })
            }
        }
    }

    /// Re-runs generation for an existing document.
    ///
    /// The stored parameter set is loaded and `overrides` applied on top; the
    /// description defaults to the original record's. The result is a fresh
    /// document with a fresh ID; the original record is untouched.
    pub fn regenerate(
        &self,
        id: &str,
        overrides: &ParameterSet,
        description: Option<&str>,
        id_format: Option<String>,
    ) -> Result<GenerationOutcome, EngineError> {
        let record = self.find_document(id)?;
        let mut values = self.load_parameters(&record)?;
        for (name, value) in overrides.iter() {
            values.insert(name, value);
        }

        let request = GenerationRequest {
            template_name: record.template_name.clone(),
            values,
            description: description.unwrap_or(&record.description).to_string(),
            id_format,
        };
        self.generate(&request)
    }

    /// Loads the parameter set persisted for `record`.
    pub fn load_parameters(&self, record: &DocumentRecord) -> Result<ParameterSet, EngineError> {
        let path = Path::new(&record.param_file_path);
        if !path.exists() {
            return Err(EngineError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(ParameterSet::load(path)?)
    }

    /// Reports which of `record`'s artifacts exist on disk.
    pub fn artifact_status(&self, record: &DocumentRecord) -> ArtifactStatus {
        ArtifactStatus {
            pdf_exists: Path::new(&record.pdf_path).exists(),
            params_exist: Path::new(&record.param_file_path).exists(),
        }
    }

    /// Counts live documents referencing template `name`.
    pub fn template_usage(&self, name: &str) -> Result<usize, EngineError> {
        Ok(self.documents.filter(|r| r.template_name == name)?.len())
    }

    /// Deletes a template: removes the stored `.tex` (if present) and
    /// rewrites the registry without the row.
    ///
    /// Referencing documents do not block deletion; their count is returned
    /// so callers can warn. The documents keep their dangling template name.
    pub fn delete_template(&self, name: &str) -> Result<TemplateDeletion, EngineError> {
        let record = self.find_template(name)?;
        let referencing_documents = self.template_usage(name)?;
        let removed_file = remove_if_present(&record.file_path)?;
        self.templates.delete_by_key(|r| &r.name, name)?;
        Ok(TemplateDeletion {
            removed_file,
            referencing_documents,
        })
    }

    /// Deletes a document: removes its PDF and parameter file (if present)
    /// and rewrites the registry without the row.
    pub fn delete_document(&self, id: &str) -> Result<DocumentDeletion, EngineError> {
        let record = self.find_document(id)?;
        let removed_pdf = remove_if_present(&record.pdf_path)?;
        let removed_params = remove_if_present(&record.param_file_path)?;
        self.documents.delete_by_key(|r| &r.id, id)?;
        Ok(DocumentDeletion {
            removed_pdf,
            removed_params,
        })
    }

    /// Copies a stored template out to `dest`.
    pub fn export_template(&self, name: &str, dest: &Path) -> Result<PathBuf, EngineError> {
        let record = self.find_template(name)?;
        let stored = Path::new(&record.file_path);
        if !stored.exists() {
            return Err(EngineError::FileNotFound {
                path: stored.to_path_buf(),
            });
        }
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| EngineError::from_io(parent, e))?;
        }
        fs::copy(stored, dest).map_err(|e| EngineError::from_io(dest, e))?;
        Ok(dest.to_path_buf())
    }

    /// Checks invariants within and between the registries.
    ///
    /// Reports duplicate template indexes and names, duplicate document IDs,
    /// documents referencing unknown templates, and registry rows pointing at
    /// missing files. Issues are warnings; nothing is repaired.
    pub fn check_consistency(&self) -> Result<Vec<ConsistencyIssue>, EngineError> {
        let templates = self.templates.records()?;
        let documents = self.documents.records()?;
        let mut issues = Vec::new();

        for (index, count) in occurrences(templates.iter().map(|r| r.index.as_str())) {
            if count > 1 {
                issues.push(ConsistencyIssue::DuplicateTemplateIndex { index });
            }
        }
        for (name, count) in occurrences(templates.iter().map(|r| r.name.as_str())) {
            if count > 1 {
                issues.push(ConsistencyIssue::DuplicateTemplateName { name });
            }
        }
        for (id, count) in occurrences(documents.iter().map(|r| r.id.as_str())) {
            if count > 1 {
                issues.push(ConsistencyIssue::DuplicateDocumentId { id });
            }
        }

        let template_names: HashSet<&str> = templates.iter().map(|r| r.name.as_str()).collect();
        for document in &documents {
            if !template_names.contains(document.template_name.as_str()) {
                issues.push(ConsistencyIssue::UnknownTemplate {
                    document: document.id.clone(),
                    template: document.template_name.clone(),
                });
            }
        }

        for template in &templates {
            if !Path::new(&template.file_path).exists() {
                issues.push(ConsistencyIssue::TemplateFileMissing {
                    name: template.name.clone(),
                    path: template.file_path.clone(),
                });
            }
        }
        for document in &documents {
            let status = self.artifact_status(document);
            if !status.pdf_exists {
                issues.push(ConsistencyIssue::PdfMissing {
                    document: document.id.clone(),
                    path: document.pdf_path.clone(),
                });
            }
            if !status.params_exist {
                issues.push(ConsistencyIssue::ParameterFileMissing {
                    document: document.id.clone(),
                    path: document.param_file_path.clone(),
                });
            }
        }

        Ok(issues)
    }
}

/// Counts occurrences, preserving first-seen order of the keys.
fn occurrences<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        if !counts.contains_key(item) {
            order.push(item.to_string());
        }
        *counts.entry(item.to_string()).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect()
}

/// Reads a file that a registry record claims exists.
fn read_existing(path: &Path) -> Result<String, EngineError> {
    if !path.exists() {
        return Err(EngineError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| EngineError::from_io(path, e))
}

/// Removes `path` if it exists; returns whether anything was removed.
fn remove_if_present(path: &str) -> Result<bool, EngineError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| EngineError::from_io(path, e))?;
    Ok(true)
}
