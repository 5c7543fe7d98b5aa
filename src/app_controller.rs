use anyhow::{Context, Result};
use futures::future::join_all;
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::app_config::Config;
use crate::document_processor::DocumentProcessor;
use crate::language_utils;
use crate::path_naming;
use crate::providers::Provider;
use crate::translation_service::TranslationService;

// @module: Batch orchestrator for document translation

/// Aggregate outcome of one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Translated files written
    pub files_written: usize,
    /// (document, language) pairs skipped because a translation already exists
    pub jobs_skipped: usize,
    /// Jobs that failed outright (unsupported language, unreadable file)
    pub jobs_failed: usize,
    /// Text nodes across all files that kept their original text
    pub nodes_failed: usize,
}

/// Main application controller for batch document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Per-file transform pipeline
    processor: DocumentProcessor,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        let processor = DocumentProcessor::new(TranslationService::new(&config));
        Self { config, processor }
    }

    /// Create a controller with an explicit backend provider, used by tests.
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Self {
        let service = TranslationService::with_provider(provider, config.transform.clone());
        let processor = DocumentProcessor::new(service);
        Self { config, processor }
    }

    /// Run the batch: expand inputs, group them by original document, and
    /// translate every (document, language) pair not already on disk.
    ///
    /// All qualifying jobs start together with no concurrency bound; the
    /// controller waits for the whole set before returning, so no write is
    /// left in flight at exit.
    pub async fn run(
        &self,
        inputs: &[String],
        matcher: Option<&str>,
        langs: &[String],
        force: bool,
    ) -> Result<RunSummary> {
        let paths = collect_paths(inputs, matcher)?;
        if paths.is_empty() {
            warn!("No input documents to process");
            return Ok(RunSummary::default());
        }

        let groups = group_paths(&paths, &self.config.transform);

        let mut summary = RunSummary::default();
        let mut jobs = Vec::new();
        for (original, present) in &groups {
            for lang in langs {
                if !force && present.contains(lang) {
                    debug!("Skipping {} -> {}: translation already exists", original, lang);
                    summary.jobs_skipped += 1;
                    continue;
                }
                let path = original.clone();
                let lang = lang.clone();
                jobs.push(async move {
                    let outcome = self.processor.translate_file(&path, &lang).await;
                    (path, lang, outcome)
                });
            }
        }

        for (path, lang, outcome) in join_all(jobs).await {
            match outcome {
                Ok(report) => {
                    summary.files_written += 1;
                    summary.nodes_failed += report.failures.len();
                    if !report.failures.is_empty() {
                        warn!(
                            "{}: {} of {} text nodes kept their original text",
                            report.output,
                            report.failures.len(),
                            report.nodes_total
                        );
                    }
                }
                Err(e) => {
                    error!("Failed to translate {} into {}: {:#}", path, lang, e);
                    summary.jobs_failed += 1;
                }
            }
        }

        info!(
            "Batch complete: {} written, {} skipped, {} failed ({} text nodes kept original text)",
            summary.files_written, summary.jobs_skipped, summary.jobs_failed, summary.nodes_failed
        );

        Ok(summary)
    }
}

/// Expand the glob pattern (if any) against the current working directory and
/// union the result with the explicit input paths, de-duplicating. A glob
/// failure is fatal.
pub fn collect_paths(inputs: &[String], matcher: Option<&str>) -> Result<Vec<String>> {
    let mut set: BTreeSet<String> = BTreeSet::new();

    if let Some(pattern) = matcher {
        let entries = glob::glob(pattern)
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        for entry in entries {
            let path = entry.context("Failed to read glob match")?;
            set.insert(path.to_string_lossy().into_owned());
        }
    }

    set.extend(inputs.iter().cloned());
    Ok(set.into_iter().collect())
}

/// Partition paths into translation groups: original document -> set of
/// declared language codes already present as sibling translations.
///
/// Paths are visited shortest-first so an original is registered before its
/// translations. A file whose declared language segment does not resolve to a
/// supported code is treated as an original, not a translation.
pub fn group_paths(
    paths: &[String],
    aliases: &std::collections::HashMap<String, String>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut sorted: Vec<&String> = paths.iter().collect();
    sorted.sort_by_key(|p| p.len());

    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in sorted {
        let declared = path_naming::language_of(path);
        let is_translation = path_naming::segment_count(path) > 2
            && declared.is_some_and(|code| language_utils::resolves_to_supported(code, aliases));

        if is_translation {
            let original = path_naming::original_path(path);
            let declared = declared.unwrap_or_default().to_string();
            groups.entry(original).or_default().insert(declared);
        } else {
            groups.entry(path.clone()).or_default();
        }
    }
    groups
}
