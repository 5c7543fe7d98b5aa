use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, format_commonmark, parse_document};
use futures::future::join_all;
use log::{debug, error, info};
use tokio::fs;

use crate::path_naming;
use crate::translation_service::TranslationService;

/// Outcome of translating one file into one language.
#[derive(Debug)]
pub struct FileReport {
    /// Source document path
    pub source: String,
    /// Path the translated document was written to
    pub output: String,
    /// Requested target language
    pub target_lang: String,
    /// Number of text nodes submitted for translation
    pub nodes_total: usize,
    /// Nodes whose translation failed after the retry budget; their original
    /// text was kept in the output
    pub failures: Vec<NodeFailure>,
}

/// A single text node that could not be translated.
#[derive(Debug)]
pub struct NodeFailure {
    /// The untranslated node text, kept verbatim in the output
    pub text: String,
    /// The error that exhausted the retry budget
    pub error: String,
}

/// Document transform pipeline: one source file plus one target language in,
/// one translated sibling file out.
///
/// The pipeline parses the document into an AST (front matter included), runs
/// the slug localization pass, then the text translation pass, and serializes
/// the mutated tree to `<base>.<lang>.<ext>`. The tree is owned exclusively
/// by one invocation and never shared across files or languages.
pub struct DocumentProcessor {
    service: TranslationService,
}

impl DocumentProcessor {
    pub fn new(service: TranslationService) -> Self {
        Self { service }
    }

    /// Translate one document into one language and write the result to the
    /// language-suffixed sibling path.
    ///
    /// Fails before reading the file when the target language is unsupported.
    /// Per-node translation failures do not fail the file: the node keeps its
    /// original text and the failure is recorded in the report.
    pub async fn translate_file(&self, source_path: &str, lang: &str) -> Result<FileReport> {
        self.service.resolve_target(lang)?;

        let content = fs::read_to_string(source_path)
            .await
            .with_context(|| format!("Failed to read document: {}", source_path))?;

        let mut options = Options::default();
        options.extension.front_matter_delimiter = Some("---".to_string());

        let arena = Arena::new();
        let root = parse_document(&arena, &content, &options);

        // Pass 1: slug localization. Must complete before any translation.
        localize_slug(root, lang)
            .with_context(|| format!("Failed to rewrite front matter of {}", source_path))?;

        // Pass 2: concurrent text translation.
        let (nodes_total, failures) = self.translate_tree(root, lang).await;

        let mut rendered = Vec::new();
        format_commonmark(root, &options, &mut rendered)
            .with_context(|| format!("Failed to serialize document: {}", source_path))?;

        let output = path_naming::translated_path(source_path, lang);
        fs::write(&output, &rendered)
            .await
            .with_context(|| format!("Failed to write document: {}", output))?;

        info!("Success: {}", output);

        Ok(FileReport {
            source: source_path.to_string(),
            output,
            target_lang: lang.to_string(),
            nodes_total,
            failures,
        })
    }

    /// Translate every collected text node concurrently, in place. Waits for
    /// all nodes to settle; imposes no order among them. A failed node logs
    /// the error, keeps its original text, and is recorded in the result.
    async fn translate_tree<'a>(
        &self,
        root: &'a AstNode<'a>,
        lang: &str,
    ) -> (usize, Vec<NodeFailure>) {
        let targets = collect_text_nodes(root);
        let nodes_total = targets.len();

        let jobs = targets.into_iter().map(|node| {
            let text = match &node.data.borrow().value {
                NodeValue::Text(t) => t.clone(),
                _ => String::new(),
            };
            async move {
                match self.service.translate(&text, lang).await {
                    Ok(translated) => {
                        node.data.borrow_mut().value = NodeValue::Text(translated);
                        None
                    }
                    Err(e) => {
                        error!("Failed to translate \"{}\": {}", excerpt(&text), e);
                        Some(NodeFailure {
                            text,
                            error: e.to_string(),
                        })
                    }
                }
            }
        });

        let failures = join_all(jobs).await.into_iter().flatten().collect();
        (nodes_total, failures)
    }
}

/// Rewrite the front matter `slug` field to `/<lang><original-slug>`.
///
/// A document without front matter, or front matter without a `slug` field,
/// is left untouched.
fn localize_slug<'a>(root: &'a AstNode<'a>, lang: &str) -> Result<()> {
    for node in root.descendants() {
        let mut data = node.data.borrow_mut();
        let NodeValue::FrontMatter(raw) = &mut data.value else {
            continue;
        };

        let body = frontmatter_body(raw);
        if body.trim().is_empty() {
            continue;
        }

        let mut doc: serde_yaml::Mapping =
            serde_yaml::from_str(&body).context("Failed to parse front matter as YAML")?;

        let key = serde_yaml::Value::String("slug".to_string());
        match doc.get_mut(&key) {
            Some(serde_yaml::Value::String(slug)) => {
                *slug = format!("/{}{}", lang, slug);
            }
            _ => {
                debug!("Front matter has no slug field, leaving it unchanged");
                continue;
            }
        }

        let serialized =
            serde_yaml::to_string(&doc).context("Failed to serialize front matter")?;
        *raw = format!("---\n{}---\n\n", serialized);
    }
    Ok(())
}

/// Collect every text node that descends from a heading or paragraph node.
/// Code blocks, code spans, and link destinations are never traversed into a
/// `Text` node, so they stay untranslated.
fn collect_text_nodes<'a>(root: &'a AstNode<'a>) -> Vec<&'a AstNode<'a>> {
    let mut nodes = Vec::new();
    for node in root.descendants() {
        let is_container = matches!(
            node.data.borrow().value,
            NodeValue::Heading(_) | NodeValue::Paragraph
        );
        if !is_container {
            continue;
        }
        for child in node.descendants() {
            if matches!(child.data.borrow().value, NodeValue::Text(_)) {
                nodes.push(child);
            }
        }
    }
    nodes
}

/// The YAML between the front matter fences, without the fences themselves.
fn frontmatter_body(raw: &str) -> String {
    let mut lines: Vec<&str> = raw.lines().collect();
    while matches!(lines.last(), Some(l) if l.trim().is_empty()) {
        lines.pop();
    }
    if matches!(lines.last(), Some(l) if l.trim() == "---") {
        lines.pop();
    }
    if matches!(lines.first(), Some(l) if l.trim() == "---") {
        lines.remove(0);
    }
    lines.join("\n")
}

/// Short prefix of a node's text for log lines.
fn excerpt(text: &str) -> String {
    const MAX: usize = 40;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
