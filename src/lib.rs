/*!
 * # mdtranslate - Batch markdown/MDX document translator
 *
 * A Rust library for batch translation of markdown/MDX documents into
 * language-suffixed sibling files.
 *
 * ## Features
 *
 * - Walks each document's syntax tree and translates the text of headings
 *   and paragraphs, leaving code blocks and other structure untouched
 * - Rewrites the front matter `slug` field to `/<lang><original-slug>`
 * - Writes results to `<base>.<lang>.<ext>` next to the input `<base>.<ext>`
 * - Skips languages already present on disk unless forced
 * - Language-code alias table for codes the backend spells differently
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `path_naming`: The `<base>.<lang>.<ext>` path convention
 * - `language_utils`: Supported-language set and alias resolution
 * - `translation_service`: Gateway to the backend with bounded retry
 * - `document_processor`: Per-file parse/transform/serialize pipeline
 * - `app_controller`: Batch orchestration (grouping, skipping, dispatch)
 * - `providers`: Translation backend clients:
 *   - `providers::youdao`: Youdao open API client
 *   - `providers::mock`: Mock backend for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document_processor;
pub mod errors;
pub mod language_utils;
pub mod path_naming;
pub mod providers;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use document_processor::{DocumentProcessor, FileReport, NodeFailure};
pub use errors::{AppError, ProviderError, TranslationError};
pub use translation_service::TranslationService;
