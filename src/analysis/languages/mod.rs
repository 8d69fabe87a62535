//! Registry of language capability bundles.

mod javascript;
mod python;

pub use javascript::JavaScriptSupport;
pub use python::PythonSupport;

use super::LanguageSupport;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Static storage for Python support.
static PYTHON_SUPPORT: OnceCell<PythonSupport> = OnceCell::new();

/// Static storage for JavaScript/TypeScript support.
static JAVASCRIPT_SUPPORT: OnceCell<JavaScriptSupport> = OnceCell::new();

/// Whether language bundles have been registered.
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register all available language bundles.
///
/// Idempotent; lookups call it on demand.
pub fn register_languages() {
    if REGISTERED.swap(true, Ordering::SeqCst) {
        return;
    }

    PYTHON_SUPPORT.get_or_init(PythonSupport::new);
    JAVASCRIPT_SUPPORT.get_or_init(JavaScriptSupport::new);
}

/// All registered bundles, in registration order.
fn all_languages() -> Vec<&'static dyn LanguageSupport> {
    register_languages();

    let mut bundles: Vec<&'static dyn LanguageSupport> = Vec::new();
    if let Some(p) = PYTHON_SUPPORT.get() {
        bundles.push(p);
    }
    if let Some(js) = JAVASCRIPT_SUPPORT.get() {
        bundles.push(js);
    }
    bundles
}

/// Get the bundle for a language tag, matched case-insensitively.
///
/// Returns None for unrecognized languages.
pub fn get_language(tag: &str) -> Option<&'static dyn LanguageSupport> {
    let tag = tag.to_lowercase();
    all_languages()
        .into_iter()
        .find(|bundle| bundle.handles_language(&tag))
}

/// Map a file extension (without dot) to a canonical language tag.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "py" | "pyi" => Some("python"),
        "js" | "jsx" | "mjs" | "cjs" => Some("javascript"),
        "ts" | "tsx" | "mts" => Some("typescript"),
        _ => None,
    }
}

/// Get all supported language tags.
pub fn supported_languages() -> Vec<&'static str> {
    all_languages()
        .into_iter()
        .flat_map(|bundle| bundle.language_ids().iter().copied())
        .collect()
}

/// Get all file extensions handled by some bundle.
pub fn supported_extensions() -> Vec<&'static str> {
    all_languages()
        .into_iter()
        .flat_map(|bundle| bundle.file_extensions().iter().copied())
        .collect()
}
