//! Live preview document synthesis.
//!
//! The preview never evaluates component code. It lifts the first
//! `return ( ... );` block out of the root component, flattens utility
//! classes into one inline style and drops the result into a fixed HTML
//! shell. Anything the patterns do not match renders as the welcome page.

use crate::workspace::{tree, FileNode};
use regex::{NoExpand, Regex};
use std::sync::{Arc, OnceLock};

pub const INDEX_HTML_PATH: &str = "index.html";
pub const ROOT_COMPONENT_PATH: &str = "src/App.tsx";
pub const ENTRY_SCRIPT_PATH: &str = "src/main.tsx";
pub const STYLESHEET_PATH: &str = "src/index.css";

pub const INLINE_STYLE: &str = r#"style="padding: 20px; font-family: system-ui, sans-serif;""#;

const WELCOME_FRAGMENT: &str = r#"
        <div style="padding: 40px; text-align: center; font-family: system-ui, sans-serif;">
          <h1 style="color: #1f2937; margin-bottom: 16px;">Welcome to Your App</h1>
          <p style="color: #6b7280;">Start building something amazing!</p>
        </div>
      "#;

const DOCUMENT_HEAD: &str = r#"
      <!DOCTYPE html>
      <html lang="en">
      <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Live Preview</title>
        <style>
          body {
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
            background: #f9fafb;
            min-height: 100vh;
          }
          .preview-container {
            width: 100%;
            height: 100vh;
            overflow: auto;
          }
          /* Basic Tailwind-like styles */
          .min-h-screen { min-height: 100vh; }
          .bg-gray-100 { background-color: #f3f4f6; }
          .flex { display: flex; }
          .items-center { align-items: center; }
          .justify-center { justify-content: center; }
          .text-center { text-align: center; }
          .text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
          .text-lg { font-size: 1.125rem; line-height: 1.75rem; }
          .font-bold { font-weight: 700; }
          .text-gray-900 { color: #111827; }
          .text-gray-600 { color: #4b5563; }
          .mb-4 { margin-bottom: 1rem; }
          .px-4 { padding-left: 1rem; padding-right: 1rem; }
          .py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
          .rounded-lg { border-radius: 0.5rem; }
          .bg-blue-600 { background-color: #2563eb; }
          .hover\:bg-blue-700:hover { background-color: #1d4ed8; }
          .text-white { color: #ffffff; }
          .transition-all { transition: all 0.15s ease-in-out; }
          .cursor-pointer { cursor: pointer; }
        </style>
      </head>
      <body>
        <div class="preview-container">
          "#;

const DOCUMENT_TAIL: &str = r#"
        </div>
      </body>
      </html>
    "#;

fn return_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"return\s*\(([\s\S]*?)\);").expect("return block pattern"))
}

fn class_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"className="[^"]*""#).expect("className pattern"))
}

fn open_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<(\w+)([^>]*)>").expect("open tag pattern"))
}

/// Project files the preview resolves on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSources<'a> {
    pub html: &'a str,
    pub component: &'a str,
    pub entry_script: &'a str,
    pub stylesheet: &'a str,
}

impl<'a> PreviewSources<'a> {
    pub fn resolve(files: &'a [FileNode]) -> Self {
        let sources = Self {
            html: tree::find_content(files, INDEX_HTML_PATH),
            component: tree::find_content(files, ROOT_COMPONENT_PATH),
            entry_script: tree::find_content(files, ENTRY_SCRIPT_PATH),
            stylesheet: tree::find_content(files, STYLESHEET_PATH),
        };
        tracing::trace!(
            html = !sources.html.is_empty(),
            component = !sources.component.is_empty(),
            entry_script = !sources.entry_script.is_empty(),
            stylesheet = !sources.stylesheet.is_empty(),
            "preview sources resolved"
        );
        sources
    }
}

/// The markup fragment lifted out of the root component, or `None` when the
/// source has no `return ( ... );` block.
pub fn extract_fragment(component: &str) -> Option<String> {
    let captures = return_block_pattern().captures(component)?;
    let markup = captures.get(1)?.as_str().trim();
    let styled = class_name_pattern().replace_all(markup, NoExpand(INLINE_STYLE));
    Some(open_tag_pattern().replace_all(&styled, "<${1}${2}>").into_owned())
}

pub fn wrap_document(fragment: &str) -> String {
    let mut document =
        String::with_capacity(DOCUMENT_HEAD.len() + fragment.len() + DOCUMENT_TAIL.len());
    document.push_str(DOCUMENT_HEAD);
    document.push_str(fragment);
    document.push_str(DOCUMENT_TAIL);
    document
}

/// Builds the full preview document for a project tree.
pub fn synthesize(files: &[FileNode]) -> String {
    let sources = PreviewSources::resolve(files);
    match extract_fragment(sources.component) {
        Some(fragment) => wrap_document(&fragment),
        None => wrap_document(WELCOME_FRAGMENT),
    }
}

/// Memoizes [`synthesize`] on the identity of the tree it was built from.
#[derive(Debug, Default)]
pub struct PreviewCache {
    source: Option<Arc<Vec<FileNode>>>,
    document: String,
    builds: u64,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&mut self, files: &Arc<Vec<FileNode>>) -> &str {
        let stale = self
            .source
            .as_ref()
            .map_or(true, |source| !Arc::ptr_eq(source, files));
        if stale {
            self.document = synthesize(files);
            self.source = Some(Arc::clone(files));
            self.builds += 1;
            tracing::debug!(builds = self.builds, bytes = self.document.len(), "preview rebuilt");
        }
        &self.document
    }

    #[cfg(test)]
    pub fn builds(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::Workspace;

    #[test]
    fn seed_preview_inlines_styles_and_drops_class_names() {
        let workspace = Workspace::seeded().expect("seed project should parse");
        let document = synthesize(workspace.files());

        assert!(document.contains(INLINE_STYLE));
        assert!(!document.contains("className="));
        assert!(document.contains("<h1 style=\"padding: 20px; font-family: system-ui, sans-serif;\">"));
        assert!(document.contains("Start building something amazing!"));
        assert!(document.contains(".hover\\:bg-blue-700:hover"));
    }

    #[test]
    fn component_without_return_block_falls_back_to_welcome() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        workspace.replace_content(ROOT_COMPONENT_PATH, "export const x = 1;");

        let document = synthesize(workspace.files());
        assert!(document.contains("Welcome to Your App"));
        assert!(document.contains("padding: 40px; text-align: center;"));
        assert!(!document.contains(INLINE_STYLE));
    }

    #[test]
    fn missing_root_component_falls_back_to_welcome() {
        let document = synthesize(&[FileNode::file("index.html", "index.html", "<html/>")]);
        assert!(document.contains("Welcome to Your App"));
        assert!(document.starts_with("\n      <!DOCTYPE html>"));
    }

    #[test]
    fn extraction_matches_first_block_and_is_not_paren_aware() {
        let source = "function A() {\n  return (\n    <p>{f(1);}</p>\n  );\n}";
        assert_eq!(extract_fragment(source).as_deref(), Some("<p>{f(1"));

        let two = "return (<a/>);\nreturn (<b/>);";
        assert_eq!(extract_fragment(two).as_deref(), Some("<a/>"));
    }

    #[test]
    fn extraction_replaces_every_class_name_with_the_same_style() {
        let source = r#"return (<div className="a"><span className="b c">x</span></div>);"#;
        let fragment = extract_fragment(source).expect("fragment should match");
        assert_eq!(fragment.matches(INLINE_STYLE).count(), 2);
        assert!(fragment.starts_with("<div style="));
    }

    #[test]
    fn extraction_leaves_dynamic_class_expressions_alone() {
        let source = "return (\n<button className={`${base}`}>go</button>\n);";
        let fragment = extract_fragment(source).expect("fragment should match");
        assert!(fragment.contains("className={`${base}`}"));
    }

    #[test]
    fn resolve_reads_all_fixed_sources() {
        let workspace = Workspace::seeded().expect("seed project should parse");
        let sources = PreviewSources::resolve(workspace.files());
        assert!(sources.html.contains("<div id=\"root\"></div>"));
        assert!(sources.component.contains("function App()"));
        assert!(sources.entry_script.contains("createRoot"));
        assert!(sources.stylesheet.starts_with("@tailwind base;"));
    }

    #[test]
    fn cache_rebuilds_only_when_tree_identity_changes() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let mut cache = PreviewCache::new();

        let first = cache.document(workspace.files()).to_string();
        let _ = cache.document(workspace.files());
        assert_eq!(cache.builds(), 1);

        workspace.replace_content("src/missing.tsx", "x");
        let _ = cache.document(workspace.files());
        assert_eq!(cache.builds(), 1);

        workspace.replace_content(ROOT_COMPONENT_PATH, "export const x = 1;");
        let second = cache.document(workspace.files()).to_string();
        assert_eq!(cache.builds(), 2);
        assert_ne!(first, second);
    }
}
