use crate::workspace::Workspace;

pub fn language_for_path(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "tsx" | "ts" => "typescript",
        "jsx" | "js" => "javascript",
        "json" => "json",
        "css" => "css",
        "html" => "html",
        "md" => "markdown",
        _ => "plaintext",
    }
}

/// Binds the single editing surface to the active file.
///
/// The buffer mirrors the store; every change is written straight back with
/// no debouncing, so the last edit always wins.
#[derive(Debug, Default)]
pub struct EditorBinding {
    active_path: Option<String>,
    buffer: String,
    synced_revision: Option<u64>,
}

impl EditorBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }

    pub fn language(&self) -> Option<&'static str> {
        self.active_path.as_deref().map(language_for_path)
    }

    pub fn open(&mut self, path: &str, workspace: &Workspace) {
        tracing::debug!(path, "editor opened file");
        self.active_path = Some(path.to_string());
        self.load(workspace);
    }

    /// Reloads the buffer when the store changed underneath the editor.
    pub fn sync(&mut self, workspace: &Workspace) {
        if self.active_path.is_some() && self.synced_revision != Some(workspace.revision()) {
            self.load(workspace);
        }
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Writes the buffer back to the active file after a change event.
    pub fn apply_change(&mut self, workspace: &mut Workspace) {
        let Some(path) = self.active_path.as_deref() else {
            return;
        };

        match workspace.try_replace_content(path, &self.buffer) {
            Ok(()) => {
                tracing::trace!(path, bytes = self.buffer.len(), "editor change applied");
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "editor change not applied");
            }
        }
        self.synced_revision = Some(workspace.revision());
    }

    fn load(&mut self, workspace: &Workspace) {
        self.buffer.clear();
        if let Some(path) = self.active_path.as_deref() {
            self.buffer.push_str(workspace.content(path));
        }
        self.synced_revision = Some(workspace.revision());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_follows_extension() {
        assert_eq!(language_for_path("src/App.tsx"), "typescript");
        assert_eq!(language_for_path("src/util.ts"), "typescript");
        assert_eq!(language_for_path("src/old.JSX"), "javascript");
        assert_eq!(language_for_path("vite.config.js"), "javascript");
        assert_eq!(language_for_path("package.json"), "json");
        assert_eq!(language_for_path("src/index.css"), "css");
        assert_eq!(language_for_path("index.html"), "html");
        assert_eq!(language_for_path("README.md"), "markdown");
        assert_eq!(language_for_path("Makefile"), "plaintext");
    }

    #[test]
    fn open_loads_active_file_content() {
        let workspace = Workspace::seeded().expect("seed project should parse");
        let mut editor = EditorBinding::new();
        assert!(editor.active_path().is_none());

        editor.open("src/main.tsx", &workspace);
        assert_eq!(editor.active_path(), Some("src/main.tsx"));
        assert_eq!(editor.language(), Some("typescript"));
        assert_eq!(editor.buffer(), workspace.content("src/main.tsx"));
    }

    #[test]
    fn every_change_is_written_back() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let mut editor = EditorBinding::new();
        editor.open("src/index.css", &workspace);

        editor.buffer_mut().push_str("\n.a {}");
        editor.apply_change(&mut workspace);
        editor.buffer_mut().push_str("\n.b {}");
        editor.apply_change(&mut workspace);

        assert!(workspace.content("src/index.css").ends_with(".a {}\n.b {}"));
        assert_eq!(workspace.revision(), 2);
    }

    #[test]
    fn sync_picks_up_external_replacements() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let mut editor = EditorBinding::new();
        editor.open("package.json", &workspace);

        workspace.replace_content("package.json", "{}");
        editor.sync(&workspace);
        assert_eq!(editor.buffer(), "{}");
    }

    #[test]
    fn change_on_unknown_path_leaves_store_untouched() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let mut editor = EditorBinding::new();
        editor.open("src/ghost.tsx", &workspace);
        assert_eq!(editor.buffer(), "");

        editor.buffer_mut().push_str("boo");
        editor.apply_change(&mut workspace);
        assert_eq!(workspace.revision(), 0);
        assert_eq!(workspace.content("src/ghost.tsx"), "");
    }
}
