use crate::workspace::FileNode;
use std::collections::BTreeSet;

pub const INDENT_BASE: f32 = 8.0;
pub const INDENT_STEP: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    FolderOpen,
    FolderClosed,
    Code,
    Config,
    Stylesheet,
    Markup,
    Image,
    Plain,
}

impl FileIcon {
    pub fn for_node(node: &FileNode, expanded: bool) -> Self {
        if node.is_folder() {
            return if expanded {
                Self::FolderOpen
            } else {
                Self::FolderClosed
            };
        }

        let extension = node
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "tsx" | "ts" | "jsx" | "js" => Self::Code,
            "json" => Self::Config,
            "css" | "scss" => Self::Stylesheet,
            "html" => Self::Markup,
            "png" | "jpg" | "jpeg" | "svg" => Self::Image,
            _ => Self::Plain,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::FolderOpen => "📂",
            Self::FolderClosed => "📁",
            Self::Code => "{}",
            Self::Config => "⚙",
            Self::Stylesheet | Self::Markup => "📄",
            Self::Image => "🖼",
            Self::Plain => "🗋",
        }
    }
}

pub fn indent_for_level(level: usize) -> f32 {
    INDENT_BASE + level as f32 * INDENT_STEP
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    Toggle(String),
    Select(String),
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    expanded: BTreeSet<String>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            expanded: BTreeSet::from(["src".to_string()]),
        }
    }
}

impl ExplorerState {
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Action for a click on `node`: folders toggle, files select.
    pub fn click(node: &FileNode) -> ExplorerAction {
        if node.is_folder() {
            ExplorerAction::Toggle(node.path.clone())
        } else {
            ExplorerAction::Select(node.path.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_is_expanded_initially_and_toggles() {
        let mut state = ExplorerState::default();
        assert!(state.is_expanded("src"));
        assert!(!state.is_expanded("src/components"));

        state.toggle("src");
        state.toggle("src/components");
        assert!(!state.is_expanded("src"));
        assert!(state.is_expanded("src/components"));
    }

    #[test]
    fn icons_follow_kind_and_extension() {
        let folder = FileNode::folder("src", "src", Vec::new());
        assert_eq!(FileIcon::for_node(&folder, true), FileIcon::FolderOpen);
        assert_eq!(FileIcon::for_node(&folder, false), FileIcon::FolderClosed);

        let cases = [
            ("App.tsx", FileIcon::Code),
            ("main.js", FileIcon::Code),
            ("package.json", FileIcon::Config),
            ("theme.SCSS", FileIcon::Stylesheet),
            ("index.html", FileIcon::Markup),
            ("logo.svg", FileIcon::Image),
            ("LICENSE", FileIcon::Plain),
        ];
        for (name, expected) in cases {
            let node = FileNode::file(name, name, "");
            assert_eq!(FileIcon::for_node(&node, false), expected, "{name}");
        }
    }

    #[test]
    fn click_toggles_folders_and_selects_files() {
        let folder = FileNode::folder("src", "src", Vec::new());
        let file = FileNode::file("App.tsx", "src/App.tsx", "");
        assert_eq!(ExplorerState::click(&folder), ExplorerAction::Toggle("src".to_string()));
        assert_eq!(
            ExplorerState::click(&file),
            ExplorerAction::Select("src/App.tsx".to_string())
        );
    }

    #[test]
    fn indentation_grows_per_level() {
        assert_eq!(indent_for_level(0), 8.0);
        assert_eq!(indent_for_level(2), 40.0);
    }
}
