pub mod editor;
pub mod explorer;
pub mod preview;
pub mod prompt;
pub mod tabs;
