use crate::types::{WordPair, WordSet};

/// Entry point of the editor view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorInput {
    /// Stored set to edit, `None` to author a new one
    pub editing: Option<WordSet>,
}

/// Entry point of the flip-card review view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    pub words: Vec<WordPair>,
}

/// Views the app can navigate between, each carrying its own typed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    SetList,
    Editor(EditorInput),
    Review(ReviewInput),
}
