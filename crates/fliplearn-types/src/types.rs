use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ErrorKind;
use crate::view::View;

/// One source/target word association
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    #[serde(default)]
    pub turkish_word: String,
    #[serde(default)]
    pub translated_word: String,
}

impl WordPair {
    pub fn new(turkish_word: impl Into<String>, translated_word: impl Into<String>) -> Self {
        Self {
            turkish_word: turkish_word.into(),
            translated_word: translated_word.into(),
        }
    }
}

/// Named, ordered collection of word pairs. The unit of save/load/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    pub name: String,
    #[serde(default)]
    pub words: Vec<WordPair>,
}

impl WordSet {
    pub fn new(name: impl Into<String>, words: Vec<WordPair>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }
}

/// Stable identity of an editor entry, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User intent parsed by the front end
    Ui(UiCommand),
    Navigate(View),
    TranslationReady {
        entry_id: EntryId,
        result: Result<String, String>,
    },
    ShowSets(Vec<SetSummary>),
    ShowEditor(EditorSnapshot),
    ShowCard(CardView),
    ShowHelp,
    Notice(Notice),
    Quit,
}

/// Commands typed at the terminal. Indices are zero-based here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    ListSets,
    NewSet,
    EditSet(usize),
    StudySet(usize),
    DeleteSet(usize),
    AddEntry,
    SetWord { index: usize, text: String },
    SetMeaning { index: usize, text: String },
    RemoveEntry(usize),
    Translate(usize),
    Save(String),
    LearnCurrent,
    Flip,
    Next,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSummary {
    pub name: String,
    pub word_count: usize,
}

impl From<&WordSet> for SetSummary {
    fn from(set: &WordSet) -> Self {
        Self {
            name: set.name.clone(),
            word_count: set.words.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    /// Original name when editing a stored set
    pub editing: Option<String>,
    pub entries: Vec<WordPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Shows the translated word
    Front,
    /// Shows the Turkish word
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// 1-based
    pub position: usize,
    pub total: usize,
    pub face: CardFace,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set_uses_stored_field_names() {
        let set = WordSet::new("Colors", vec![WordPair::new("kırmızı", "red")]);
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["name"], "Colors");
        assert_eq!(json["words"][0]["turkishWord"], "kırmızı");
        assert_eq!(json["words"][0]["translatedWord"], "red");
    }

    #[test]
    fn test_word_pair_ignores_legacy_id_field() {
        let json = r#"{"id": 1712345678901, "turkishWord": "kedi", "translatedWord": "cat"}"#;
        let pair: WordPair = serde_json::from_str(json).unwrap();

        assert_eq!(pair, WordPair::new("kedi", "cat"));
    }

    #[test]
    fn test_entry_ids_are_distinct() {
        assert_ne!(EntryId::new(), EntryId::new());
    }
}
