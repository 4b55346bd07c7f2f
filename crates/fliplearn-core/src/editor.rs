//! Word-pair editor state.
//!
//! The authoring buffer behind the editor view. Every entry carries an
//! [`EntryId`] so asynchronous results (translations) can find their entry
//! after the list has been reordered or shrunk.

use fliplearn_types::{EditorSnapshot, EntryId, WordPair, WordSet};

use crate::error::CoreError;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing { original_name: String },
}

#[derive(Debug, Clone)]
struct Entry {
    id: EntryId,
    pair: WordPair,
}

impl Entry {
    fn blank() -> Self {
        Self::from_pair(WordPair::default())
    }

    fn from_pair(pair: WordPair) -> Self {
        Self {
            id: EntryId::new(),
            pair,
        }
    }
}

/// Partial update for one entry. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub turkish_word: Option<String>,
    pub translated_word: Option<String>,
}

impl EntryPatch {
    pub fn turkish(text: impl Into<String>) -> Self {
        Self {
            turkish_word: Some(text.into()),
            translated_word: None,
        }
    }

    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            turkish_word: None,
            translated_word: Some(text.into()),
        }
    }

    fn apply(self, pair: &mut WordPair) {
        if let Some(word) = self.turkish_word {
            pair.turkish_word = word;
        }
        if let Some(word) = self.translated_word {
            pair.translated_word = word;
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    mode: EditorMode,
    entries: Vec<Entry>,
}

impl EditorState {
    /// Fresh buffer with one blank entry
    pub fn init_empty() -> Self {
        Self {
            mode: EditorMode::Creating,
            entries: vec![Entry::blank()],
        }
    }

    /// Buffer seeded from a stored set, remembering its name for the save
    pub fn init_from_set(set: &WordSet) -> Self {
        Self {
            mode: EditorMode::Editing {
                original_name: set.name.clone(),
            },
            entries: set.words.iter().cloned().map(Entry::from_pair).collect(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    /// Name to replace on save, only set in edit mode
    pub fn match_name(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Editing { original_name } => Some(original_name.as_str()),
            EditorMode::Creating => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&WordPair> {
        self.entries.get(index).map(|e| &e.pair)
    }

    pub fn pairs(&self) -> Vec<WordPair> {
        self.entries.iter().map(|e| e.pair.clone()).collect()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            editing: self.match_name().map(str::to_string),
            entries: self.pairs(),
        }
    }

    pub fn add_entry(&mut self) -> EntryId {
        let entry = Entry::blank();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn update_entry(&mut self, index: usize, patch: EntryPatch) -> Result<(), CoreError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfBounds { index, len })?;
        patch.apply(&mut entry.pair);
        Ok(())
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<WordPair, CoreError> {
        if index >= self.entries.len() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index).pair)
    }

    /// Id and cleaned-up source word for a translation of entry `index`
    pub fn translation_request(&self, index: usize) -> Result<(EntryId, String), CoreError> {
        let entry = self.entries.get(index).ok_or(CoreError::IndexOutOfBounds {
            index,
            len: self.entries.len(),
        })?;

        let word = DefaultPreprocessor.process(&entry.pair.turkish_word);
        if word.is_empty() {
            return Err(CoreError::EmptyInput {
                field: "Turkish word",
            });
        }
        Ok((entry.id, word))
    }

    /// Land a translation on the entry with `id`. Returns false if it is gone.
    pub fn apply_translation(&mut self, id: EntryId, text: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.pair.translated_word = text.into();
                true
            }
            None => false,
        }
    }

    /// Snapshot the entries under `name`. Does not reset; see [`Self::reset`].
    pub fn commit(&self, name: &str) -> Result<WordSet, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyInput { field: "set name" });
        }
        Ok(WordSet::new(name, self.pairs()))
    }

    /// Back to creating with one blank entry, once a commit has been saved
    pub fn reset(&mut self) {
        *self = Self::init_empty();
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::init_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fliplearn_types::ErrorKind;

    fn animals() -> WordSet {
        WordSet::new(
            "Animals",
            vec![
                WordPair::new("kedi", "cat"),
                WordPair::new("köpek", "dog"),
                WordPair::new("kuş", "bird"),
            ],
        )
    }

    #[test]
    fn test_init_empty_has_one_blank_entry() {
        let editor = EditorState::init_empty();

        assert_eq!(editor.mode(), &EditorMode::Creating);
        assert_eq!(editor.pairs(), vec![WordPair::default()]);
        assert_eq!(editor.match_name(), None);
    }

    #[test]
    fn test_init_from_set_enters_edit_mode() {
        let editor = EditorState::init_from_set(&animals());

        assert!(editor.is_editing());
        assert_eq!(editor.match_name(), Some("Animals"));
        assert_eq!(editor.pairs(), animals().words);
    }

    #[test]
    fn test_entry_count_tracks_adds_and_removes() {
        let mut editor = EditorState::init_empty();
        let mut expected = 1usize;

        // add, add, remove, remove, remove, remove (past empty), add
        let script = [true, true, false, false, false, false, true];
        for add in script {
            if add {
                editor.add_entry();
                expected += 1;
            } else if editor.remove_entry(0).is_ok() {
                expected -= 1;
            }
            assert_eq!(editor.len(), expected);
        }
        assert_eq!(expected, 1);
    }

    #[test]
    fn test_remove_can_empty_the_list() {
        let mut editor = EditorState::init_empty();
        editor.remove_entry(0).unwrap();

        assert!(editor.is_empty());
        let err = editor.remove_entry(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut editor = EditorState::init_from_set(&animals());

        editor.update_entry(1, EntryPatch::turkish("it")).unwrap();
        assert_eq!(editor.entry(1), Some(&WordPair::new("it", "dog")));

        editor.update_entry(1, EntryPatch::translated("hound")).unwrap();
        assert_eq!(editor.entry(1), Some(&WordPair::new("it", "hound")));
    }

    #[test]
    fn test_update_out_of_bounds_is_noop() {
        let mut editor = EditorState::init_from_set(&animals());

        let err = editor.update_entry(7, EntryPatch::turkish("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(editor.pairs(), animals().words);
    }

    #[test]
    fn test_commit_rejects_blank_names() {
        let editor = EditorState::init_empty();

        for name in ["", "   "] {
            let err = editor.commit(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_commit_snapshots_entries_under_trimmed_name() {
        let mut editor = EditorState::init_empty();
        editor.update_entry(0, EntryPatch::turkish("kedi")).unwrap();
        editor.update_entry(0, EntryPatch::translated("cat")).unwrap();

        let set = editor.commit("  Animals ").unwrap();
        assert_eq!(set, WordSet::new("Animals", vec![WordPair::new("kedi", "cat")]));

        // Commit alone leaves the buffer in place until the save lands
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_reset_returns_to_creating() {
        let mut editor = EditorState::init_from_set(&animals());
        editor.reset();

        assert_eq!(editor.mode(), &EditorMode::Creating);
        assert_eq!(editor.pairs(), vec![WordPair::default()]);
    }

    #[test]
    fn test_translation_lands_on_moved_entry() {
        let mut editor = EditorState::init_from_set(&animals());
        let (id, word) = editor.translation_request(2).unwrap();
        assert_eq!(word, "kuş");

        // Entry 0 removed while the request is in flight; kuş is now index 1
        editor.remove_entry(0).unwrap();

        assert!(editor.apply_translation(id, "bird!"));
        assert_eq!(editor.entry(1), Some(&WordPair::new("kuş", "bird!")));
        assert_eq!(editor.entry(0), Some(&WordPair::new("köpek", "dog")));
    }

    #[test]
    fn test_translation_for_removed_entry_is_dropped() {
        let mut editor = EditorState::init_from_set(&animals());
        let (id, _) = editor.translation_request(0).unwrap();
        editor.remove_entry(0).unwrap();

        assert!(!editor.apply_translation(id, "cat"));
        assert_eq!(editor.pairs(), animals().words[1..].to_vec());
    }

    #[test]
    fn test_translation_request_needs_a_word() {
        let editor = EditorState::init_empty();

        let err = editor.translation_request(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }
}
