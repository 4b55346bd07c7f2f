pub mod error;
pub mod types;
pub mod view;

pub use error::ErrorKind;
pub use types::{
    AppEvent, CardFace, CardView, EditorSnapshot, EntryId, Notice, SetSummary, UiCommand,
    WordPair, WordSet,
};
pub use view::{EditorInput, ReviewInput, View};
