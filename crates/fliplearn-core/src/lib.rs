pub mod editor;
pub mod error;
pub mod preprocess;
pub mod review;
pub mod storage;
pub mod store;

pub use editor::{EditorMode, EditorState, EntryPatch};
pub use error::CoreError;
pub use review::{ReviewSession, ReviewStep};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use store::SetStore;
