use std::sync::Arc;

use fliplearn_config::Config;
use fliplearn_core::{EditorState, ReviewSession, SetStore};
use fliplearn_translator::Translator;
use tokio::sync::RwLock;

/// Which view is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    SetList,
    Editor,
    Review,
}

/// Everything the event loop owns. Only the loop task touches it.
pub struct AppState<S> {
    pub config: Arc<RwLock<Config>>,
    pub store: SetStore<S>,
    pub translator: Option<Arc<dyn Translator>>,
    pub view: ActiveView,
    /// Outlives a trip to the review view so late translations still land
    pub editor: EditorState,
    pub review: Option<ReviewSession>,
}

impl<S> AppState<S> {
    pub fn new(
        config: Arc<RwLock<Config>>,
        store: SetStore<S>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            config,
            store,
            translator,
            view: ActiveView::Editor,
            editor: EditorState::init_empty(),
            review: None,
        }
    }
}
