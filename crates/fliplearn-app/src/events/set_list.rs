use fliplearn_core::KeyValueStore;
use fliplearn_types::{AppEvent, ErrorKind, Notice, SetSummary, WordSet};
use kanal::AsyncSender;

use crate::state::AppState;

/// Reload the store and show the list
pub async fn show_sets<S: KeyValueStore>(
    state: &mut AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Err(e) = state.store.load_all().await {
        tracing::error!("Failed to read saved sets: {}", e);
        app_to_ui_tx
            .send(AppEvent::Notice(Notice::error(
                e.kind(),
                "Could not read your saved sets",
            )))
            .await?;
    }

    let summaries = state.store.sets().iter().map(SetSummary::from).collect();
    app_to_ui_tx.send(AppEvent::ShowSets(summaries)).await?;
    Ok(())
}

/// Copy of the listed set at `index`, or a notice if there is none
pub async fn set_at<S: KeyValueStore>(
    state: &AppState<S>,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<WordSet>> {
    match state.store.get(index) {
        Some(set) => Ok(Some(set.clone())),
        None => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(
                    ErrorKind::OutOfRange,
                    format!("There is no set number {}", index + 1),
                )))
                .await?;
            Ok(None)
        }
    }
}

pub async fn handle_delete<S: KeyValueStore>(
    state: &mut AppState<S>,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let notice = match state.store.delete_at(index).await {
        Ok(removed) => Notice::info(format!("Set '{}' deleted", removed.name)),
        Err(e) => {
            tracing::error!("Delete of set {} failed: {}", index, e);
            Notice::error(e.kind(), format!("Could not delete set {}: {}", index + 1, e))
        }
    };
    app_to_ui_tx.send(AppEvent::Notice(notice)).await?;

    let summaries = state.store.sets().iter().map(SetSummary::from).collect();
    app_to_ui_tx.send(AppEvent::ShowSets(summaries)).await?;
    Ok(())
}
