use fliplearn_core::{EntryPatch, KeyValueStore};
use fliplearn_types::{AppEvent, Notice};
use kanal::AsyncSender;

use super::EntryField;
use crate::state::AppState;

pub async fn show_editor<S>(
    state: &AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowEditor(state.editor.snapshot()))
        .await?;
    Ok(())
}

pub async fn handle_add_entry<S: KeyValueStore>(
    state: &mut AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let id = state.editor.add_entry();
    tracing::debug!("Added entry {}", id);
    show_editor(state, app_to_ui_tx).await
}

pub async fn handle_update_entry<S: KeyValueStore>(
    state: &mut AppState<S>,
    index: usize,
    field: EntryField,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let patch = match field {
        EntryField::Turkish => EntryPatch::turkish(text),
        EntryField::Translated => EntryPatch::translated(text),
    };

    if let Err(e) = state.editor.update_entry(index, patch) {
        tracing::warn!("Update ignored: {}", e);
        let notice = Notice::error(e.kind(), format!("There is no word number {}", index + 1));
        app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        return Ok(());
    }

    show_editor(state, app_to_ui_tx).await
}

pub async fn handle_remove_entry<S: KeyValueStore>(
    state: &mut AppState<S>,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Err(e) = state.editor.remove_entry(index) {
        tracing::warn!("Remove ignored: {}", e);
        let notice = Notice::error(e.kind(), format!("There is no word number {}", index + 1));
        app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        return Ok(());
    }

    show_editor(state, app_to_ui_tx).await
}

/// Commit the buffer and write it. The buffer only resets once the write lands.
/// A blank name in edit mode keeps the set's current name.
pub async fn handle_save<S: KeyValueStore>(
    state: &mut AppState<S>,
    name: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let name = match state.editor.match_name() {
        Some(current) if name.trim().is_empty() => current.to_string(),
        _ => name.to_string(),
    };

    let set = match state.editor.commit(&name) {
        Ok(set) => set,
        Err(e) => {
            let notice = Notice::error(e.kind(), "Please give your set a name");
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
            return Ok(());
        }
    };

    let updating = state.editor.is_editing();
    let match_name = state.editor.match_name().map(str::to_string);
    let set_name = set.name.clone();

    match state.store.save_or_update(set, match_name.as_deref()).await {
        Ok(()) => {
            let message = if updating {
                format!("Set '{}' updated", set_name)
            } else {
                format!("Set '{}' saved", set_name)
            };
            state.editor.reset();
            app_to_ui_tx.send(AppEvent::Notice(Notice::info(message))).await?;
            show_editor(state, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::error!("Failed to save set '{}': {}", set_name, e);
            let notice = Notice::error(e.kind(), format!("Could not save '{}': {}", set_name, e));
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
            Ok(())
        }
    }
}
