use std::sync::Arc;

use fliplearn_core::KeyValueStore;
use fliplearn_types::{AppEvent, EntryId, ErrorKind, Notice};
use kanal::AsyncSender;

use super::editor::show_editor;
use crate::state::{ActiveView, AppState};

/// Fire off a translation for entry `index`. The result comes back as a
/// `TranslationReady` event on the loop's own channel.
pub async fn handle_translation_request<S: KeyValueStore>(
    state: &mut AppState<S>,
    index: usize,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(translator) = state.translator.as_ref().map(Arc::clone) else {
        let notice = Notice::error(
            ErrorKind::TranslationFailed,
            "Translation is not configured (set DEEPL_API_KEY)",
        );
        app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        return Ok(());
    };

    let (entry_id, word) = match state.editor.translation_request(index) {
        Ok(request) => request,
        Err(e) => {
            let message = match e.kind() {
                ErrorKind::EmptyInput => "Please enter a Turkish word!".to_string(),
                _ => format!("There is no word number {}", index + 1),
            };
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(e.kind(), message)))
                .await?;
            return Ok(());
        }
    };

    let (from, to) = {
        let config = state.config.read().await;
        (
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        )
    };

    tracing::info!("Translating '{}' for entry {}", word, entry_id);
    let reply_tx = ui_to_app_tx.clone();
    tokio::spawn(async move {
        let result = translator
            .translate(&word, from, to)
            .await
            .map(|translation| translation.text)
            .map_err(|e| {
                tracing::error!("Translation error: {}", e);
                e.to_string()
            });

        if let Err(e) = reply_tx
            .send(AppEvent::TranslationReady { entry_id, result })
            .await
        {
            tracing::error!("Failed to deliver translation: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_translation_ready<S: KeyValueStore>(
    state: &mut AppState<S>,
    entry_id: EntryId,
    result: Result<String, String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            let notice = Notice::error(
                ErrorKind::TranslationFailed,
                format!("An error occurred during translation: {}", e),
            );
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
            return Ok(());
        }
    };

    if !state.editor.apply_translation(entry_id, text) {
        tracing::debug!("Dropping translation for removed entry {}", entry_id);
        return Ok(());
    }

    if state.view == ActiveView::Editor {
        show_editor(state, app_to_ui_tx).await?;
    }
    Ok(())
}
