use fliplearn_core::{KeyValueStore, ReviewStep};
use fliplearn_types::{AppEvent, Notice};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn show_card<S>(
    state: &AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(review) = &state.review {
        app_to_ui_tx.send(AppEvent::ShowCard(review.view())).await?;
    }
    Ok(())
}

pub async fn handle_flip<S: KeyValueStore>(
    state: &mut AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(review) = state.review.as_mut() {
        review.flip();
    }
    show_card(state, app_to_ui_tx).await
}

pub async fn handle_next<S: KeyValueStore>(
    state: &mut AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(review) = state.review.as_mut() else {
        return Ok(());
    };

    if review.next() == ReviewStep::Completed {
        tracing::info!("Review completed ({} cards)", review.position().1);
        app_to_ui_tx
            .send(AppEvent::Notice(Notice::info("Successfully completed!")))
            .await?;
    }
    show_card(state, app_to_ui_tx).await
}
