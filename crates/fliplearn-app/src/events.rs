use fliplearn_core::{EditorState, KeyValueStore, ReviewSession};
use fliplearn_types::{AppEvent, EditorInput, Notice, ReviewInput, SetSummary, UiCommand, View};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::{ActiveView, AppState};

pub mod editor;
pub mod review;
pub mod set_list;
pub mod translate;

use editor::{handle_add_entry, handle_remove_entry, handle_save, handle_update_entry};
use review::{handle_flip, handle_next};
use set_list::{handle_delete, show_sets};
use translate::{handle_translation_ready, handle_translation_request};

/// App's main loop. Owns the state; returns when the user quits or on cancel.
/// Commands already queued when the cancel arrives are still handled.
pub async fn event_loop<S: KeyValueStore>(
    mut state: AppState<S>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop");

    // Home screen goes straight to a blank editor
    navigate(&mut state, View::Editor(EditorInput::default()), &app_to_ui_tx).await?;

    loop {
        let event = tokio::select! {
            biased;
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::Ui(UiCommand::Quit) | AppEvent::Quit) {
            tracing::info!("[EVENT_LOOP] Quit requested");
            let _ = app_to_ui_tx.send(AppEvent::Quit).await;
            return Ok(());
        }

        handle_events(&mut state, &ui_to_app_tx, &app_to_ui_tx, event).await?;
    }
}

async fn handle_events<S: KeyValueStore>(
    state: &mut AppState<S>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Ui(command) => {
            handle_command(state, ui_to_app_tx, app_to_ui_tx, command).await?;
        }
        AppEvent::Navigate(view) => {
            navigate(state, view, app_to_ui_tx).await?;
        }
        AppEvent::TranslationReady { entry_id, result } => {
            handle_translation_ready(state, entry_id, result, app_to_ui_tx).await?;
        }
        AppEvent::ShowSets(_)
        | AppEvent::ShowEditor(_)
        | AppEvent::ShowCard(_)
        | AppEvent::ShowHelp
        | AppEvent::Notice(_) => {
            // UI-only events, ignore in backend
        }
        AppEvent::Quit => {}
    }

    Ok(())
}

async fn handle_command<S: KeyValueStore>(
    state: &mut AppState<S>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    command: UiCommand,
) -> anyhow::Result<()> {
    let needed = required_view(&command);
    if let Some(view) = needed.filter(|view| *view != state.view) {
        let hint = match view {
            ActiveView::SetList => "open your sets first with `sets`",
            ActiveView::Editor => "open the editor first with `new` or `edit <n>`",
            ActiveView::Review => "start a review first with `study <n>` or `learn`",
        };
        app_to_ui_tx.send(AppEvent::Notice(Notice::info(hint))).await?;
        return Ok(());
    }

    match command {
        UiCommand::ListSets => navigate(state, View::SetList, app_to_ui_tx).await?,
        UiCommand::NewSet => {
            navigate(state, View::Editor(EditorInput::default()), app_to_ui_tx).await?
        }
        UiCommand::EditSet(index) => {
            if let Some(set) = set_list::set_at(state, index, app_to_ui_tx).await? {
                let input = EditorInput { editing: Some(set) };
                navigate(state, View::Editor(input), app_to_ui_tx).await?;
            }
        }
        UiCommand::StudySet(index) => {
            if let Some(set) = set_list::set_at(state, index, app_to_ui_tx).await? {
                let input = ReviewInput { words: set.words };
                navigate(state, View::Review(input), app_to_ui_tx).await?;
            }
        }
        UiCommand::DeleteSet(index) => handle_delete(state, index, app_to_ui_tx).await?,
        UiCommand::AddEntry => handle_add_entry(state, app_to_ui_tx).await?,
        UiCommand::SetWord { index, text } => {
            handle_update_entry(state, index, EntryField::Turkish, text, app_to_ui_tx).await?
        }
        UiCommand::SetMeaning { index, text } => {
            handle_update_entry(state, index, EntryField::Translated, text, app_to_ui_tx).await?
        }
        UiCommand::RemoveEntry(index) => handle_remove_entry(state, index, app_to_ui_tx).await?,
        UiCommand::Translate(index) => {
            handle_translation_request(state, index, ui_to_app_tx, app_to_ui_tx).await?
        }
        UiCommand::Save(name) => handle_save(state, &name, app_to_ui_tx).await?,
        UiCommand::LearnCurrent => {
            let input = ReviewInput {
                words: state.editor.pairs(),
            };
            navigate(state, View::Review(input), app_to_ui_tx).await?;
        }
        UiCommand::Flip => handle_flip(state, app_to_ui_tx).await?,
        UiCommand::Next => handle_next(state, app_to_ui_tx).await?,
        UiCommand::Show => show_current(state, app_to_ui_tx).await?,
        UiCommand::Help => app_to_ui_tx.send(AppEvent::ShowHelp).await?,
        UiCommand::Quit => {}
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub enum EntryField {
    Turkish,
    Translated,
}

fn required_view(command: &UiCommand) -> Option<ActiveView> {
    match command {
        UiCommand::EditSet(_) | UiCommand::StudySet(_) | UiCommand::DeleteSet(_) => {
            Some(ActiveView::SetList)
        }
        UiCommand::AddEntry
        | UiCommand::SetWord { .. }
        | UiCommand::SetMeaning { .. }
        | UiCommand::RemoveEntry(_)
        | UiCommand::Translate(_)
        | UiCommand::Save(_)
        | UiCommand::LearnCurrent => Some(ActiveView::Editor),
        UiCommand::Flip | UiCommand::Next => Some(ActiveView::Review),
        UiCommand::ListSets
        | UiCommand::NewSet
        | UiCommand::Show
        | UiCommand::Help
        | UiCommand::Quit => None,
    }
}

/// Switch views. Each view is built from its typed input only.
pub async fn navigate<S: KeyValueStore>(
    state: &mut AppState<S>,
    view: View,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match view {
        View::SetList => {
            state.view = ActiveView::SetList;
            show_sets(state, app_to_ui_tx).await?;
        }
        View::Editor(EditorInput { editing }) => {
            state.editor = match editing {
                Some(set) => {
                    tracing::info!("Editing set '{}'", set.name);
                    EditorState::init_from_set(&set)
                }
                None => EditorState::init_empty(),
            };
            state.view = ActiveView::Editor;
            editor::show_editor(state, app_to_ui_tx).await?;
        }
        View::Review(ReviewInput { words }) => {
            match ReviewSession::new(words) {
                Ok(session) => {
                    state.review = Some(session);
                    state.view = ActiveView::Review;
                    review::show_card(state, app_to_ui_tx).await?;
                }
                Err(e) => {
                    tracing::warn!("Cannot start review: {}", e);
                    let notice = Notice::error(e.kind(), "There are no words to study");
                    app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
                }
            }
        }
    }

    Ok(())
}

async fn show_current<S: KeyValueStore>(
    state: &AppState<S>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.view {
        ActiveView::SetList => {
            let summaries = state.store.sets().iter().map(SetSummary::from).collect();
            app_to_ui_tx.send(AppEvent::ShowSets(summaries)).await?;
        }
        ActiveView::Editor => editor::show_editor(state, app_to_ui_tx).await?,
        ActiveView::Review => review::show_card(state, app_to_ui_tx).await?,
    }
    Ok(())
}
