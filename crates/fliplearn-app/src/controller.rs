use std::sync::Arc;

use fliplearn_config::Config;
use fliplearn_core::KeyValueStore;
use fliplearn_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(config: &Config) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(config.render_buffer),
            ui_to_app: kanal::bounded_async(config.command_buffer),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Arc<RwLock<Config>>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(config: Arc<RwLock<Config>>) -> Self {
        let channels = ChannelSet::new(&*config.read().await);
        Self {
            channels,
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks<S: KeyValueStore + 'static>(
        &self,
        state: AppState<S>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            state,
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Terminal UI loop
        let ui_config = self.config.read().await.ui.clone();
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            ui_config,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
