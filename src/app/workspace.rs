//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, the API keys page and the log panel.
//! It also runs the event pump that bridges service events to UI updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::api_keys::page::ApiKeyPage;
use crate::theme::colors::ConsoleColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    page: Entity<ApiKeyPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Start the pump first so the page's initial fetch is observed
        Self::start_event_pump(event_rx, entities.clone(), cx);

        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let page = cx.new(|cx| ApiKeyPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self {
            header,
            page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                if cx
                    .update(|cx: &mut App| dispatch_event(event, &entities, cx))
                    .is_err()
                {
                    break;
                }
            }
            tracing::debug!("Event pump stopped");
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ConsoleColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(ConsoleColors::content_bg())
                    .child(self.page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
pub(crate) fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::ConfigLoaded { config } => {
            entities.config.update(cx, |state, cx| {
                state.update_config(config);
                cx.notify();
            });
        }
        AppEvent::ApiKeysLoading => {
            entities.api_keys.update(cx, |state, cx| {
                state.start_loading();
                cx.notify();
            });
        }
        AppEvent::ApiKeysLoaded { keys } => {
            entities.api_keys.update(cx, |state, cx| {
                state.set_records(keys);
                cx.notify();
            });
        }
        AppEvent::ApiKeysFetchFailed { message } => {
            entities.api_keys.update(cx, |state, cx| {
                state.fail_loading(message);
                cx.notify();
            });
        }
        AppEvent::ApiKeyMutated { request_id, request } => {
            tracing::debug!("API key {} settled ({})", request.verb(), request_id);
            entities.api_keys.update(cx, |state, cx| {
                state.complete_mutation(request_id);
                cx.notify();
            });
        }
        AppEvent::ApiKeyMutationFailed {
            request_id,
            message,
        } => {
            entities.api_keys.update(cx, |state, cx| {
                state.fail_mutation(request_id, message);
                cx.notify();
            });
        }
    }
}
