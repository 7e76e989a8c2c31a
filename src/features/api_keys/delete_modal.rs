//! Delete API Key Modal
//!
//! Confirmation dialog that deletes a key by name.

use gpui::{
    div, prelude::*, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Subscription,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::domain::api_key::ApiKeyRequest;
use crate::features::api_keys::api_key_modal::CloseHandler;
use crate::features::api_keys::controller::ApiKeysController;
use crate::i18n::{t, t_args};
use crate::state::api_key_form::SubmitState;
use crate::state::api_keys_state::MutationOutcome;
use crate::theme::colors::ConsoleColors;

/// Delete confirmation dialog
pub struct DeleteApiKeyModal {
    entities: AppEntities,
    controller: ApiKeysController,
    name: String,
    submit: SubmitState,
    on_close: CloseHandler,
    _subscriptions: Vec<Subscription>,
}

impl DeleteApiKeyModal {
    pub fn new(
        entities: AppEntities,
        name: String,
        on_close: CloseHandler,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscriptions = vec![cx.observe(&entities.i18n, |_this, _, cx| cx.notify())];

        Self {
            controller: ApiKeysController::new(entities.clone()),
            entities,
            name,
            submit: SubmitState::default(),
            on_close,
            _subscriptions: subscriptions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    fn confirm(&mut self, cx: &mut Context<Self>) {
        if self.submit.is_submitting() {
            return;
        }

        let request = ApiKeyRequest::Delete {
            name: self.name.clone(),
        };
        let request_id = self.controller.submit(request, cx);
        self.submit.begin(request_id);
        cx.notify();
    }

    /// Apply the outcome of this dialog's request. Returns true on success.
    pub fn settle(&mut self, outcome: MutationOutcome, cx: &mut Context<Self>) -> bool {
        let close = self.submit.settle(outcome);
        cx.notify();
        close
    }
}

impl Render for DeleteApiKeyModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let on_close = self.on_close.clone();
        let on_cancel = self.on_close.clone();
        let error = self.submit.error().map(str::to_string);

        Modal::new(t(locale, "modal-delete-title"))
            .on_close(move |window, cx| on_close(window, cx))
            .child(
                div()
                    .text_sm()
                    .text_color(ConsoleColors::text_primary())
                    .child(t_args(locale, "modal-delete-confirm", &[("name", self.name.as_str())])),
            )
            .child(div().when_some(error, |el, error| {
                el.text_sm().text_color(ConsoleColors::danger()).child(error)
            }))
            .footer_child(
                Button::secondary("delete-cancel", t(locale, "action-cancel"))
                    .on_click(move |_event: &ClickEvent, window, cx| on_cancel(window, cx)),
            )
            .footer_child(
                Button::danger("delete-confirm", t(locale, "action-delete"))
                    .loading(self.submit.is_submitting())
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.confirm(cx);
                    })),
            )
    }
}
