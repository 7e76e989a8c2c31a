//! API Key Modal
//!
//! Create/edit dialog. Without a target record it creates a new key; with
//! one it renames that key. Persistence goes through the controller; the
//! page closes the dialog once the request succeeds.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::domain::api_key::ApiKeyRecord;
use crate::features::api_keys::controller::ApiKeysController;
use crate::i18n::t;
use crate::state::api_key_form::{ApiKeyForm, FormMode};
use crate::state::api_keys_state::MutationOutcome;
use crate::theme::colors::ConsoleColors;

/// Close callback handed over by the page
pub type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Create/edit dialog
pub struct ApiKeyModal {
    entities: AppEntities,
    controller: ApiKeysController,
    form: ApiKeyForm,
    name_input: Entity<InputState>,
    on_close: CloseHandler,
    _subscriptions: Vec<Subscription>,
}

impl ApiKeyModal {
    /// `data` is `None` in create mode
    pub fn new(
        entities: AppEntities,
        data: Option<ApiKeyRecord>,
        on_close: CloseHandler,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = ApiKeyForm::new(data);
        let locale = entities.i18n.read(cx).locale;
        let initial_name = form.initial_name().to_string();

        let name_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(t(locale, "modal-name-label"))
                .default_value(initial_name)
        });

        let subscriptions = vec![
            cx.subscribe(&name_input, |this, _input, event, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.submit(cx);
                }
            }),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
        ];

        Self {
            controller: ApiKeysController::new(entities.clone()),
            entities,
            form,
            name_input,
            on_close,
            _subscriptions: subscriptions,
        }
    }

    pub fn form(&self) -> &ApiKeyForm {
        &self.form
    }

    /// Validate the entered name and send the request
    fn submit(&mut self, cx: &mut Context<Self>) {
        if self.form.submit_state().is_submitting() {
            return;
        }

        let raw_name = self.name_input.read(cx).value().to_string();
        match self.form.build_request(&raw_name) {
            Ok(request) => {
                let request_id = self.controller.submit(request, cx);
                self.form.submit_state_mut().begin(request_id);
            }
            Err(e) => {
                self.form.submit_state_mut().fail(e.to_string());
            }
        }
        cx.notify();
    }

    /// Apply the outcome of this dialog's request. Returns true on success.
    pub fn settle(&mut self, outcome: MutationOutcome, cx: &mut Context<Self>) -> bool {
        let close = self.form.submit_state_mut().settle(outcome);
        cx.notify();
        close
    }

    fn render_field(&self, label: gpui::SharedString, body: impl IntoElement) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(ConsoleColors::text_secondary())
                    .child(label),
            )
            .child(body)
    }
}

impl Render for ApiKeyModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let submitting = self.form.submit_state().is_submitting();
        let error = self.form.submit_state().error().map(str::to_string);
        let token = match self.form.mode() {
            FormMode::Edit => self.form.target().map(|r| r.token.clone()),
            FormMode::Create => None,
        };

        let on_close = self.on_close.clone();
        let on_cancel = self.on_close.clone();

        Modal::new(t(locale, self.form.title_key()))
            .on_close(move |window, cx| on_close(window, cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .when_some(token, |el, token| {
                        el.child(self.render_field(
                            t(locale, "modal-token-label"),
                            div()
                                .px_3()
                                .py_2()
                                .bg(ConsoleColors::input_readonly_bg())
                                .border_1()
                                .border_color(ConsoleColors::input_border())
                                .rounded_md()
                                .text_sm()
                                .font_family("monospace")
                                .text_color(ConsoleColors::text_secondary())
                                .child(token),
                        ))
                    })
                    .child(self.render_field(
                        t(locale, "modal-name-label"),
                        div().min_w(px(360.0)).child(Input::new(&self.name_input)),
                    ))
                    .when_some(error, |el, error| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(ConsoleColors::danger())
                                .child(error),
                        )
                    }),
            )
            .footer_child(
                Button::secondary("api-key-cancel", t(locale, "action-cancel"))
                    .on_click(move |_event: &ClickEvent, window, cx| on_cancel(window, cx)),
            )
            .footer_child(
                Button::primary("api-key-submit", t(locale, self.form.submit_label_key()))
                    .loading(submitting)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.submit(cx);
                    })),
            )
    }
}
