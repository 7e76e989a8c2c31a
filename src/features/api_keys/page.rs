//! API Keys Page
//!
//! Lists the account's API keys and drives the create/edit and delete
//! dialogs. The collection comes from the `ApiKeysState` request cache,
//! which is filled by a background read started when the page is created.

use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyElement, App, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, Styled, Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::page_header::AccountPageHeader;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::API_KEYS_LIMIT;
use crate::domain::api_key::ApiKeyRecord;
use crate::features::api_keys::api_key_modal::{ApiKeyModal, CloseHandler};
use crate::features::api_keys::controller::ApiKeysController;
use crate::features::api_keys::delete_modal::DeleteApiKeyModal;
use crate::features::api_keys::table::{ApiKeyTable, RowHandler};
use crate::i18n::{t, t_args, Locale};
use crate::state::api_key_page_state::{ApiKeyPageState, PageLayout};
use crate::state::api_keys_state::QueryStatus;
use crate::theme::colors::ConsoleColors;
use crate::utils::format::format_local_datetime;

/// API keys page component
pub struct ApiKeyPage {
    entities: AppEntities,
    controller: ApiKeysController,
    state: ApiKeyPageState,
    api_key_modal: Option<Entity<ApiKeyModal>>,
    delete_modal: Option<Entity<DeleteApiKeyModal>>,
    _subscriptions: Vec<Subscription>,
}

impl ApiKeyPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ApiKeysController::new(entities.clone());

        let subscriptions = vec![
            // Observe the request cache: new records and settled writes
            cx.observe(&entities.api_keys, |this, _, cx| {
                this.on_api_keys_changed(cx);
                cx.notify();
            }),
            // Observe i18n changes
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
            cx.observe(&entities.config, |_this, _, cx| cx.notify()),
        ];

        // Background read; rendering does not wait for it
        controller.fetch_api_keys(cx);

        Self {
            entities,
            controller,
            state: ApiKeyPageState::default(),
            api_key_modal: None,
            delete_modal: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> &ApiKeyPageState {
        &self.state
    }

    /// Open the dialog in create mode, unless the account is at capacity
    fn open_add(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let count = self.entities.api_keys.read(cx).len();
        if !self.state.open_add(count) {
            tracing::debug!("Add API key ignored: {} of {} keys in use", count, API_KEYS_LIMIT);
            return;
        }
        self.api_key_modal = Some(self.build_api_key_modal(None, window, cx));
        cx.notify();
    }

    fn on_edit_click(&mut self, record: ApiKeyRecord, window: &mut Window, cx: &mut Context<Self>) {
        self.state.edit_click(record.clone());
        self.api_key_modal = Some(self.build_api_key_modal(Some(record), window, cx));
        cx.notify();
    }

    fn close_api_key_modal(&mut self, cx: &mut Context<Self>) {
        self.state.close_edit();
        self.api_key_modal = None;
        cx.notify();
    }

    fn on_delete_click(&mut self, record: &ApiKeyRecord, cx: &mut Context<Self>) {
        self.state.delete_click(record);
        let name = record.name.clone();
        let entities = self.entities.clone();
        let on_close = Self::close_handler(cx, Self::close_delete_modal);
        self.delete_modal = Some(cx.new(|cx| DeleteApiKeyModal::new(entities, name, on_close, cx)));
        cx.notify();
    }

    fn close_delete_modal(&mut self, cx: &mut Context<Self>) {
        self.state.close_delete();
        self.delete_modal = None;
        cx.notify();
    }

    fn build_api_key_modal(
        &self,
        data: Option<ApiKeyRecord>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<ApiKeyModal> {
        let entities = self.entities.clone();
        let on_close = Self::close_handler(cx, Self::close_api_key_modal);
        cx.new(|cx| ApiKeyModal::new(entities, data, on_close, window, cx))
    }

    /// Wrap a page method as a dialog close callback
    fn close_handler(cx: &Context<Self>, close: fn(&mut Self, &mut Context<Self>)) -> CloseHandler {
        let page = cx.weak_entity();
        Rc::new(move |_window: &mut Window, cx: &mut App| {
            if page.update(cx, |this, cx| close(this, cx)).is_err() {
                tracing::debug!("API keys page released before its dialog closed");
            }
        })
    }

    /// Route a settled write to the dialog that issued it
    fn on_api_keys_changed(&mut self, cx: &mut Context<Self>) {
        let mutation = self.entities.api_keys.read(cx).mutation().clone();

        if let Some(modal) = self.api_key_modal.clone() {
            let outcome = modal
                .read(cx)
                .form()
                .submit_state()
                .pending()
                .and_then(|id| mutation.outcome_for(id));
            if let Some(outcome) = outcome {
                if modal.update(cx, |modal, cx| modal.settle(outcome, cx)) {
                    self.close_api_key_modal(cx);
                }
            }
        }

        if let Some(modal) = self.delete_modal.clone() {
            let outcome = modal
                .read(cx)
                .submit_state()
                .pending()
                .and_then(|id| mutation.outcome_for(id));
            if let Some(outcome) = outcome {
                if modal.update(cx, |modal, cx| modal.settle(outcome, cx)) {
                    self.close_delete_modal(cx);
                }
            }
        }
    }

    fn render_description(&self, locale: Locale, docs_url: Option<String>) -> impl IntoElement {
        let controller = self.controller.clone();

        div()
            .mb_12()
            .flex()
            .flex_wrap()
            .text_color(ConsoleColors::text_primary())
            .child(t(locale, "page-description"))
            .child(
                div()
                    .id("docs-link")
                    .text_color(ConsoleColors::link())
                    .when_some(docs_url, |el, url| {
                        el.cursor_pointer()
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                controller.open_docs(&url, cx);
                            })
                    })
                    .child(t(locale, "page-docs-link")),
            )
            .child(".")
    }

    fn render_status(
        &self,
        locale: Locale,
        query: &QueryStatus,
        has_records: bool,
        fetched_at: Option<String>,
        cx: &mut Context<Self>,
    ) -> Option<AnyElement> {
        match query {
            QueryStatus::Loading if !has_records => Some(
                div()
                    .mb_4()
                    .text_sm()
                    .text_color(ConsoleColors::text_muted())
                    .child(t(locale, "page-loading"))
                    .into_any_element(),
            ),
            QueryStatus::Failed { message } => Some(
                div()
                    .mb_4()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_sm()
                            .text_color(ConsoleColors::danger())
                            .child(t_args(locale, "page-fetch-failed", &[("error", message.as_str())])),
                    )
                    .child(
                        Button::ghost("retry-fetch", t(locale, "action-retry"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.fetch_api_keys(cx);
                            })),
                    )
                    .into_any_element(),
            ),
            _ => fetched_at.map(|time| {
                div()
                    .mb_4()
                    .text_xs()
                    .text_color(ConsoleColors::text_muted())
                    .child(t_args(locale, "page-last-updated", &[("time", time.as_str())]))
                    .into_any_element()
            }),
        }
    }
}

impl Render for ApiKeyPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let docs_url = self.entities.config.read(cx).config.api.docs_url.clone();

        let api_keys = self.entities.api_keys.read(cx);
        let records = api_keys.records().to_vec();
        let query = api_keys.query().clone();
        let fetched_at = api_keys.fetched_at().map(format_local_datetime);

        let layout = PageLayout::for_count(records.len());
        let limit = API_KEYS_LIMIT.to_string();
        let status = self.render_status(locale, &query, !records.is_empty(), fetched_at, cx);

        let on_edit_click: RowHandler = Rc::new(cx.listener(
            |this, record: &ApiKeyRecord, window, cx| {
                this.on_edit_click(record.clone(), window, cx);
            },
        ));
        let on_delete_click: RowHandler = Rc::new(cx.listener(
            |this, record: &ApiKeyRecord, _window, cx| {
                this.on_delete_click(record, cx);
            },
        ));

        let api_key_modal = self
            .api_key_modal
            .clone()
            .filter(|_| self.state.edit_modal().is_open());
        let delete_modal = self
            .delete_modal
            .clone()
            .filter(|_| self.state.delete_modal().is_open());

        div()
            .relative()
            .size_full()
            .child(
                div()
                    .id("api-keys-content")
                    .size_full()
                    .overflow_y_scroll()
                    .p_8()
                    .flex()
                    .flex_col()
                    .child(AccountPageHeader::new(t(locale, "page-title")))
                    .child(self.render_description(locale, docs_url))
                    .children(status)
                    .when(layout.show_table, |el| {
                        el.child(ApiKeyTable::new(
                            records,
                            API_KEYS_LIMIT,
                            locale,
                            on_edit_click,
                            on_delete_click,
                        ))
                    })
                    .child(
                        div()
                            .mt_8()
                            .flex()
                            .items_center()
                            .gap_5()
                            .child(
                                Button::primary("add-api-key", t(locale, "action-add-key"))
                                    .size(ButtonSize::Large)
                                    .disabled(!layout.add_enabled)
                                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                                        this.open_add(window, cx);
                                    })),
                            )
                            .when(layout.show_limit_message, |el| {
                                el.child(
                                    div()
                                        .text_sm()
                                        .text_color(ConsoleColors::text_secondary())
                                        .child(t_args(locale, "limit-reached", &[("limit", limit.as_str())])),
                                )
                            }),
                    ),
            )
            .when_some(api_key_modal, |el, modal| el.child(modal))
            .when_some(delete_modal, |el, modal| el.child(modal))
    }
}
