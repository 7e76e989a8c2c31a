//! API Key Table
//!
//! Token, name, and row actions. The actions column header shows how much
//! of the capacity is used.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ClickEvent, ClipboardItem, IntoElement, ParentElement, RenderOnce,
    Styled, Window,
};

use crate::components::composite::table::{Column, Table};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::api_key::ApiKeyRecord;
use crate::i18n::{t, Locale};
use crate::theme::colors::ConsoleColors;
use crate::utils::format::truncate;

/// Row action callback
pub type RowHandler = Rc<dyn Fn(&ApiKeyRecord, &mut Window, &mut App) + 'static>;

const TOKEN_DISPLAY_CHARS: usize = 40;

/// Table of API keys with edit and delete actions
#[derive(IntoElement)]
pub struct ApiKeyTable {
    data: Vec<ApiKeyRecord>,
    limit: usize,
    locale: Locale,
    on_edit_click: RowHandler,
    on_delete_click: RowHandler,
}

impl ApiKeyTable {
    pub fn new(
        data: Vec<ApiKeyRecord>,
        limit: usize,
        locale: Locale,
        on_edit_click: RowHandler,
        on_delete_click: RowHandler,
    ) -> Self {
        Self {
            data,
            limit,
            locale,
            on_edit_click,
            on_delete_click,
        }
    }

    fn columns(&self) -> Vec<Column<ApiKeyRecord>> {
        let locale = self.locale;
        let on_edit = self.on_edit_click.clone();
        let on_delete = self.on_delete_click.clone();

        vec![
            Column::new(t(locale, "table-token"), move |record: &ApiKeyRecord, index| {
                let token = record.token.clone();
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .font_family("monospace")
                            .child(truncate(&record.token, TOKEN_DISPLAY_CHARS)),
                    )
                    .child(
                        Button::ghost(("copy-key", index), t(locale, "action-copy"))
                            .size(ButtonSize::Small)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                cx.write_to_clipboard(ClipboardItem::new_string(token.clone()));
                            }),
                    )
                    .into_any_element()
            }),
            Column::new(t(locale, "table-name"), |record: &ApiKeyRecord, _index| {
                div().child(record.name.clone()).into_any_element()
            })
            .fixed_width(220.0),
            Column::new(
                format!("{} / {}", self.data.len(), self.limit),
                move |record: &ApiKeyRecord, index| {
                    let edit_record = record.clone();
                    let delete_record = record.clone();
                    let on_edit = on_edit.clone();
                    let on_delete = on_delete.clone();

                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .child(
                            Button::ghost(("edit-key", index), t(locale, "action-edit"))
                                .size(ButtonSize::Small)
                                .on_click(move |_event: &ClickEvent, window, cx| {
                                    on_edit(&edit_record, window, cx);
                                }),
                        )
                        .child(
                            Button::ghost(("delete-key", index), t(locale, "action-delete"))
                                .size(ButtonSize::Small)
                                .on_click(move |_event: &ClickEvent, window, cx| {
                                    on_delete(&delete_record, window, cx);
                                }),
                        )
                        .into_any_element()
                },
            )
            .fixed_width(160.0),
        ]
    }
}

impl RenderOnce for ApiKeyTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let columns = self.columns();

        div()
            .w_full()
            .text_color(ConsoleColors::text_primary())
            .child(Table::new(columns, self.data))
    }
}
