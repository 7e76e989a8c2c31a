//! Page Header Component

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::ConsoleColors;

/// Large heading at the top of an account page
#[derive(IntoElement)]
pub struct AccountPageHeader {
    text: SharedString,
}

impl AccountPageHeader {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for AccountPageHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .mb_4()
            .text_size(px(28.0))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(ConsoleColors::text_primary())
            .child(self.text)
    }
}
