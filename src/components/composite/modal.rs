//! Modal Component
//!
//! A centered dialog over a dimmed backdrop. The parent must be `relative()`
//! so the backdrop covers it.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ConsoleColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add an element to the right-aligned footer row
    pub fn footer_child(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler (close button and backdrop click)
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close: Option<Rc<dyn Fn(&mut Window, &mut App)>> = self.on_close.map(Rc::from);
        let backdrop_close = on_close.clone();

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(ConsoleColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                // Modal container; swallows clicks so they don't reach the backdrop
                div()
                    .id("modal-container")
                    .bg(ConsoleColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(420.0))
                    .max_w(px(600.0))
                    .flex()
                    .flex_col()
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(ConsoleColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(ConsoleColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(ConsoleColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(ConsoleColors::table_row_hover()))
                                        .on_click(move |_event: &ClickEvent, window, cx| {
                                            handler(window, cx);
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    )
                    .when(!self.footer.is_empty(), |el| {
                        el.child(
                            div()
                                .px_6()
                                .py_4()
                                .border_t_1()
                                .border_color(ConsoleColors::border())
                                .flex()
                                .justify_end()
                                .gap_3()
                                .children(self.footer),
                        )
                    }),
            )
    }
}
