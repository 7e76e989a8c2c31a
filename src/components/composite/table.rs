//! Table Component
//!
//! A simple table: a header row and one row per record. Cells are rendered
//! by per-column closures.

use gpui::{
    div, prelude::*, px, AnyElement, App, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::ConsoleColors;

/// Cell renderer: receives the row and its index
pub type CellRenderer<R> = Box<dyn Fn(&R, usize) -> AnyElement + 'static>;

/// Column width specification
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share the remaining space
    #[default]
    Flex,
}

/// Column definition for the Table
pub struct Column<R> {
    /// Column header label
    pub label: SharedString,
    pub width: ColumnWidth,
    pub render: CellRenderer<R>,
}

impl<R: 'static> Column<R> {
    pub fn new(
        label: impl Into<SharedString>,
        render: impl Fn(&R, usize) -> AnyElement + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::default(),
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R, index: usize) -> AnyElement {
        (self.render)(row, index)
    }
}

fn sized_cell(width: ColumnWidth) -> gpui::Div {
    match width {
        ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
        ColumnWidth::Flex => div().flex_1().min_w_0(),
    }
}

/// Table component
#[derive(IntoElement)]
pub struct Table<R: 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
}

impl<R: 'static> Table<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            row_height: 44.0,
            header_height: 40.0,
        }
    }
}

impl<R: 'static> RenderOnce for Table<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(ConsoleColors::table_header_bg())
            .border_b_1()
            .border_color(ConsoleColors::border())
            .children(self.columns.iter().map(|col| {
                sized_cell(col.width)
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(ConsoleColors::text_secondary())
                    .child(col.label.clone())
            }));

        let rows = self.rows.iter().enumerate().map(|(index, row)| {
            let bg = if index % 2 == 0 {
                ConsoleColors::content_bg()
            } else {
                ConsoleColors::table_row_alt()
            };

            div()
                .id(("table-row", index))
                .h(px(self.row_height))
                .w_full()
                .flex()
                .items_center()
                .bg(bg)
                .hover(|s| s.bg(ConsoleColors::table_row_hover()))
                .border_b_1()
                .border_color(ConsoleColors::border())
                .children(self.columns.iter().map(|col| {
                    sized_cell(col.width)
                        .px_3()
                        .text_sm()
                        .text_color(ConsoleColors::text_primary())
                        .overflow_hidden()
                        .child(col.render_cell(row, index))
                }))
        });

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(ConsoleColors::content_bg())
            .border_1()
            .border_color(ConsoleColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(header)
            .children(rows)
    }
}
