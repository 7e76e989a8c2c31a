//! Header Component
//!
//! The application title bar with the language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::CONFIG_FILE;
use crate::i18n::{t, Locale};
use crate::services::service_hub::ServiceHub;
use crate::theme::colors::ConsoleColors;
use crate::utils::config_store::save_config;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

/// Remember the chosen language in the config file and the service thread
fn persist_locale(locale: Locale, cx: &mut gpui::App) {
    let Some(hub) = cx.try_global::<ServiceHub>() else {
        return;
    };

    let mut config = hub.config();
    config.ui.locale = Some(locale);

    if let Err(e) = save_config(CONFIG_FILE, &config) {
        tracing::warn!("Failed to save {}: {:#}", CONFIG_FILE, e);
    }
    hub.update_config(config);
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(ConsoleColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            // Leave room for the macOS traffic lights
            .pl(px(80.0))
            .pr_4()
            .child(
                div()
                    .text_color(ConsoleColors::text_header())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(ConsoleColors::text_header())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let locale = entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            tracing::info!("Locale switched to {:?}", i18n.locale);
                            cx.notify();
                            i18n.locale
                        });
                        persist_locale(locale, cx);
                    })
                    .child(lang_label),
            )
    }
}
