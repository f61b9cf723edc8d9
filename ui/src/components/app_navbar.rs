use crate::i18n;
use crate::t;
use dioxus::prelude::*;

use super::routes::{self, registered};

/// Localized application header.
///
/// Links come from the launcher's [`RouteLinks`](super::routes::RouteLinks)
/// registration; without one, the `children` passed in are rendered instead.
/// The language selector updates the global language signal when the
/// launcher provides one, which re-keys the routed subtree.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let internal_nav = registered().map(|_| {
        rsx! {
            nav { class: "navbar__links",
                {routes::home_link(&t!("nav-home"))}
                {routes::upload_link(&t!("nav-upload"))}
            }
        }
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Bugdash" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
