use api::ProjectId;
use dioxus::prelude::*;

use crate::components::routes::{project_link, upload_link};
use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render when the launcher's language signal changes.
    let _lang = try_use_context::<Signal<String>>().map(|s| s());
    let mut project_input = use_signal(String::new);
    let project: Option<ProjectId> = project_input.read().trim().parse().ok();

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            div { class: "page-home__actions",
                span { class: "button button--primary", {upload_link(&t!("home-upload-cta"))} }
            }

            div { class: "page-home__trends",
                label { class: "field",
                    span { class: "field__label", {t!("home-project-label")} }
                    input {
                        class: "field__input",
                        r#type: "number",
                        min: "1",
                        value: "{project_input}",
                        oninput: move |evt: FormEvent| project_input.set(evt.value()),
                    }
                }
                if let Some(id) = project {
                    span { class: "button button--ghost", {project_link(id, &t!("home-trends-cta"))} }
                }
            }
        }
    }
}
