use dioxus::prelude::*;

use crate::projects::load_projects;
use crate::services::use_backend;
use crate::t;
use crate::upload::UploadPanel;

#[component]
pub fn Upload() -> Element {
    let backend = use_backend();
    let projects = use_resource(move || {
        let backend = backend.clone();
        async move {
            match backend {
                Some(api) => load_projects(&*api).await,
                None => Vec::new(),
            }
        }
    });

    let panel = match projects.cloned() {
        None => rsx! { p { class: "card__placeholder", {t!("upload-projects-loading")} } },
        Some(projects) => rsx! { UploadPanel { projects } },
    };

    rsx! {
        section { class: "page page-upload",
            h1 { {t!("upload-title")} }
            p { {t!("upload-intro")} }
            {panel}
        }
    }
}
