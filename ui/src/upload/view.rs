use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use tracing::debug;

use crate::components::routes::cycle_link;
use crate::core::file::PickedFile;
use crate::preview::PreviewTable;
use crate::projects::{self, ProjectOption, ProjectSelector, QuickCreateForm};
use crate::services::use_backend;
use crate::t;

use super::alert::{ResultAlert, CYCLE_LINK_TEXT};
use super::orchestrator::{SubmissionFields, UploadOrchestrator};
use super::surface::UploadSurface;

const SOURCE_SYSTEMS: [&str; 3] = ["auto", "jira", "azure_devops"];

/// File types the upload endpoint parses.
const ACCEPTED_EXTENSIONS: &str = ".csv,.xlsx,.xls";

/// Reactive state behind the upload widgets.
#[derive(Clone, Copy)]
struct SignalSurface {
    drag_active: Signal<bool>,
    selection: Signal<Option<String>>,
    preview: Signal<Option<PreviewTable>>,
    busy: Signal<bool>,
    result: Signal<Option<ResultAlert>>,
}

impl UploadSurface for SignalSurface {
    fn set_drag_active(&self, active: bool) {
        let mut drag_active = self.drag_active;
        drag_active.set(active);
    }

    fn show_selection(&self, label: String) {
        let mut selection = self.selection;
        selection.set(Some(label));
    }

    fn show_preview(&self, table: PreviewTable) {
        let mut preview = self.preview;
        preview.set(Some(table));
    }

    fn set_busy(&self, busy: bool) {
        let mut busy_signal = self.busy;
        busy_signal.set(busy);
    }

    fn show_result(&self, alert: ResultAlert) {
        let mut result = self.result;
        result.set(Some(alert));
    }
}

type Orchestrator = Rc<UploadOrchestrator<SignalSurface>>;

fn pick(orchestrator: Orchestrator, files: Option<Arc<dyn FileEngine>>) {
    let Some(engine) = files else {
        debug!("selection event without files ignored");
        return;
    };
    spawn(async move {
        match PickedFile::first_from(engine).await {
            Some(file) => orchestrator.select(Rc::new(file)).await,
            None => debug!("selection event without files ignored"),
        }
    });
}

#[component]
pub fn UploadPanel(#[props(default)] projects: Vec<ProjectOption>) -> Element {
    let surface = SignalSurface {
        drag_active: use_signal(|| false),
        selection: use_signal(|| None),
        preview: use_signal(|| None),
        busy: use_signal(|| false),
        result: use_signal(|| None),
    };
    let backend = use_backend();
    let orchestrator: Option<Orchestrator> = use_hook({
        let backend = backend.clone();
        move || backend.map(|api| Rc::new(UploadOrchestrator::new(api, surface)))
    });

    let mut selector = use_signal(move || ProjectSelector::new(projects));
    let mut dialog = use_signal(QuickCreateForm::default);
    let mut cycle_name = use_signal(String::new);
    let mut source_system = use_signal(|| SOURCE_SYSTEMS[0].to_string());

    let (Some(orchestrator), Some(api)) = (orchestrator, backend) else {
        return rsx! {
            section { class: "upload upload--unavailable",
                p { class: "card__placeholder", {t!("upload-backend-unavailable")} }
            }
        };
    };

    let on_drag_over = {
        let orchestrator = orchestrator.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            orchestrator.drag_enter();
        }
    };
    let on_drag_leave = {
        let orchestrator = orchestrator.clone();
        move |_evt: DragEvent| orchestrator.drag_leave()
    };
    let on_drop = {
        let orchestrator = orchestrator.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            orchestrator.drag_leave();
            pick(orchestrator.clone(), evt.files());
        }
    };
    let on_pick = {
        let orchestrator = orchestrator.clone();
        move |evt: FormEvent| pick(orchestrator.clone(), evt.files())
    };
    let on_submit = {
        let orchestrator = orchestrator.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let fields = SubmissionFields {
                project_id: selector.read().selected_value(),
                cycle_name: cycle_name(),
                source_system: source_system(),
            };
            if let Ok(pending) = orchestrator.clone().begin_submit(fields) {
                spawn(async move {
                    pending.send().await;
                });
            }
        }
    };
    let on_create = move |_: MouseEvent| {
        let api = api.clone();
        let form = dialog.peek().clone();
        spawn(async move {
            let outcome = projects::create_project(&*api, &form.name, &form.description).await;
            let mut selector_state = selector.write();
            dialog.write().apply(&mut selector_state, &outcome);
        });
    };

    let drop_zone_class = if (surface.drag_active)() {
        "upload__drop-zone upload__drop-zone--active"
    } else {
        "upload__drop-zone"
    };
    let busy = (surface.busy)();
    let selected_project = selector.read().selected_value();
    let project_options = selector.read().options().to_vec();
    let draft = dialog.read().clone();

    rsx! {
        section { class: "upload",
            form { class: "upload__form", onsubmit: on_submit,
                label {
                    class: "{drop_zone_class}",
                    ondragenter: on_drag_over.clone(),
                    ondragover: on_drag_over,
                    ondragleave: on_drag_leave,
                    ondrop: on_drop,
                    span { class: "upload__drop-hint", {t!("upload-drop-hint")} }
                    input {
                        class: "upload__file-input",
                        r#type: "file",
                        accept: ACCEPTED_EXTENSIONS,
                        onchange: on_pick,
                    }
                }
                if let Some(label) = (surface.selection)() {
                    p { class: "upload__selection", "{label}" }
                }

                if let Some(table) = (surface.preview)() {
                    PreviewSection { table }
                }

                div { class: "upload__fields",
                    label { class: "field",
                        span { class: "field__label", {t!("upload-project-label")} }
                        div { class: "field__row",
                            select {
                                class: "field__input",
                                value: "{selected_project}",
                                onchange: move |evt: FormEvent| selector.write().select_value(&evt.value()),
                                for project in project_options {
                                    option { key: "{project.id}", value: "{project.id}", "{project.name}" }
                                }
                            }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: move |_| dialog.write().open = true,
                                {t!("upload-new-project")}
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!("upload-cycle-label")} }
                        input {
                            class: "field__input",
                            r#type: "text",
                            value: "{cycle_name}",
                            oninput: move |evt: FormEvent| cycle_name.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!("upload-source-label")} }
                        select {
                            class: "field__input",
                            value: "{source_system}",
                            onchange: move |evt: FormEvent| source_system.set(evt.value()),
                            for source in SOURCE_SYSTEMS {
                                option { key: "{source}", value: "{source}", "{source}" }
                            }
                        }
                    }
                }

                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy {
                        span { class: "spinner", aria_hidden: "true" }
                        {t!("upload-submit-busy")}
                    } else {
                        {t!("upload-submit")}
                    }
                }
            }

            if let Some(alert) = (surface.result)() {
                ResultBanner { alert }
            }

            if draft.open {
                div { class: "dialog", role: "dialog", aria_modal: "true",
                    div { class: "dialog__panel",
                        h2 { class: "dialog__title", {t!("project-dialog-title")} }
                        label { class: "field",
                            span { class: "field__label", {t!("project-name-label")} }
                            input {
                                class: "field__input",
                                r#type: "text",
                                value: "{draft.name}",
                                oninput: move |evt: FormEvent| dialog.write().name = evt.value(),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!("project-description-label")} }
                            textarea {
                                class: "field__input",
                                value: "{draft.description}",
                                oninput: move |evt: FormEvent| dialog.write().description = evt.value(),
                            }
                        }
                        div { class: "dialog__actions",
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: move |_| dialog.write().open = false,
                                {t!("project-cancel")}
                            }
                            button {
                                class: "button button--accent",
                                r#type: "button",
                                onclick: on_create,
                                {t!("project-create")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PreviewSection(table: PreviewTable) -> Element {
    rsx! {
        div { class: "upload__preview",
            h3 { class: "upload__preview-title", {t!("upload-preview-title")} }
            table { class: "preview-table",
                thead {
                    tr {
                        for (i, header) in table.headers.iter().enumerate() {
                            th { key: "{i}", "{header}" }
                        }
                    }
                }
                tbody {
                    for (r, row) in table.rows.iter().enumerate() {
                        tr { key: "{r}",
                            for (c, cell) in row.iter().enumerate() {
                                td { key: "{c}", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultBanner(alert: ResultAlert) -> Element {
    let class = alert.css_class();
    rsx! {
        div { class: "{class}", role: "status",
            "{alert.message}"
            if let Some(id) = alert.cycle {
                br {}
                span { class: "alert__link", {cycle_link(id, CYCLE_LINK_TEXT)} }
            }
        }
    }
}
