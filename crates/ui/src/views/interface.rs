use dioxus::prelude::*;
use folio_core::{
    CONTACT_FIELDS, ContactDraft, ContactField, FieldKind, PROFILE, Portfolio, Reveal, Section,
    SectionIndex,
};

use crate::vm::{
    ContactStatus, SkillBarVm, map_language_bars, map_skill_bars, overlay_style, reveal_style,
    section_style, submit_contact,
};

/// HTML overlay: one full-height page per section, shifted with the scroll offset.
#[component]
pub fn Interface() -> Element {
    let site = use_context::<Signal<Portfolio>>();
    let active = use_context::<Signal<SectionIndex>>();
    let style = {
        let site = site.read();
        overlay_style(site.progress(), site.pages())
    };
    let visible = move |section: Section| active() == section.index();

    rsx! {
        div { class: "interface", style: "{style}",
            AboutSection { visible: visible(Section::About) }
            SkillsSection { visible: visible(Section::Skills) }
            ProjectsSection { visible: visible(Section::Projects) }
            ContactSection { visible: visible(Section::Contact) }
        }
    }
}

#[component]
fn Page(visible: bool, children: Element) -> Element {
    rsx! {
        section { class: "page", style: section_style(visible), {children} }
    }
}

#[component]
fn AboutSection(visible: bool) -> Element {
    let [first_line, second_line] = PROFILE.intro;
    rsx! {
        Page { visible: visible,
            h1 { class: "headline",
                "Hi, I'm"
                br {}
                span { class: "headline-name", "{PROFILE.name}" }
            }
            p { class: "intro", style: reveal_style(Reveal::intro(), visible),
                "{first_line}"
                br {}
                "{second_line}"
            }
            button {
                class: "btn btn-primary",
                style: reveal_style(Reveal::call_to_action(), visible),
                "{PROFILE.call_to_action}"
            }
        }
    }
}

#[component]
fn SkillsSection(visible: bool) -> Element {
    let skills = map_skill_bars(visible);
    let languages = map_language_bars(visible);
    rsx! {
        Page { visible: visible,
            h2 { class: "section-title", "Skills" }
            div { class: "bars",
                for bar in skills {
                    SkillBar { key: "{bar.title}", bar: bar }
                }
            }
            h2 { class: "section-title", "Languages" }
            div { class: "bars",
                for bar in languages {
                    SkillBar { key: "{bar.title}", bar: bar }
                }
            }
        }
    }
}

#[component]
fn SkillBar(bar: SkillBarVm) -> Element {
    rsx! {
        div { class: "skill",
            h3 { class: "skill-title", style: "{bar.title_style}", "{bar.title}" }
            div { class: "skill-track",
                div {
                    class: "skill-fill",
                    style: "width: {bar.width}; {bar.bar_style}",
                }
            }
        }
    }
}

#[component]
fn ProjectsSection(visible: bool) -> Element {
    rsx! {
        Page { visible: visible,
            h1 { class: "section-title", "Projects" }
        }
    }
}

#[component]
fn ContactSection(visible: bool) -> Element {
    rsx! {
        Page { visible: visible,
            h2 { class: "section-title", "Contact me" }
            ContactForm {}
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut draft = use_signal(ContactDraft::new);
    let mut status = use_signal(ContactStatus::default);

    let current = status.read().clone();
    rsx! {
        div { class: "contact-card",
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let next = submit_contact(&draft.read());
                    if matches!(next, ContactStatus::Sent { .. }) {
                        draft.set(ContactDraft::new());
                    }
                    status.set(next);
                },
                for field in CONTACT_FIELDS {
                    FormField {
                        key: "{field.name}",
                        field: field,
                        value: draft.read().field(field.name).to_string(),
                        oninput: move |value: String| draft.write().set_field(field.name, value),
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "Submit" }
                if let Some(message) = current.message() {
                    p { class: current.class(), "{message}" }
                }
            }
        }
    }
}

#[component]
fn FormField(field: ContactField, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{field.name}", "{field.label}" }
        match field.kind {
            FieldKind::TextArea => rsx! {
                textarea {
                    class: "field-input field-textarea",
                    id: "{field.name}",
                    name: "{field.name}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            },
            FieldKind::Text => rsx! {
                input {
                    class: "field-input",
                    r#type: "text",
                    id: "{field.name}",
                    name: "{field.name}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            },
        }
    }
}
