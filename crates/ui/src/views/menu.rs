use dioxus::prelude::*;
use folio_core::{Portfolio, SectionIndex};
use log::warn;

use crate::vm::{map_menu_items, menu_class};

#[component]
pub fn Menu() -> Element {
    let mut site = use_context::<Signal<Portfolio>>();
    let active = use_context::<Signal<SectionIndex>>();
    let open = site.read().menu_open();
    let items = map_menu_items(active());
    let toggle_label = if open { "Close menu" } else { "Open menu" };

    rsx! {
        button {
            class: "menu-toggle",
            "aria-label": "{toggle_label}",
            "aria-expanded": "{open}",
            onclick: move |_| site.write().toggle_menu(),
            span { class: "menu-toggle-bar" }
            span { class: "menu-toggle-bar" }
            span { class: "menu-toggle-bar" }
        }
        nav { class: menu_class(open),
            for item in items {
                button {
                    key: "{item.request}",
                    class: item.class(),
                    onclick: move |_| {
                        if let Err(err) = site.write().select_section(item.request) {
                            warn!("menu selection rejected: {err}");
                        }
                    },
                    "{item.label}"
                }
            }
        }
    }
}
