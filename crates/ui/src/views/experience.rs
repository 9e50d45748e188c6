use dioxus::prelude::*;
use folio_core::SectionIndex;

use crate::context::AppContext;
use crate::vm::map_stage;

/// The scene behind the overlay. Only the active section picks its pose.
#[component]
pub fn Experience() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<Signal<SectionIndex>>();
    let stage = map_stage(&ctx.config().scene, active());
    let stage_class = if stage.shadows { "stage stage-shadows" } else { "stage" };

    rsx! {
        div {
            class: "{stage_class}",
            style: stage.style(),
            "data-section": "{stage.section}",
            div { class: "camera", style: "transform: {stage.camera_transform};",
                div { class: "scene", style: "transform: {stage.scene_transform};",
                    div { class: "scene-floor" }
                    div { class: "scene-desk" }
                    div { class: "scene-avatar" }
                }
            }
        }
    }
}
