mod contact_vm;
mod menu_vm;
mod reveal_vm;
mod scroll_vm;
mod skill_vm;
mod stage_vm;

pub use contact_vm::{ContactStatus, submit_contact};
pub use menu_vm::{MenuItemVm, map_menu_items, menu_class};
pub use reveal_vm::{reveal_style, section_style};
pub use scroll_vm::{LINE_HEIGHT_PX, overlay_offset_vh, overlay_style};
pub use skill_vm::{SkillBarVm, map_language_bars, map_skill_bars};
pub use stage_vm::{ScenePose, StageVm, map_stage};
