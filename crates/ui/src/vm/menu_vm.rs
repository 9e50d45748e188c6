use folio_core::{Section, SectionIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItemVm {
    pub request: i64,
    pub label: &'static str,
    pub active: bool,
}

impl MenuItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "menu-item active"
        } else {
            "menu-item"
        }
    }
}

#[must_use]
pub fn map_menu_items(active: SectionIndex) -> Vec<MenuItemVm> {
    Section::ALL
        .iter()
        .map(|section| MenuItemVm {
            request: section.index().to_request(),
            label: section.title(),
            active: section.index() == active,
        })
        .collect()
}

#[must_use]
pub fn menu_class(open: bool) -> &'static str {
    if open { "menu menu-open" } else { "menu" }
}
