use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::scroll::ScrollManager;
use crate::section::{SectionError, SectionIndex, SectionIndexModel, SubscriptionId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Navigation overlay state.
///
/// The open flag is shared with the auto-close subscription registered by
/// [`MenuController::attach`], so a section change closes the menu even while the
/// controller itself is not being called.
#[derive(Clone, Debug, Default)]
pub struct MenuController {
    state: Rc<Cell<MenuState>>,
}

impl MenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the auto-close handler on `model`.
    pub fn attach(&self, model: &mut SectionIndexModel) -> SubscriptionId {
        let menu = self.clone();
        model.subscribe(move |change| menu.on_section_index_changed(change.current))
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state() == MenuState::Open
    }

    pub fn toggle(&self) {
        let next = match self.state() {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.state.set(next);
    }

    pub fn close(&self) {
        self.state.set(MenuState::Closed);
    }

    /// Jump to `index` and close without waiting for the scroll animation.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index; the menu keeps
    /// its current state.
    pub fn select_section(
        &self,
        index: i64,
        scroll: &mut ScrollManager,
    ) -> Result<SectionIndex, SectionError> {
        let section = scroll.jump_to(index)?;
        self.close();
        Ok(section)
    }

    pub fn on_section_index_changed(&self, current: SectionIndex) {
        if self.is_open() {
            debug!("section {current} reached, closing menu");
        }
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::PageCount;

    #[test]
    fn starts_closed_and_toggles() {
        let menu = MenuController::new();
        assert_eq!(menu.state(), MenuState::Closed);
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_section_closes_immediately() {
        let menu = MenuController::new();
        let mut scroll = ScrollManager::new(PageCount::DEFAULT, 0.1);
        menu.toggle();

        let section = menu.select_section(2, &mut scroll).unwrap();

        assert_eq!(section.value(), 2);
        assert!(!menu.is_open());
        assert!(scroll.is_animating());
    }

    #[test]
    fn invalid_selection_keeps_menu_open() {
        let menu = MenuController::new();
        let mut scroll = ScrollManager::new(PageCount::DEFAULT, 0.1);
        menu.toggle();

        assert!(menu.select_section(9, &mut scroll).is_err());
        assert!(menu.is_open());
        assert!(!scroll.is_animating());
    }

    #[test]
    fn attached_menu_closes_on_section_change() {
        let menu = MenuController::new();
        let mut model = SectionIndexModel::new(PageCount::DEFAULT);
        menu.attach(&mut model);

        menu.toggle();
        model.set(1).unwrap();
        assert!(!menu.is_open());

        // already closed: still closed
        model.set(2).unwrap();
        assert!(!menu.is_open());
    }
}
