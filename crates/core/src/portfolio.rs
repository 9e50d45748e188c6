use std::fmt;

use crate::config::SiteConfig;
use crate::content::{PAGE_COUNT, Section};
use crate::menu::{MenuController, MenuState};
use crate::scroll::ScrollManager;
use crate::section::{
    PageCount, SectionChange, SectionError, SectionIndex, SectionIndexModel, SubscriptionId,
};

/// The whole interactive state of the site, advanced one frame at a time.
///
/// Owns the section model, the scroll manager and the menu, and registers the menu's
/// auto-close handler before any other subscriber.
pub struct Portfolio {
    config: SiteConfig,
    sections: SectionIndexModel,
    scroll: ScrollManager,
    menu: MenuController,
}

impl Portfolio {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self::with_pages(config, PAGE_COUNT)
    }

    #[must_use]
    pub fn with_pages(config: SiteConfig, pages: PageCount) -> Self {
        let mut sections = SectionIndexModel::new(pages);
        let scroll = ScrollManager::new(pages, config.damping);
        let menu = MenuController::new();
        menu.attach(&mut sections);

        Self {
            config,
            sections,
            scroll,
            menu,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn pages(&self) -> PageCount {
        self.sections.pages()
    }

    #[must_use]
    pub fn section(&self) -> SectionIndex {
        self.sections.get()
    }

    /// The content section for the active index, when the page count matches the copy.
    #[must_use]
    pub fn active_section(&self) -> Option<Section> {
        Section::from_index(self.section())
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.scroll.progress()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollManager {
        &self.scroll
    }

    /// Advance the scroll animation by `dt` seconds.
    pub fn frame(&mut self, dt: f64) -> Option<SectionChange> {
        self.scroll.tick(dt, &mut self.sections)
    }

    /// Wheel input in pixels; positive scrolls down.
    #[allow(clippy::cast_precision_loss)]
    pub fn wheel(&mut self, delta_px: f64) {
        let delta = delta_px / (self.config.wheel_step_px * self.pages().get() as f64);
        self.scroll.scroll_by(delta);
    }

    /// Feed progress reported by an external scroll container.
    pub fn observe(&mut self, progress: f64) -> Option<SectionChange> {
        self.scroll.observe(progress, &mut self.sections)
    }

    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index.
    pub fn jump_to(&mut self, index: i64) -> Result<SectionIndex, SectionError> {
        self.scroll.jump_to(index)
    }

    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index.
    pub fn set_section(&mut self, index: i64) -> Result<Option<SectionChange>, SectionError> {
        self.sections.set(index)
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Menu click: jump to `index` and close the menu.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index.
    pub fn select_section(&mut self, index: i64) -> Result<SectionIndex, SectionError> {
        self.menu.select_section(index, &mut self.scroll)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(SectionChange) + 'static,
    {
        self.sections.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.sections.unsubscribe(id)
    }
}

impl fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portfolio")
            .field("sections", &self.sections)
            .field("scroll", &self.scroll)
            .field("menu", &self.menu.state())
            .finish_non_exhaustive()
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
