use log::{debug, trace};

use crate::section::{
    PageCount, SectionChange, SectionError, SectionIndex, SectionIndexModel, clamp_progress,
    derive_section_index,
};
use crate::tween;

/// Scroll container state: the rendered offset and the offset it is damping toward.
///
/// Both values are scroll progress in `[0, 1]`. Every write to the target replaces the
/// previous one, so the most recent request always wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollControls {
    offset: f64,
    target: f64,
    smooth_time: f64,
}

impl ScrollControls {
    #[must_use]
    pub fn new(smooth_time: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            smooth_time,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn smooth_time(&self) -> f64 {
        self.smooth_time
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    pub fn scroll_to(&mut self, target: f64) {
        self.target = clamp_progress(target);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target + delta);
    }

    /// Place the container at `progress` with nothing left to animate.
    pub fn settle_at(&mut self, progress: f64) {
        let progress = clamp_progress(progress);
        self.offset = progress;
        self.target = progress;
    }

    /// Advance one frame and return the new offset.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.offset = tween::step(self.offset, self.target, self.smooth_time, dt);
        self.offset
    }
}

/// Turns continuous scroll progress into section changes and drives animated jumps.
#[derive(Clone, Debug)]
pub struct ScrollManager {
    pages: PageCount,
    controls: ScrollControls,
    pending_jump: Option<SectionIndex>,
}

impl ScrollManager {
    #[must_use]
    pub fn new(pages: PageCount, smooth_time: f64) -> Self {
        Self {
            pages,
            controls: ScrollControls::new(smooth_time),
            pending_jump: None,
        }
    }

    #[must_use]
    pub fn pages(&self) -> PageCount {
        self.pages
    }

    #[must_use]
    pub fn controls(&self) -> &ScrollControls {
        &self.controls
    }

    /// Current rendered scroll progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.controls.offset()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controls.is_animating()
    }

    /// Target of the jump still being animated, if any.
    #[must_use]
    pub fn pending_jump(&self) -> Option<SectionIndex> {
        self.pending_jump
    }

    /// Record progress reported by the scroll container and push the section it falls
    /// in into `model`. Cancels any running animation.
    ///
    /// Quantization uses `model`'s page count, so the stored index always stays in its
    /// range.
    pub fn observe(
        &mut self,
        progress: f64,
        model: &mut SectionIndexModel,
    ) -> Option<SectionChange> {
        self.controls.settle_at(progress);
        self.pending_jump = None;
        Self::publish(self.controls.offset(), model)
    }

    fn publish(progress: f64, model: &mut SectionIndexModel) -> Option<SectionChange> {
        model.apply(derive_section_index(progress, model.pages()))
    }

    /// Start animating toward the top of section `index`.
    ///
    /// Returns immediately; the section index follows as later frames cross each
    /// quantization boundary.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index. Scroll state is
    /// left untouched.
    pub fn jump_to(&mut self, index: i64) -> Result<SectionIndex, SectionError> {
        let section = self.pages.section(index)?;
        let target = self.pages.start_progress(section);
        debug!("jump to section {section} (progress {target:.3})");
        self.controls.scroll_to(target);
        self.pending_jump = Some(section);
        Ok(section)
    }

    /// User scroll input, expressed as a progress delta. Overrides any pending jump.
    pub fn scroll_by(&mut self, delta: f64) {
        self.pending_jump = None;
        self.controls.scroll_by(delta);
    }

    /// Advance the scroll animation one frame and observe the resulting progress.
    pub fn tick(&mut self, dt: f64, model: &mut SectionIndexModel) -> Option<SectionChange> {
        let progress = self.controls.tick(dt);
        let change = Self::publish(progress, model);
        if !self.controls.is_animating() {
            if let Some(section) = self.pending_jump.take() {
                trace!("jump to section {section} settled");
            }
        }
        change
    }
}
