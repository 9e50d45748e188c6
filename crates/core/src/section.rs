use std::fmt;
use std::num::NonZeroUsize;

use log::debug;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("section {index} is outside the valid range 0..{pages}")]
    InvalidSection { index: i64, pages: usize },
}

//
// ─── PAGES & INDICES ───────────────────────────────────────────────────────────
//

/// Distance from the next quantization boundary under which a progress value is
/// treated as having reached it. Absorbs `i / n * n` rounding below `i`.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Index of one content page, always below the `PageCount` it was derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionIndex(usize);

impl SectionIndex {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// The index as a raw section request, for feeding back into `jump_to`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_request(self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages the scroll range is divided into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageCount(NonZeroUsize);

impl PageCount {
    /// About, skills, projects, contact.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(3));

    /// Returns `None` for zero pages.
    #[must_use]
    pub fn new(pages: usize) -> Option<Self> {
        NonZeroUsize::new(pages).map(Self)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    #[must_use]
    pub fn last(self) -> SectionIndex {
        SectionIndex(self.get() - 1)
    }

    /// Validate a raw section request.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` when `index` is negative or `>= pages`.
    pub fn section(self, index: i64) -> Result<SectionIndex, SectionError> {
        usize::try_from(index)
            .ok()
            .filter(|idx| *idx < self.get())
            .map(SectionIndex)
            .ok_or(SectionError::InvalidSection {
                index,
                pages: self.get(),
            })
    }

    /// Scroll progress at which `index` begins.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn start_progress(self, index: SectionIndex) -> f64 {
        index.0 as f64 / self.get() as f64
    }

    pub fn indices(self) -> impl Iterator<Item = SectionIndex> {
        (0..self.get()).map(SectionIndex)
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clamp raw scroll progress into `[0, 1]`. NaN maps to the top of the page.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Quantize scroll progress to the section it falls in.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn derive_section_index(progress: f64, pages: PageCount) -> SectionIndex {
    let scaled = clamp_progress(progress) * pages.get() as f64;
    let mut bucket = scaled.floor();
    if bucket + 1.0 - scaled < BOUNDARY_EPSILON {
        bucket += 1.0;
    }
    SectionIndex((bucket as usize).min(pages.last().0))
}

//
// ─── MODEL ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub previous: SectionIndex,
    pub current: SectionIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(SectionChange)>;

/// Single source of truth for the active section.
///
/// Subscribers are invoked after the new index is stored, in registration order,
/// and only when the index actually changes.
pub struct SectionIndexModel {
    pages: PageCount,
    current: SectionIndex,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SectionIndexModel {
    #[must_use]
    pub fn new(pages: PageCount) -> Self {
        Self {
            pages,
            current: SectionIndex::default(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn get(&self) -> SectionIndex {
        self.current
    }

    #[must_use]
    pub fn pages(&self) -> PageCount {
        self.pages
    }

    /// Set the active section and notify subscribers if it changed.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for an out-of-range index; the model is
    /// left untouched.
    pub fn set(&mut self, index: i64) -> Result<Option<SectionChange>, SectionError> {
        let next = self.pages.section(index)?;
        Ok(self.apply(next))
    }

    pub(crate) fn apply(&mut self, next: SectionIndex) -> Option<SectionChange> {
        debug_assert!(next.0 < self.pages.get());
        if next == self.current {
            return None;
        }

        let change = SectionChange {
            previous: self.current,
            current: next,
        };
        self.current = next;
        debug!("section {} -> {}", change.previous, change.current);

        for (_, listener) in &mut self.listeners {
            listener(change);
        }
        Some(change)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(SectionChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for SectionIndexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionIndexModel")
            .field("pages", &self.pages)
            .field("current", &self.current)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
