use folio_core::PageCount;

/// Pixels per wheel "line" when the platform reports line deltas.
pub const LINE_HEIGHT_PX: f64 = 40.0;

/// How far the overlay is shifted up, in viewport heights × 100.
///
/// The last page stays pinned once progress passes its start.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overlay_offset_vh(progress: f64, pages: PageCount) -> f64 {
    let pages = pages.get() as f64;
    (progress.clamp(0.0, 1.0) * pages).min(pages - 1.0) * 100.0
}

#[must_use]
pub fn overlay_style(progress: f64, pages: PageCount) -> String {
    format!(
        "transform: translateY(-{:.2}vh);",
        overlay_offset_vh(progress, pages)
    )
}
