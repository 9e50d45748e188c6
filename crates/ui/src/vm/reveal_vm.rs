use folio_core::Reveal;

/// Inline style for an element that animates in when `visible` turns true.
#[must_use]
pub fn reveal_style(reveal: Reveal, visible: bool) -> String {
    if visible {
        shown(reveal)
    } else {
        hidden(reveal, None)
    }
}

/// Sections fade in with their enter variant and fade out with the faster exit one.
#[must_use]
pub fn section_style(visible: bool) -> String {
    if visible {
        shown(Reveal::section_enter())
    } else {
        let exit = Reveal::section_exit();
        hidden(exit, Some(exit.duration))
    }
}

fn shown(reveal: Reveal) -> String {
    format!(
        "opacity: 1; transform: translateY(0px) scaleX(1); transform-origin: left; \
         transition: opacity {d:.1}s ease-out {delay:.1}s, transform {d:.1}s ease-out {delay:.1}s;",
        d = reveal.duration,
        delay = reveal.delay,
    )
}

fn hidden(reveal: Reveal, exit_duration: Option<f32>) -> String {
    let transition = match exit_duration {
        Some(d) => format!("opacity {d:.1}s ease-in, transform {d:.1}s ease-in"),
        None => "none".to_string(),
    };
    format!(
        "opacity: {opacity}; transform: translateY({y}px) scaleX({sx}); transform-origin: left; \
         transition: {transition};",
        opacity = reveal.from_opacity,
        y = reveal.from_y,
        sx = reveal.from_scale_x,
    )
}
