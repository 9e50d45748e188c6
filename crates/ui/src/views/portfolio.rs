use std::time::Duration;

use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use folio_core::{Portfolio, SectionIndex};
use tokio::time::{Instant, MissedTickBehavior};

use crate::context::AppContext;
use crate::views::{Experience, Interface, Menu};
use crate::vm::LINE_HEIGHT_PX;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Longest step fed to the tween after a stall (window hidden, debugger, ...).
const MAX_FRAME_SECS: f64 = 0.1;

#[component]
pub fn PortfolioView() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.config().clone();
    let wheel_step = config.wheel_step_px;
    let active = use_signal(SectionIndex::default);
    let mut site = use_signal(move || {
        let mut site = Portfolio::new(config);
        site.subscribe(move |change| {
            let mut active = active;
            active.set(change.current);
        });
        site
    });
    use_context_provider(|| site);
    use_context_provider(|| active);

    use_future(move || async move {
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = Instant::now();
        loop {
            ticker.tick().await;
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64().min(MAX_FRAME_SECS);
            last = now;
            if site.peek().is_animating() {
                site.write().frame(dt);
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PortfolioTestHandles>() {
                handles.register(site);
            }
        }
    }

    rsx! {
        div {
            class: "portfolio",
            onwheel: move |evt: WheelEvent| {
                let delta_px = match evt.delta() {
                    WheelDelta::Pixels(v) => v.y,
                    WheelDelta::Lines(v) => v.y * LINE_HEIGHT_PX,
                    WheelDelta::Pages(v) => v.y * wheel_step,
                };
                site.write().wheel(delta_px);
            },
            Experience {}
            Interface {}
        }
        Menu {}
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PortfolioTestHandles {
    site: std::rc::Rc<std::cell::RefCell<Option<Signal<Portfolio>>>>,
}

#[cfg(test)]
impl PortfolioTestHandles {
    pub(crate) fn register(&self, site: Signal<Portfolio>) {
        *self.site.borrow_mut() = Some(site);
    }

    pub(crate) fn site(&self) -> Signal<Portfolio> {
        (*self.site.borrow()).expect("portfolio registered")
    }
}
