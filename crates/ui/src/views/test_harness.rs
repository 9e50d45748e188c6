use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use folio_core::{Portfolio, SiteConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::PortfolioView;
use crate::views::portfolio::PortfolioTestHandles;

#[derive(Clone)]
struct TestApp {
    config: SiteConfig,
}

impl UiApp for TestApp {
    fn config(&self) -> SiteConfig {
        self.config.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: PortfolioTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { PortfolioView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: PortfolioTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Mutate the live portfolio inside the dom runtime, then flush renders.
    pub fn update(&mut self, f: impl FnOnce(&mut Portfolio)) {
        let mut site = self.handles.site();
        self.dom.in_runtime(|| f(&mut site.write()));
        drive_dom(&mut self.dom);
    }

    pub fn read<T>(&self, f: impl FnOnce(&Portfolio) -> T) -> T {
        let site = self.handles.site();
        self.dom.in_runtime(|| f(&site.peek()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(config: SiteConfig) -> ViewHarness {
    let handles = PortfolioTestHandles::default();
    let app = Arc::new(TestApp { config });
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
