use basket::Session;
use basket::domain::config::WindowConfig;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

mod components;
mod widget;

pub use components::App;
pub use widget::{Widget, notice_text};

const STYLE: &str = r"
body { font-family: sans-serif; margin: 1.5rem; color: #222; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
td.num, th.num { text-align: right; }
tfoot td { font-weight: 600; }
input.qty { width: 4rem; }
form.product { display: flex; gap: 0.5rem; margin-top: 1rem; }
.notice-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; }
.notice { background: #fff; padding: 1.2rem 1.5rem; border-radius: 6px; max-width: 28rem; }
.reset { margin-top: 1rem; }
";

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and hands `session` to the widget. Blocks until the window closes.
    pub fn launch(self, session: Session) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLE}</style>"#
        ));

        LaunchBuilder::desktop().with_cfg(cfg).with_context(Widget::new(session)).launch(App);
    }
}
