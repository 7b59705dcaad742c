use std::path::{Path, PathBuf};

use anyhow::Context;
use iced::Task;
use slideway_core::Showcase;

use crate::messages::Message;
use crate::state::State;

pub const SHOWCASE_ENV: &str = "SLIDEWAY_SHOWCASE";

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub showcase_path: Option<PathBuf>,
}

impl AppConfig {
    /// Configuration that renders the built-in demo page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_environment() -> Self {
        let showcase_path = std::env::var_os(SHOWCASE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { showcase_path }
    }

    pub fn with_showcase(mut self, path: impl Into<PathBuf>) -> Self {
        self.showcase_path = Some(path.into());
        self
    }

    pub fn showcase_path(&self) -> Option<&Path> {
        self.showcase_path.as_deref()
    }
}

/// Resolve the showcase to render: the configured file, or the demo page.
pub fn load_showcase(config: &AppConfig) -> anyhow::Result<Showcase> {
    let Some(path) = config.showcase_path() else {
        return Ok(Showcase::demo());
    };

    let showcase = Showcase::load(path)
        .with_context(|| format!("failed to load showcase from {}", path.display()))?;
    anyhow::ensure!(
        !showcase.sliders.is_empty(),
        "showcase {} defines no [[slider]] tables",
        path.display()
    );
    Ok(showcase)
}

/// Boot logic shared by the runtime application and tests.
pub fn base_state(config: &AppConfig) -> State {
    let showcase = load_showcase(config).unwrap_or_else(|err| {
        log::warn!("{err:#}; falling back to the built-in demo page");
        Showcase::demo()
    });

    log::info!("Rendering {} slider(s)", showcase.sliders.len());
    State::from_showcase(&showcase)
}

pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    (base_state(config), Task::none())
}
