//! Backend URL construction.

/// Where the regulator backend listens when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const CURRENT_QUEST_PATH: &str = "current-quest";
const RUN_SIMULATION_PATH: &str = "run-simulation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build endpoints rooted at `base`. Blank input falls back to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET` target for the latest quest.
    #[must_use]
    pub fn current_quest(&self) -> String {
        format!("{}/{CURRENT_QUEST_PATH}", self.base)
    }

    /// `POST` target that advances the backend simulation.
    #[must_use]
    pub fn run_simulation(&self) -> String {
        format!("{}/{RUN_SIMULATION_PATH}", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
