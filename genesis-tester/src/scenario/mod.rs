use anyhow::Result;
use genesis_core::{BoardAction, BoardState, BoardView};
use std::cell::RefCell;
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::api::HttpQuestApi;

pub mod advance;
pub mod contract;
pub mod smoke;

/// Context handed to every API scenario iteration.
#[derive(Debug, Clone, Copy)]
pub struct ApiCtx<'a> {
    pub api: &'a HttpQuestApi,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub timeout: Duration,
    pub verbose: bool,
    /// Treat an unobserved busy trigger as a failure instead of a warning.
    pub require_busy: bool,
}

// Backend scenario driven through the shared controller
#[async_trait::async_trait(?Send)]
pub trait ApiScenario {
    async fn run_api(&self, ctx: &ApiCtx<'_>) -> Result<()>;
}

// Browser scenario driven through a WebDriver session
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// Scenario that can run against both surfaces
pub trait CombinedScenario: ApiScenario + BrowserScenario {
    fn name(&self) -> &'static str;
}

/// Board fed by the controller's dispatch, the same way the console reduces actions.
#[derive(Debug, Default)]
pub struct BoardRecorder {
    board: RefCell<BoardState>,
    actions: RefCell<Vec<BoardAction>>,
}

impl BoardRecorder {
    pub fn dispatch(&self, action: BoardAction) {
        self.actions.borrow_mut().push(action.clone());
        self.board.borrow_mut().apply(action);
    }

    pub fn board(&self) -> BoardState {
        self.board.borrow().clone()
    }

    pub fn actions(&self) -> Vec<BoardAction> {
        self.actions.borrow().clone()
    }
}

/// Fail unless the board settled on a quest or an empty archive.
pub fn ensure_settled(board: &BoardState) -> Result<()> {
    anyhow::ensure!(!board.is_loading, "board is still loading");
    anyhow::ensure!(!board.is_busy, "board is still busy");
    if let BoardView::Error(message) = board.view() {
        anyhow::bail!("board shows error: {message}");
    }
    Ok(())
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "advance" | "advance-simulation" => Some(Box::new(advance::AdvanceScenario)),
        "contract" | "quest-contract" => Some(Box::new(contract::ContractScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Load the current quest"),
        ("advance", "Advance the simulation one step and reload"),
        ("contract", "Check the current-quest payload shape"),
    ]
}
