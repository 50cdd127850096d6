use anyhow::Result;
use genesis_core::{BoardAction, Quest};
use thirtyfour::prelude::*;

use super::{ApiCtx, ApiScenario, BoardRecorder, BrowserScenario, CombinedScenario, ScenarioCtx};
use crate::browser::page;

pub struct AdvanceScenario;

#[async_trait::async_trait(?Send)]
impl ApiScenario for AdvanceScenario {
    async fn run_api(&self, ctx: &ApiCtx<'_>) -> Result<()> {
        let recorder = BoardRecorder::default();
        genesis_core::refresh(ctx.api, &|action| recorder.dispatch(action)).await;
        super::ensure_settled(&recorder.board())?;
        let before = recorder.board().quest;

        genesis_core::advance(ctx.api, &|action| recorder.dispatch(action)).await;
        let board = recorder.board();
        super::ensure_settled(&board)?;

        let refreshed = recorder
            .actions()
            .iter()
            .filter(|action| matches!(action, BoardAction::FetchSucceeded(_)))
            .count();
        anyhow::ensure!(
            refreshed == 2,
            "expected one reload after the step, saw {} quest loads in total",
            refreshed
        );

        if ctx.verbose {
            println!(
                "  ⏭️  {} -> {}",
                title_or_none(before.as_ref()),
                title_or_none(board.quest.as_ref())
            );
        }
        Ok(())
    }
}

fn title_or_none(quest: Option<&Quest>) -> &str {
    quest.map_or("(none)", |q| q.title.as_str())
}

/// A fast backend can finish the step between two polls, so an unseen busy
/// state only fails the run when it was explicitly required.
fn check_busy_seen(seen_busy: bool, require_busy: bool) -> Result<()> {
    if seen_busy {
        return Ok(());
    }
    anyhow::ensure!(
        !require_busy,
        "trigger was never disabled while the simulation ran"
    );
    log::warn!("trigger finished before the busy state could be observed");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for AdvanceScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        let view = page::wait_for_settled_view(driver, ctx.timeout).await?;
        anyhow::ensure!(view != "error", "page shows the fetch error before advancing");

        let trigger = page::trigger(driver).await?;
        trigger.click().await?;

        let seen_busy = page::wait_for_trigger_idle(driver, ctx.timeout).await?;
        check_busy_seen(seen_busy, ctx.require_busy)?;
        if seen_busy && ctx.verbose {
            println!("  ⏳ Trigger was disabled while the simulation ran");
        }

        let view = page::current_view(driver).await?;
        anyhow::ensure!(view != "error", "page shows an error after advancing");
        let text = page::body_text(driver).await?;
        anyhow::ensure!(
            !text.contains(genesis_core::messages::TRIGGER_ERROR),
            "page shows the trigger error"
        );
        Ok(())
    }
}

impl CombinedScenario for AdvanceScenario {
    fn name(&self) -> &'static str {
        "Advance Simulation"
    }
}
