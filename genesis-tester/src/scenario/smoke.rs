use anyhow::Result;
use genesis_core::messages::APP_TITLE;
use thirtyfour::prelude::*;

use super::{ApiCtx, ApiScenario, BoardRecorder, BrowserScenario, CombinedScenario, ScenarioCtx};
use crate::browser::page;

pub struct SmokeScenario;

#[async_trait::async_trait(?Send)]
impl ApiScenario for SmokeScenario {
    async fn run_api(&self, ctx: &ApiCtx<'_>) -> Result<()> {
        let recorder = BoardRecorder::default();
        genesis_core::refresh(ctx.api, &|action| recorder.dispatch(action)).await;

        let board = recorder.board();
        super::ensure_settled(&board)?;
        if ctx.verbose {
            match &board.quest {
                Some(quest) => println!("  📜 Current quest: {}", quest.title),
                None => println!("  📭 Archive is empty"),
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.base_url).await?;

        let heading = page::heading_text(driver).await?;
        anyhow::ensure!(
            heading == APP_TITLE,
            "heading should read {APP_TITLE:?}, got {heading:?}"
        );

        let view = page::wait_for_settled_view(driver, ctx.timeout).await?;
        if ctx.verbose {
            println!("  🌐 Page settled on the {view} view");
        }
        anyhow::ensure!(view != "error", "page shows the fetch error");

        let trigger = page::trigger(driver).await?;
        anyhow::ensure!(
            trigger.is_enabled().await?,
            "trigger should be enabled once loading resolves"
        );
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpQuestApi;
    use crate::api::mock::{MINT, MockBackend, base_url};

    #[tokio::test]
    async fn smoke_issues_one_get_and_passes() {
        let backend = MockBackend::serving(MINT);
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        let ctx = ApiCtx {
            api: &api,
            verbose: false,
        };
        SmokeScenario.run_api(&ctx).await.expect("smoke passes");
        assert_eq!(backend.gets(), 1);
        assert_eq!(backend.posts(), 0);
    }

    #[tokio::test]
    async fn smoke_accepts_empty_archive() {
        let backend = MockBackend::serving("null");
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        let ctx = ApiCtx {
            api: &api,
            verbose: true,
        };
        SmokeScenario.run_api(&ctx).await.expect("empty archive is fine");
    }

    #[tokio::test]
    async fn smoke_fails_on_server_error() {
        let mut backend = MockBackend::serving(MINT);
        backend.quest_status = 500;
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        let ctx = ApiCtx {
            api: &api,
            verbose: false,
        };
        assert!(SmokeScenario.run_api(&ctx).await.is_err());
    }
}
