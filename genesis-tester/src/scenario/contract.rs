use anyhow::{Context, Result};
use serde_json::Value;
use thirtyfour::prelude::*;

use super::{ApiCtx, ApiScenario, BrowserScenario, CombinedScenario, ScenarioCtx};
use crate::browser::page;

/// Fields every stored quest must carry for the console to render it.
pub const QUEST_FIELDS: [&str; 7] = [
    "_id",
    "title",
    "type",
    "flavor_text",
    "objective",
    "reward",
    "generated_at",
];

pub struct ContractScenario;

/// `null`, or an object with every quest field present.
pub fn check_payload(payload: &Value) -> Result<()> {
    if payload.is_null() {
        return Ok(());
    }
    let object = payload
        .as_object()
        .with_context(|| format!("payload is neither null nor an object: {payload}"))?;
    if let Some(reason) = object.get("error").and_then(Value::as_str) {
        anyhow::bail!("backend reported an error: {reason}");
    }
    let missing: Vec<&str> = QUEST_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    anyhow::ensure!(
        missing.is_empty(),
        "quest is missing fields: {}",
        missing.join(", ")
    );
    Ok(())
}

/// Whether a settled view carries a quest card. Only the empty archive may
/// skip the card; the error view or anything unrecognised fails.
fn renders_quest(view: &str) -> Result<bool> {
    match view {
        "content" => Ok(true),
        "empty" => Ok(false),
        "error" => anyhow::bail!("page shows the fetch error instead of a quest"),
        other => anyhow::bail!("page settled on unexpected view {other:?}"),
    }
}

#[async_trait::async_trait(?Send)]
impl ApiScenario for ContractScenario {
    async fn run_api(&self, ctx: &ApiCtx<'_>) -> Result<()> {
        let body = ctx
            .api
            .current_quest_body()
            .await
            .context("fetching current quest")?;
        let payload: Value = serde_json::from_str(&body).context("decoding current quest")?;
        check_payload(&payload)?;
        if ctx.verbose {
            println!("  📐 Payload shape ok ({} bytes)", body.len());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ContractScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        let view = page::wait_for_settled_view(driver, ctx.timeout).await?;
        if !renders_quest(&view)? {
            if ctx.verbose {
                println!("  📭 Archive is empty, no quest card to check");
            }
            return Ok(());
        }
        // fields may legitimately be blank, but every slot must be rendered
        for id in page::QUEST_FIELD_IDS {
            page::text_of(driver, id).await?;
        }
        Ok(())
    }
}

impl CombinedScenario for ContractScenario {
    fn name(&self) -> &'static str {
        "Quest Contract"
    }
}
