//! DOM queries for the console page.
//!
//! Every query goes through stable ids or the `data-view` marker on the
//! console body, never through copy or layout classes.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

pub const BODY_SELECTOR: &str = ".console__body";
pub const TRIGGER_ID: &str = "advance-btn";
pub const QUEST_FIELD_IDS: [&str; 6] = [
    "quest-title",
    "quest-type",
    "quest-flavor",
    "quest-objective",
    "quest-reward",
    "quest-registry",
];

const POLL_INTERVAL: Duration = Duration::from_millis(100);
// Window in which a click that never showed busy still counts as settled
const BUSY_GRACE: Duration = Duration::from_millis(250);

pub async fn heading_text(driver: &WebDriver) -> Result<String> {
    let heading = driver.find(By::Css("h1")).await.context("finding heading")?;
    Ok(heading.text().await?)
}

pub async fn current_view(driver: &WebDriver) -> Result<String> {
    let body = driver
        .find(By::Css(BODY_SELECTOR))
        .await
        .context("finding console body")?;
    Ok(body.attr("data-view").await?.unwrap_or_default())
}

pub async fn body_text(driver: &WebDriver) -> Result<String> {
    let body = driver.find(By::Css(BODY_SELECTOR)).await?;
    Ok(body.text().await?)
}

pub async fn trigger(driver: &WebDriver) -> Result<WebElement> {
    driver
        .find(By::Id(TRIGGER_ID))
        .await
        .context("finding advance trigger")
}

pub async fn text_of(driver: &WebDriver, id: &str) -> Result<String> {
    let element = driver
        .find(By::Id(id.to_string()))
        .await
        .with_context(|| format!("finding #{id}"))?;
    Ok(element.text().await?)
}

async fn trigger_is_busy(driver: &WebDriver) -> Result<bool> {
    let trigger = trigger(driver).await?;
    let aria_busy = trigger.attr("aria-busy").await?;
    Ok(!trigger.is_enabled().await? || aria_busy.as_deref() == Some("true"))
}

/// Poll until the first fetch resolves and return the view it landed on.
pub async fn wait_for_settled_view(driver: &WebDriver, timeout: Duration) -> Result<String> {
    let deadline = Instant::now() + timeout;
    loop {
        let view = current_view(driver).await?;
        if view != "loading" {
            return Ok(view);
        }
        anyhow::ensure!(
            Instant::now() < deadline,
            "page still loading after {timeout:?}"
        );
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Poll after a trigger click until the control is enabled again.
///
/// Returns whether the busy state was observed along the way.
pub async fn wait_for_trigger_idle(driver: &WebDriver, timeout: Duration) -> Result<bool> {
    let started = Instant::now();
    let mut seen_busy = false;
    loop {
        if trigger_is_busy(driver).await? {
            seen_busy = true;
        } else if seen_busy || started.elapsed() >= BUSY_GRACE {
            return Ok(seen_busy);
        }
        anyhow::ensure!(
            started.elapsed() < timeout,
            "trigger still busy after {timeout:?}"
        );
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
