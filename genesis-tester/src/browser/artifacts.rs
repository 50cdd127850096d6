//! What a failed browser scenario leaves behind for inspection.

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;

use super::page::BODY_SELECTOR;

/// Which view the console body was on and what it said.
fn board_script() -> String {
    format!(
        "var body = document.querySelector('{BODY_SELECTOR}'); \
         return body ? {{ view: body.dataset.view, text: body.innerText }} : null;"
    )
}

/// `<base>/<browser>/<scenario-slug>/<utc timestamp>`
pub fn failure_dir(base: &Path, browser: &str, scenario: &str) -> PathBuf {
    let slug: String = scenario
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    base.join(browser)
        .join(slug)
        .join(Utc::now().format("%Y%m%dT%H%M%SZ").to_string())
}

/// Everything gathered from the page when a scenario fails. Any capture the
/// driver refuses is left out rather than failing the report.
#[derive(Debug, Default)]
pub struct FailureCapture {
    pub screenshot: Option<Vec<u8>>,
    pub dom: Option<String>,
    pub board: Option<Value>,
    pub error_chain: String,
}

impl FailureCapture {
    pub async fn collect(driver: &WebDriver, err: &anyhow::Error) -> Self {
        let board = match driver.execute(board_script().as_str(), vec![]).await {
            Ok(ret) => Some(ret.json().clone()).filter(|v| !v.is_null()),
            Err(e) => {
                log::debug!("board snapshot unavailable: {e}");
                None
            }
        };
        Self {
            screenshot: driver.screenshot_as_png().await.ok(),
            dom: driver.source().await.ok(),
            board,
            error_chain: format!("{err:#}"),
        }
    }

    /// Write the captures into `dir`, returning the files that were written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let mut written = Vec::new();
        let mut put = |name: &str, bytes: &[u8]| -> Result<()> {
            let path = dir.join(name);
            fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
            Ok(())
        };

        put("error.txt", self.error_chain.as_bytes())?;
        if let Some(png) = &self.screenshot {
            put("screenshot.png", png)?;
        }
        if let Some(dom) = &self.dom {
            put("dom.html", dom.as_bytes())?;
        }
        if let Some(board) = &self.board {
            put("board.json", &serde_json::to_vec_pretty(board)?)?;
        }
        Ok(written)
    }
}
