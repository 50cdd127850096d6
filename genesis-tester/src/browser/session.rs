use std::time::Duration;
use thirtyfour::prelude::*;
use thirtyfour::Capabilities;

/// Browsers the console is exercised in, each behind its stock WebDriver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "edge" => Some(Self::Edge),
            "firefox" => Some(Self::Firefox),
            "safari" => Some(Self::Safari),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }

    /// Port the driver binary listens on when started without flags.
    const fn local_port(self) -> u16 {
        match self {
            Self::Chrome => 9515,
            Self::Edge => 17556,
            Self::Firefox => 4444,
            Self::Safari => 4445,
        }
    }

    /// safaridriver has no headless mode, so the flag is ignored there.
    fn capabilities(self, headless: bool) -> WebDriverResult<Capabilities> {
        Ok(match self {
            Self::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                caps.into()
            }
            Self::Edge => {
                let mut caps = DesiredCapabilities::edge();
                if headless {
                    caps.set_headless()?;
                }
                caps.into()
            }
            Self::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if headless {
                    caps.set_headless()?;
                }
                caps.into()
            }
            Self::Safari => DesiredCapabilities::safari().into(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    /// How long element lookups wait for the console to render them.
    pub element_wait: Duration,
    pub remote_hub: Option<String>,
}

impl BrowserConfig {
    fn driver_url(&self, kind: BrowserKind) -> String {
        self.remote_hub
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", kind.local_port()))
    }
}

pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let url = cfg.driver_url(kind);
    log::debug!("starting {} session via {url}", kind.label());
    let driver = WebDriver::new(url.as_str(), kind.capabilities(cfg.headless)?).await?;
    driver.set_implicit_wait_timeout(cfg.element_wait).await?;
    Ok(driver)
}
