//! Browser transport for the regulator backend.

use genesis_core::{ApiError, Endpoints, Quest, QuestApi, parse_current_quest};
use gloo_net::http::Request;

/// `fetch`-backed client used by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebQuestApi {
    endpoints: Endpoints,
}

impl WebQuestApi {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for WebQuestApi {
    fn default() -> Self {
        Self::new(&crate::paths::api_base())
    }
}

fn network(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl QuestApi for WebQuestApi {
    async fn current_quest(&self) -> Result<Option<Quest>, ApiError> {
        let resp = Request::get(&self.endpoints.current_quest())
            .send()
            .await
            .map_err(|e| network(&e))?;
        ApiError::check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| network(&e))?;
        parse_current_quest(&body)
    }

    async fn run_simulation(&self) -> Result<(), ApiError> {
        let resp = Request::post(&self.endpoints.run_simulation())
            .send()
            .await
            .map_err(|e| network(&e))?;
        ApiError::check_status(resp.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_configured_base() {
        let api = WebQuestApi::default();
        assert_eq!(api.endpoints().base(), crate::paths::api_base());
    }

    #[test]
    fn explicit_base_builds_both_routes() {
        let api = WebQuestApi::new("http://localhost:9000/");
        assert_eq!(
            api.endpoints().current_quest(),
            "http://localhost:9000/current-quest"
        );
        assert_eq!(
            api.endpoints().run_simulation(),
            "http://localhost:9000/run-simulation"
        );
    }
}
