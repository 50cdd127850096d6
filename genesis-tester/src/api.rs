//! Native transport for the regulator backend.

use genesis_core::{ApiError, Endpoints, Quest, QuestApi, parse_current_quest};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `reqwest`-backed client used by the API scenarios.
#[derive(Debug, Clone)]
pub struct HttpQuestApi {
    client: reqwest::Client,
    endpoints: Endpoints,
    timeout: Duration,
}

impl HttpQuestApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints: Endpoints::new(base),
            timeout: REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Raw `GET /current-quest` body, status-checked but not decoded.
    pub async fn current_quest_body(&self) -> Result<String, ApiError> {
        let resp = self
            .client
            .get(self.endpoints.current_quest())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network)?;
        ApiError::check_status(resp.status().as_u16())?;
        resp.text().await.map_err(network)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl QuestApi for HttpQuestApi {
    async fn current_quest(&self) -> Result<Option<Quest>, ApiError> {
        let body = self.current_quest_body().await?;
        parse_current_quest(&body)
    }

    async fn run_simulation(&self) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoints.run_simulation())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network)?;
        ApiError::check_status(resp.status().as_u16())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use hyper::service::{make_service_fn, service_fn};
    use hyper::{Body, Method, Request, Response, Server, StatusCode};
    use std::convert::Infallible;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub const MINT: &str = r#"{"title":"Reclaim the Mint","type":"Economic","flavor_text":"The presses run hot.","objective":"Stabilize inflation","reward":"500 gold","_id":"q1","generated_at":"cycle-7"}"#;

    /// Scripted backend; counts the requests it serves per route.
    #[derive(Clone)]
    pub struct MockBackend {
        pub quest_status: u16,
        pub quest_body: &'static str,
        pub sim_status: u16,
        gets: Arc<AtomicUsize>,
        posts: Arc<AtomicUsize>,
    }

    impl MockBackend {
        pub fn serving(quest_body: &'static str) -> Self {
            Self {
                quest_status: 200,
                quest_body,
                sim_status: 200,
                gets: Arc::default(),
                posts: Arc::default(),
            }
        }

        pub fn gets(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        pub fn posts(&self) -> usize {
            self.posts.load(Ordering::SeqCst)
        }

        fn respond(&self, req: &Request<Body>) -> Response<Body> {
            let (status, body) = match (req.method(), req.uri().path()) {
                (&Method::GET, "/current-quest") => {
                    self.gets.fetch_add(1, Ordering::SeqCst);
                    (self.quest_status, self.quest_body)
                }
                (&Method::POST, "/run-simulation") => {
                    self.posts.fetch_add(1, Ordering::SeqCst);
                    (self.sim_status, r#"{"status":"Simulation Complete"}"#)
                }
                _ => (404, r#"{"detail":"Not Found"}"#),
            };
            let mut resp = Response::new(Body::from(body));
            *resp.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            resp
        }

        /// Serve on an ephemeral local port for the rest of the test.
        pub fn spawn(&self) -> SocketAddr {
            let backend = self.clone();
            let make = make_service_fn(move |_conn| {
                let backend = backend.clone();
                async move {
                    Ok::<_, Infallible>(service_fn(move |req| {
                        let resp = backend.respond(&req);
                        async move { Ok::<_, Infallible>(resp) }
                    }))
                }
            });
            let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make);
            let addr = server.local_addr();
            tokio::spawn(async move {
                let _ = server.await;
            });
            addr
        }
    }

    pub fn base_url(addr: SocketAddr) -> String {
        format!("http://{addr}")
    }

    /// An address nothing listens on.
    pub fn dead_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("ephemeral addr");
        drop(listener);
        base_url(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MINT, MockBackend, base_url, dead_url};
    use super::*;

    #[tokio::test]
    async fn current_quest_decodes_record() {
        let backend = MockBackend::serving(MINT);
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        let quest = api.current_quest().await.unwrap().expect("quest present");
        assert_eq!(quest.title, "Reclaim the Mint");
        assert_eq!(quest.id, "q1");
        assert_eq!(backend.gets(), 1);
    }

    #[tokio::test]
    async fn current_quest_maps_null_to_none() {
        let backend = MockBackend::serving("null");
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        assert!(api.current_quest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn current_quest_rejects_non_success_status() {
        let mut backend = MockBackend::serving(MINT);
        backend.quest_status = 500;
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        assert!(matches!(
            api.current_quest().await,
            Err(ApiError::Status(500))
        ));
    }

    #[tokio::test]
    async fn current_quest_surfaces_backend_error_object() {
        let backend = MockBackend::serving(r#"{"error":"archive offline"}"#);
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        match api.current_quest().await {
            Err(ApiError::Backend(message)) => assert_eq!(message, "archive offline"),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_simulation_ignores_body_and_checks_status() {
        let mut backend = MockBackend::serving(MINT);
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        api.run_simulation().await.unwrap();
        assert_eq!(backend.posts(), 1);

        backend.sim_status = 503;
        let api = HttpQuestApi::new(&base_url(backend.spawn()));
        assert!(matches!(
            api.run_simulation().await,
            Err(ApiError::Status(503))
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let api = HttpQuestApi::new(&dead_url()).with_timeout(Duration::from_secs(2));
        assert!(matches!(
            api.current_quest().await,
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn endpoints_follow_base() {
        let api = HttpQuestApi::new("http://backend:9000/");
        assert_eq!(
            api.endpoints().current_quest(),
            "http://backend:9000/current-quest"
        );
    }
}
