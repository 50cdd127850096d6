//! Build-time configuration for where the console finds its backend.
///
/// When `GENESIS_API_URL` is set at compile time (e.g. `https://regulator.example`),
/// requests go there. Local builds without it talk to the development server.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("GENESIS_API_URL"))
}

fn api_base_with(configured: Option<&str>) -> String {
    genesis_core::Endpoints::new(configured.unwrap_or_default())
        .base()
        .to_string()
}
