use lazy_static::lazy_static;
use reqwest::Client;
use tokio::time::Duration;

lazy_static! {
    static ref CLIENT: Client = Client::builder()
        // .timeout(Duration::from_secs(300))
        .connect_timeout(Duration::from_secs(20))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("reqwest::Client::new()");
}

/// Shared client, no retry layer: a failed request is reported once.
pub fn http_client() -> &'static Client {
    &CLIENT
}
