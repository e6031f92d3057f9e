//! Shared setup for router tests: an app state wired to an in-memory relay.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use krishvatech::{
    AppState, Config,
    config::{LoggingConfig, RelayConfig, ServerConfig, SiteConfig, WhatsappConfig},
};
use krishvatech_contact::{
    Channel, DeliveryError, Dispatcher, HandOff, Relay, RelayRequest,
};
use tower::ServiceExt;

#[derive(Default)]
pub struct StubRelay {
    calls: AtomicUsize,
    requests: Mutex<Vec<RelayRequest>>,
    reject: bool,
}

impl StubRelay {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RelayRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Relay for StubRelay {
    async fn post(&self, request: &RelayRequest) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if self.reject {
            return Err(DeliveryError::Rejected(503));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub relay: Arc<StubRelay>,
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        logging: LoggingConfig::default(),
        relay: RelayConfig::default(),
        whatsapp: WhatsappConfig::default(),
        site: SiteConfig::default(),
    }
}

pub fn relay_config() -> Config {
    let mut config = config();
    config.relay.id = Some("xkgqzabc".to_string());
    config
}

pub fn whatsapp_config() -> Config {
    let mut config = config();
    config.whatsapp.number = Some("+91 97266 40019".to_string());
    config
}

pub fn create_test_app(config: Config, reject: bool) -> TestApp {
    let relay = Arc::new(StubRelay {
        reject,
        ..Default::default()
    });

    let dispatcher = Dispatcher::new(
        Channel::select(&config.delivery()),
        relay.clone(),
        Arc::new(HandOff),
    );

    TestApp {
        router: krishvatech::create_app(AppState { config, dispatcher }),
        relay,
    }
}

pub async fn get(router: &Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;

    read(response).await
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<(StatusCode, String)> {
    let body = serde_urlencoded::to_string(fields)?;
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))?,
        )
        .await?;

    read(response).await
}

async fn read(response: axum::response::Response) -> anyhow::Result<(StatusCode, String)> {
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8(body.to_vec())?))
}

pub const VALID_FORM: &[(&str, &str)] = &[
    ("name", "Asha"),
    ("email", "a@b.com"),
    ("company", "Sunrise Clinic"),
    ("phone", ""),
    ("service", "Voice Agent Development"),
    ("message", "Interested in a voice agent for our clinic."),
];
