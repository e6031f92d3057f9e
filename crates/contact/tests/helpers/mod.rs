#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use krishvatech_contact::{
    Channel, ContactForm, ContactInquiry, DeepLink, DeliveryConfig, DeliveryError, Dispatcher,
    LinkOpener, Relay, RelayRequest,
};
use tokio::sync::Notify;

pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/xkgqzabc";

#[derive(Clone, Copy)]
enum Failure {
    Rejected,
    Unreachable,
}

#[derive(Default)]
pub struct FakeRelay {
    calls: AtomicUsize,
    requests: Mutex<Vec<RelayRequest>>,
    failure: Option<Failure>,
    gate: Option<Arc<Notify>>,
}

impl FakeRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            failure: Some(Failure::Rejected),
            ..Default::default()
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            failure: Some(Failure::Unreachable),
            ..Default::default()
        })
    }

    /// Accepts, but only after `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            gate: Some(gate),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RelayRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Relay for FakeRelay {
    async fn post(&self, request: &RelayRequest) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.failure {
            Some(Failure::Rejected) => Err(DeliveryError::Rejected(500)),
            Some(Failure::Unreachable) => Err(DeliveryError::Transport(
                "connection refused".to_owned(),
            )),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    links: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn links(&self) -> Vec<String> {
        self.links.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, link: &DeepLink) {
        self.links.lock().unwrap().push(link.url().to_owned());
    }
}

pub struct Harness {
    pub form: ContactForm,
    pub relay: Arc<FakeRelay>,
    pub opener: Arc<RecordingOpener>,
}

pub fn harness(config: &DeliveryConfig, relay: Arc<FakeRelay>) -> Harness {
    let opener = Arc::new(RecordingOpener::default());
    let dispatcher = Dispatcher::new(Channel::select(config), relay.clone(), opener.clone());

    Harness {
        form: ContactForm::new(dispatcher),
        relay,
        opener,
    }
}

pub fn relay_harness(relay: Arc<FakeRelay>) -> Harness {
    harness(&DeliveryConfig::default().with_relay_id("xkgqzabc"), relay)
}

pub fn valid_inquiry() -> ContactInquiry {
    ContactInquiry {
        name: "Asha".to_owned(),
        email: "a@b.com".to_owned(),
        message: "Interested in a voice agent for our clinic.".to_owned(),
        ..Default::default()
    }
}
