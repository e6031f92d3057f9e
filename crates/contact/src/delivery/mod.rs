use std::{sync::Arc, time::Duration};

use crate::{ContactInquiry, Error};

mod deep_link;
mod relay;

pub use deep_link::*;
pub use relay::*;

pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_BRAND: &str = "KrishvaTech";

pub const RELAY_SUCCESS_MESSAGE: &str = "Thanks! We'll get back within a day.";
pub const DEEP_LINK_SUCCESS_MESSAGE: &str = "Opening messaging app… message pre-filled.";

/// Which backends are available to receive inquiries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub relay_id: Option<String>,
    pub relay_base_url: String,
    pub relay_timeout: Duration,
    pub whatsapp_number: Option<String>,
    pub brand: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            relay_id: None,
            relay_base_url: DEFAULT_RELAY_BASE_URL.to_owned(),
            relay_timeout: DEFAULT_RELAY_TIMEOUT,
            whatsapp_number: None,
            brand: DEFAULT_BRAND.to_owned(),
        }
    }
}

impl DeliveryConfig {
    pub fn with_relay_id(mut self, relay_id: impl Into<String>) -> Self {
        self.relay_id = Some(relay_id.into());
        self
    }

    pub fn with_whatsapp_number(mut self, number: impl Into<String>) -> Self {
        self.whatsapp_number = Some(number.into());
        self
    }
}

/// The delivery path picked for a configuration. Relay wins over the deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    Relay { endpoint: String },
    DeepLink { digits: String, brand: String },
    Unconfigured,
}

impl Channel {
    pub fn select(config: &DeliveryConfig) -> Self {
        let relay_id = config
            .relay_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        if let Some(relay_id) = relay_id {
            return Self::Relay {
                endpoint: RelayRequest::endpoint_for(&config.relay_base_url, relay_id),
            };
        }

        let digits = config
            .whatsapp_number
            .as_deref()
            .map(digits_only)
            .filter(|digits| !digits.is_empty());

        match digits {
            Some(digits) => Self::DeepLink {
                digits,
                brand: config.brand.to_owned(),
            },
            None => Self::Unconfigured,
        }
    }

    pub fn plan(&self, inquiry: &ContactInquiry) -> DeliveryPlan {
        match self {
            Channel::Relay { endpoint } => DeliveryPlan::Post(RelayRequest {
                endpoint: endpoint.to_owned(),
                inquiry: inquiry.clone(),
            }),
            Channel::DeepLink { digits, brand } => {
                DeliveryPlan::Open(DeepLink::for_inquiry(digits, brand, inquiry))
            }
            Channel::Unconfigured => DeliveryPlan::Reject,
        }
    }
}

/// The single side effect a submission will perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryPlan {
    Post(RelayRequest),
    Open(DeepLink),
    Reject,
}

/// Proof that an inquiry left the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Relayed,
    LinkOpened { url: String },
}

impl Receipt {
    pub fn message(&self) -> &'static str {
        match self {
            Receipt::Relayed => RELAY_SUCCESS_MESSAGE,
            Receipt::LinkOpened { .. } => DEEP_LINK_SUCCESS_MESSAGE,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Receipt::Relayed => None,
            Receipt::LinkOpened { url } => Some(url.as_str()),
        }
    }
}

/// Executes delivery plans against the configured relay and link opener.
#[derive(Clone)]
pub struct Dispatcher {
    channel: Channel,
    relay: Arc<dyn Relay>,
    opener: Arc<dyn LinkOpener>,
}

impl Dispatcher {
    pub fn new(channel: Channel, relay: Arc<dyn Relay>, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            channel,
            relay,
            opener,
        }
    }

    /// Dispatcher with an HTTP relay and a browser hand-off opener.
    pub fn from_config(config: &DeliveryConfig) -> anyhow::Result<Self> {
        let relay = HttpRelay::new(config.relay_timeout)?;

        Ok(Self::new(
            Channel::select(config),
            Arc::new(relay),
            Arc::new(HandOff),
        ))
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub async fn deliver(&self, inquiry: &ContactInquiry) -> crate::Result<Receipt> {
        match self.channel.plan(inquiry) {
            DeliveryPlan::Post(request) => {
                if let Err(err) = self.relay.post(&request).await {
                    tracing::warn!(endpoint = %request.endpoint, "relay delivery failed: {err}");
                    return Err(err.into());
                }

                tracing::info!(endpoint = %request.endpoint, "inquiry relayed");

                Ok(Receipt::Relayed)
            }
            DeliveryPlan::Open(link) => {
                self.opener.open(&link);

                Ok(Receipt::LinkOpened {
                    url: link.into_url(),
                })
            }
            DeliveryPlan::Reject => {
                tracing::error!("contact form has neither a relay id nor a WhatsApp number");

                Err(Error::Unconfigured)
            }
        }
    }
}
