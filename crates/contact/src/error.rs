use std::time::Duration;

pub const RELAY_FAILURE_MESSAGE: &str = "Couldn't send. Please try again.";
pub const UNCONFIGURED_MESSAGE: &str = "No submission backend configured. Set a relay id or a WhatsApp number in the site configuration.";

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("relay answered with status {0}")]
    Rejected(u16),

    #[error("relay did not answer within {0:?}")]
    TimedOut(Duration),

    #[error("relay transport: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            return Self::Rejected(status.as_u16());
        }

        Self::Transport(value.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Delivery(#[from] DeliveryError),

    #[error("no submission backend configured")]
    Unconfigured,
}

impl Error {
    /// Text for the status banner shown above the form.
    pub fn status_message(&self) -> &'static str {
        match self {
            Error::Delivery(_) => RELAY_FAILURE_MESSAGE,
            Error::Unconfigured => UNCONFIGURED_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
