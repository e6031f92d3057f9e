use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Services offered on the contact page's select box.
///
/// The inquiry keeps `service` as free text, this list only seeds the form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    AsRefStr,
)]
pub enum Service {
    #[default]
    #[serde(rename = "AI Powered Chatbot")]
    #[strum(serialize = "AI Powered Chatbot")]
    Chatbot,
    #[serde(rename = "Voice Agent Development")]
    #[strum(serialize = "Voice Agent Development")]
    VoiceAgent,
    #[serde(rename = "Interview Copilot")]
    #[strum(serialize = "Interview Copilot")]
    InterviewCopilot,
    #[serde(rename = "Sentiment Analysis")]
    #[strum(serialize = "Sentiment Analysis")]
    SentimentAnalysis,
    #[serde(rename = "Computer Vision")]
    #[strum(serialize = "Computer Vision")]
    ComputerVision,
    Other,
}

/// Inquiry fields that carry validation rules or show up in error maps.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Company,
    Service,
    Phone,
    Message,
}
