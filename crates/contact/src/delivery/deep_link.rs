use crate::ContactInquiry;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// A prefilled WhatsApp chat link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    url: String,
}

impl DeepLink {
    pub fn new(digits: &str, text: &str) -> Self {
        Self {
            url: format!(
                "{WHATSAPP_BASE_URL}/{digits}?text={}",
                urlencoding::encode(text)
            ),
        }
    }

    pub fn for_inquiry(digits: &str, brand: &str, inquiry: &ContactInquiry) -> Self {
        Self::new(digits, &summary(brand, inquiry))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

/// Plain-text message body prefilled in the chat.
pub fn summary(brand: &str, inquiry: &ContactInquiry) -> String {
    let mut text = format!(
        "New inquiry ({brand})\nName: {}\nEmail: {}\nCompany: {}\nPhone: {}\n",
        inquiry.name, inquiry.email, inquiry.company, inquiry.phone
    );

    if !inquiry.service.is_empty() {
        text.push_str(&format!("Service: {}\n", inquiry.service));
    }

    text.push_str(&format!("\nMessage:\n{}", inquiry.message));

    text
}

pub fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Hands a deep link to whatever can open it.
///
/// Opening is fire-and-forget, there is no delivery confirmation to wait for.
pub trait LinkOpener: Send + Sync {
    fn open(&self, link: &DeepLink);
}

/// Opener used by the web server: the rendered page opens the link in a new tab.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandOff;

impl LinkOpener for HandOff {
    fn open(&self, link: &DeepLink) {
        tracing::info!(url = link.url(), "deep link handed to the browser");
    }
}
