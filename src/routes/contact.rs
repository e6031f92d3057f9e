use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use krishvatech_contact::{ContactForm, ContactInquiry, Field, FormState, FormStatus, Service};
use strum::VariantArray;

use crate::{config::SiteConfig, routes::AppState, template::Template};

pub struct ServiceOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub brand: &'a str,
    pub contact_email: &'a str,
    pub fields: &'a ContactInquiry,
    pub services: Vec<ServiceOption>,
    pub name_error: Option<&'a str>,
    pub email_error: Option<&'a str>,
    pub message_error: Option<&'a str>,
    pub success: Option<&'a str>,
    pub failure: Option<&'a str>,
    pub deep_link: Option<&'a str>,
}

impl<'a> ContactTemplate<'a> {
    pub fn new(site: &'a SiteConfig, state: &'a FormState) -> Self {
        let services = Service::VARIANTS
            .iter()
            .map(|service| {
                let label: &'static str = service.as_ref();
                ServiceOption {
                    label,
                    selected: state.fields.service == label,
                }
            })
            .collect();

        let (success, deep_link) = match &state.status {
            FormStatus::Succeeded(receipt) => (Some(receipt.message()), receipt.link()),
            _ => (None, None),
        };

        let failure = match &state.status {
            FormStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        };

        Self {
            brand: &site.brand,
            contact_email: &site.contact_email,
            fields: &state.fields,
            services,
            name_error: state.errors.get(Field::Name),
            email_error: state.errors.get(Field::Email),
            message_error: state.errors.get(Field::Message),
            success,
            failure,
            deep_link,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let state = FormState::default();

    template.render(ContactTemplate::new(template.site(), &state))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactInquiry>,
) -> impl IntoResponse {
    let form = ContactForm::new(app_state.dispatcher.clone());
    let state = form.submit(input).await;

    let status = if state.errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    template.render_with_status(status, ContactTemplate::new(template.site(), &state))
}
