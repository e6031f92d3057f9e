use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use krishvatech_contact::Dispatcher;

use crate::template::{NotFoundTemplate, Template};

pub mod contact;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let dispatcher = Dispatcher::from_config(&config.delivery())?;

        Ok(Self { config, dispatcher })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let brand = template.site().brand.clone();

    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate { brand: &brand })
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(contact::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
