use anyhow::Result;
use krishvatech_contact::Channel;

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting krishvatech server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = AppState::new(config)?;

    match state.dispatcher.channel() {
        Channel::Relay { endpoint } => tracing::info!(%endpoint, "Inquiries go to the form relay"),
        Channel::DeepLink { .. } => tracing::info!("Inquiries open a prefilled WhatsApp chat"),
        Channel::Unconfigured => {
            tracing::warn!("No submission backend configured, the contact form will refuse inquiries")
        }
    }

    let app = crate::create_app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let shutdown_signal = async {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(err) => {
                    tracing::error!("failed to install SIGTERM handler: {err}");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Prints which delivery channel the current configuration selects.
pub fn check(config: &crate::config::Config) -> Result<()> {
    let delivery = config.delivery();

    let summary = match Channel::select(&delivery) {
        Channel::Relay { endpoint } => format!("relay: POST {endpoint}"),
        Channel::DeepLink { digits, .. } => format!("whatsapp: https://wa.me/{digits}"),
        Channel::Unconfigured => {
            anyhow::bail!("no submission backend configured, set relay.id or whatsapp.number")
        }
    };

    println!("{summary}");

    Ok(())
}
