use std::env;
use std::sync::Arc;

use anyhow::Context;
use site_api_client::auth::LoginOutcome;
use site_api_client::{ApiService, ClientConfig, FileSession, InMemorySession, TokenProvider};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_api_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    info!(base_url = %config.base_url, "Probing site backend");

    let session: Arc<dyn TokenProvider> = match env::var("SITE_SESSION_FILE") {
        Ok(path) if !path.trim().is_empty() => Arc::new(FileSession::new(path)),
        _ => Arc::new(InMemorySession::new()),
    };
    let api = ApiService::new(&config, session).context("Failed to build HTTP client")?;

    if let (Ok(email), Ok(password)) = (env::var("SITE_ADMIN_EMAIL"), env::var("SITE_ADMIN_PASSWORD")) {
        match api.login(&email, &password).await.context("Login failed")? {
            LoginOutcome::Authenticated(_) => info!(%email, "Logged in"),
            LoginOutcome::CodeRequired { message } => {
                warn!(%email, ?message, "Account requires a verification code; continuing anonymously")
            }
        }
    }

    let hero = api.get_hero().await.context("GET /hero")?;
    info!(configured = hero.is_some(), "Hero");

    let slides = api.get_slides().await.context("GET /slides")?;
    info!(count = slides.len(), "Slides");

    let services = api.get_services().await.context("GET /services")?;
    info!(count = services.len(), "Services");

    let testimonials = api.get_testimonials().await.context("GET /testimonials")?;
    info!(count = testimonials.len(), "Testimonials");

    let clients = api.get_clients().await.context("GET /clients")?;
    info!(count = clients.len(), "Clients");

    if api.is_authenticated() {
        let unread = api
            .get_unread_contact_messages_count()
            .await
            .context("GET /contact-messages/unread-count")?;
        info!(unread, "Contact messages");
    }

    info!("Backend looks healthy");
    Ok(())
}
