//! CarePortal smoke CLI
//!
//! A small terminal client for exercising the SDK against a running
//! backend: log in, inspect the current session, sign out. State persists
//! in a JSON file so consecutive invocations share the token, the same way
//! the web frontend shares browser storage across page loads.
//!
//! Usage:
//!   careportal login <email> <password>
//!   careportal whoami
//!   careportal logout
//!   careportal theme [light|forest]

use anyhow::{bail, Result};
use careportal_client::{
    ensure_dashboard_access, ApiClient, ClientConfig, FileStorage, RouteDecision, SessionManager,
    TokenStore,
};
use careportal_shared::Theme;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ClientConfig::load()?;
    info!(api_url = %config.api_url, "CarePortal client");

    let store_path =
        std::env::var("CAREPORTAL_STORE").unwrap_or_else(|_| ".careportal.json".to_string());
    let tokens = TokenStore::new(Arc::new(FileStorage::open(store_path)));
    let api = ApiClient::new(&config, tokens.clone());
    let mut sessions = SessionManager::from_storage(tokens.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["login", email, password] => {
            let role = sessions.login(&api, email, password).await?;
            println!("Logged in as {email} ({role})");
            println!("Dashboard: {}", role.dashboard_path());
        }
        ["whoami"] => match sessions.session() {
            Some(session) => {
                println!("{} ({})", session.email, session.role);
                // The backend is the authority; compare its view when reachable.
                match api.current_role().await {
                    Ok(role) if role != session.role => {
                        warn!(stored = %session.role, backend = %role, "Role drift detected");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "Could not confirm session with backend"),
                }
                match ensure_dashboard_access(&tokens, &[]) {
                    RouteDecision::Stay => println!("Dashboard: {}", session.role.dashboard_path()),
                    RouteDecision::Redirect(path) => println!("Redirect: {path}"),
                }
            }
            None => println!("Not signed in"),
        },
        ["logout"] => {
            sessions.sign_out();
            println!("Signed out");
        }
        ["theme"] => {
            println!("{}", tokens.theme().as_str());
        }
        ["theme", value] => {
            let theme = Theme::from_stored(value);
            tokens.set_theme(theme);
            println!("Theme set to {}", theme.as_str());
        }
        _ => {
            bail!("usage: careportal <login <email> <password> | whoami | logout | theme [light|forest]>");
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "careportal_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}
