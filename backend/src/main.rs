//! Complaint desk server entry-point.

mod server;

use actix_web::cookie::Key;
use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use complaint_desk::inbound::http::health::HealthState;
use complaint_desk::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, ServerSettings, create_server};

/// Minimum key material accepted by `Key::derive_from`.
const MIN_KEY_BYTES: usize = 32;

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

fn load_session_key(settings: &ServerSettings) -> Result<Key> {
    let path = settings.session_key_file();
    let read = std::fs::read(path).and_then(|bytes| {
        if bytes.len() < MIN_KEY_BYTES {
            Err(std::io::Error::other(format!(
                "session key must be at least {MIN_KEY_BYTES} bytes"
            )))
        } else {
            Ok(bytes)
        }
    });
    match read {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(error) if cfg!(debug_assertions) || settings.allow_ephemeral_key => {
            warn!(path = %path.display(), %error, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(error) => Err(error)
            .wrap_err_with(|| format!("failed to read session key at {}", path.display())),
    }
}

async fn attach_database(config: ServerConfig, settings: &ServerSettings) -> Result<ServerConfig> {
    let Some(url) = settings.database_url.as_deref() else {
        return Ok(config);
    };
    run_migrations(url)
        .await
        .wrap_err("database migrations failed")?;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to build database pool")?;
    info!(max_size = settings.pool_max_size(), "database pool ready");
    Ok(config.with_db_pool(pool))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load configuration: {error}"))?;
    let key = load_session_key(&settings)?;
    let config = ServerConfig::new(key, settings.cookie_secure, settings.bind_addr());
    let config = attach_database(config, &settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(bind_addr = %settings.bind_addr(), "complaint desk listening");
    server.await?;
    health_state.mark_draining();
    Ok(())
}
