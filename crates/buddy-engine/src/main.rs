//! Headless host for one pet session.
//!
//! Opens (or creates) the configured owner's pet, runs the decay and
//! motivation scheduler, and logs every snapshot until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use buddy::{Clock, PetRepository, SystemClock};
use buddy_engine::{
    EngineConfig, InMemoryPetRepository, JsonFilePetRepository, PetScheduler, PetSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🐾 Buddy engine initializing...");

    let config = EngineConfig::from_env();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match config.data_dir.clone() {
        Some(dir) => {
            tracing::info!("💾 Storing pets in {}", dir.display());
            run(Arc::new(JsonFilePetRepository::new(dir)), clock, config).await
        }
        None => {
            tracing::warn!("⚠️  No BUDDY_DATA_DIR set - pet lives in memory only");
            run(Arc::new(InMemoryPetRepository::new()), clock, config).await
        }
    }
}

async fn run<R: PetRepository + 'static>(
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let session = PetSession::open(repo, clock, &config)
        .await
        .with_context(|| format!("failed to open pet session for {}", config.owner_id))?;

    let mut updates = session.subscribe();
    let session = Arc::new(Mutex::new(session));
    let scheduler = PetScheduler::new(session.clone(), Some(config.scheduler.clone())).start();

    log_snapshot(&updates.borrow_and_update());
    tracing::info!("✅ Buddy engine ready - press Ctrl-C to stop");

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl-C")?;
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                log_snapshot(&updates.borrow_and_update());
            }
        }
    }

    tracing::info!("👋 Shutting down...");
    scheduler.shutdown().await;

    let session = session.lock().await;
    if let Err(e) = session.persist().await {
        tracing::warn!("⚠️  Final save failed: {}", e);
    }
    for message in session.messages().iter() {
        tracing::info!("  💬 [{}] {}", message.tone, message.text);
    }

    Ok(())
}

fn log_snapshot(pet: &buddy::Pet) {
    tracing::info!(
        "{} {} | lv {} ({}%) | ❤️ {} ⚡ {} 🍎 {} | {}",
        pet.avatar(),
        pet.name,
        pet.level,
        pet.level_progress(),
        pet.happiness,
        pet.energy,
        pet.fullness(),
        pet.current_emotion
    );
}
