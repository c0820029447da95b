use chzzk_rec::{config::RecorderConfig, probe::Prober, recorder};
use log::{error, info};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    let cfg = RecorderConfig::default();

    // Create the Prober, a wrapper around reqwest::Client configured with
    // the proxy and a retry middleware for transient errors
    let prober = Prober::new(&cfg).expect("Could not create HTTP client");

    // First Ctrl-C stops the running capture (the session still converts)
    // and ends the loop; while idle it exits right away
    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    info!("Watching {} at {}", cfg.anchor_name, cfg.live_url);
    loop {
        if prober.is_live().await {
            info!("{} is live, starting capture", cfg.anchor_name);
            match recorder::run_session(&cfg, &shutdown).await {
                Ok(saved) => info!(
                    "{} finished broadcasting, saved {}",
                    cfg.anchor_name,
                    saved.display()
                ),
                Err(e) => error!("Recording session failed: {}", e),
            }
            if shutdown.is_cancelled() {
                break;
            }
            // Re-probe immediately; the broadcast may have only hiccupped
        } else {
            info!(
                "{} is offline, checking again in {}s",
                cfg.anchor_name,
                cfg.check_interval.as_secs()
            );
            tokio::select! {
                _ = tokio::time::sleep(cfg.check_interval) => {}
                _ = shutdown.cancelled() => break,
            }
        }
    }

    info!("Shutting down");
}
