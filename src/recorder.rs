use std::path::PathBuf;

use chrono::NaiveDateTime;
use tokio_util::sync::CancellationToken;

use crate::{config::RecorderConfig, ffmpeg, resolver};

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("could not resolve stream URI: {0}")]
    ResolveError(#[from] resolver::ResolveError),
    #[error("ffmpeg error: {0}")]
    FfmpegError(#[from] ffmpeg::FfmpegError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Output paths for one live session, derived from the anchor name and the
/// session start time. The FLV only exists between capture and conversion.
pub struct RecordingSession {
    pub capture_path: PathBuf,
    pub final_path: PathBuf,
}

impl RecordingSession {
    pub fn new(cfg: &RecorderConfig, started_at: NaiveDateTime) -> Self {
        let basename = format!(
            "{}_{}",
            cfg.anchor_name,
            started_at.format("%Y%m%d_%H%M%S")
        );
        Self {
            capture_path: cfg.output_dir.join(format!("{}.flv", basename)),
            final_path: cfg.output_dir.join(format!("{}.mp4", basename)),
        }
    }
}

/// Record one live session: resolve the stream URI, capture it into the
/// intermediate FLV until the broadcast ends or `interrupt` fires, convert
/// to the final MP4 and delete the intermediate.
///
/// Cancelling `interrupt` stops the capture early but still runs the
/// conversion; the session is only abandoned on an error.
pub async fn run_session(
    cfg: &RecorderConfig,
    interrupt: &CancellationToken,
) -> Result<PathBuf, RecordError> {
    tokio::fs::create_dir_all(&cfg.output_dir).await?;

    let session = RecordingSession::new(cfg, chrono::Local::now().naive_local());
    let stream_uri = resolver::resolve(cfg).await?;

    info!(
        "Capturing {} to {}",
        stream_uri,
        session.capture_path.display()
    );
    let mut child = ffmpeg::spawn_capture(
        &cfg.ffmpeg_bin,
        &cfg.proxy,
        &stream_uri,
        &session.capture_path,
    )?;

    let interrupted = tokio::select! {
        status = child.wait() => {
            let status = status?;
            info!("Capture process exited with {}", status);
            false
        }
        _ = interrupt.cancelled() => true,
    };
    if interrupted {
        info!("Capture interrupted, converting what was recorded");
        child.kill().await?;
    }

    info!("Converting to {}", session.final_path.display());
    ffmpeg::convert(&cfg.ffmpeg_bin, &session.capture_path, &session.final_path).await?;
    tokio::fs::remove_file(&session.capture_path).await?;

    info!("Recording finished: {}", session.final_path.display());
    Ok(session.final_path)
}
