use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};

#[derive(thiserror::Error, Debug)]
pub enum FfmpegError {
    #[error("I/O error")]
    IoError(#[from] std::io::Error),
    #[error("ffmpeg exited with {0}")]
    ExitStatus(std::process::ExitStatus),
}

/// Arguments for the capture run: read the stream through the proxy and
/// write a lossless high-bitrate FLV. The process has no natural end while
/// the broadcast is running; the caller decides when to stop it.
fn capture_args(proxy: &str, stream_uri: &str, output: &Path) -> Vec<String> {
    vec![
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-http_proxy".to_string(),
        proxy.to_string(),
        "-i".to_string(),
        stream_uri.to_string(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-crf".to_string(),
        "0".to_string(),
        "-preset".to_string(),
        "veryslow".to_string(),
        "-b:v".to_string(),
        "50000k".to_string(),
        "-f".to_string(),
        "flv".to_string(),
        "-y".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

/// Arguments for the conversion run: FLV to MP4 at the same video settings,
/// re-encoding audio to aac.
fn convert_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-crf".to_string(),
        "0".to_string(),
        "-preset".to_string(),
        "veryslow".to_string(),
        "-b:v".to_string(),
        "50000k".to_string(),
        "-b:a".to_string(),
        "320k".to_string(),
        "-y".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

/// Launch the long-running capture process and hand the child back to the
/// caller, who awaits it or kills it on interruption.
pub fn spawn_capture(
    ffmpeg_bin: &Path,
    proxy: &str,
    stream_uri: &str,
    output: &Path,
) -> Result<Child, FfmpegError> {
    Command::new(ffmpeg_bin)
        .args(capture_args(proxy, stream_uri, output))
        .stdin(Stdio::null())
        .spawn()
        .map_err(FfmpegError::IoError)
}

/// Convert the captured FLV into the final MP4, overwriting any existing
/// file at `output`. Runs to completion; there is no cancellation of this
/// phase once entered.
pub async fn convert(ffmpeg_bin: &Path, input: &Path, output: &Path) -> Result<(), FfmpegError> {
    let status = Command::new(ffmpeg_bin)
        .args(convert_args(input, output))
        .stdin(Stdio::null())
        .status()
        .await?;

    if !status.success() {
        return Err(FfmpegError::ExitStatus(status));
    }

    Ok(())
}
