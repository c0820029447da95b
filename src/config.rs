use std::path::PathBuf;
use std::time::Duration;

/// Browser User-Agent sent with every probe request. Chzzk serves a reduced
/// page to unknown clients, which breaks the liveness check.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.45 Safari/537.36";

/// Fixed settings for one monitored channel, passed by reference to every
/// component. There are no CLI flags; `Default` carries the compiled-in
/// values for the process lifetime.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Display label used in log lines and output file names.
    pub anchor_name: String,
    /// Live page URL that is probed and handed to the resolver.
    pub live_url: String,
    /// Pause between liveness probes while the channel is offline.
    pub check_interval: Duration,
    /// Directory recordings are written to, created on first session.
    pub output_dir: PathBuf,
    /// HTTP/HTTPS proxy used for the probe, the resolver and the capture.
    pub proxy: String,
    /// Request timeout for the liveness probe.
    pub probe_timeout: Duration,
    /// Stream resolver binary.
    pub streamlink_bin: PathBuf,
    /// Transcoder binary.
    pub ffmpeg_bin: PathBuf,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            anchor_name: "Chzzk".to_string(),
            live_url: "https://chzzk.naver.com/live".to_string(),
            check_interval: Duration::from_secs(30),
            output_dir: PathBuf::from("./recordings"),
            proxy: "http://127.0.0.1:7890".to_string(),
            probe_timeout: Duration::from_secs(15),
            streamlink_bin: PathBuf::from("streamlink"),
            ffmpeg_bin: PathBuf::from("ffmpeg"),
        }
    }
}
