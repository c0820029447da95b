use std::process::ExitStatus;

use tokio::process::Command;

use crate::config::RecorderConfig;

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("could not invoke resolver: {0}")]
    IoError(#[from] std::io::Error),
    #[error("resolver exited with {status}: {stderr}")]
    ResolverFailed { status: ExitStatus, stderr: String },
    #[error("resolver output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
    #[error("resolver printed no stream URI")]
    EmptyOutput,
}

/// Resolve the live page into a playable stream URI by asking streamlink
/// for the best-quality variant. `--stream-url` makes it print the URI to
/// stdout instead of launching a player.
pub async fn resolve(cfg: &RecorderConfig) -> Result<String, ResolveError> {
    let output = Command::new(&cfg.streamlink_bin)
        .arg(&cfg.live_url)
        .arg("best")
        .arg("--stream-url")
        .arg("--http-proxy")
        .arg(&cfg.proxy)
        .output()
        .await?;

    if !output.status.success() {
        return Err(ResolveError::ResolverFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    stream_uri_from_stdout(output.stdout)
}

fn stream_uri_from_stdout(stdout: Vec<u8>) -> Result<String, ResolveError> {
    let uri = String::from_utf8(stdout)?.trim().to_string();
    if uri.is_empty() {
        return Err(ResolveError::EmptyOutput);
    }
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_is_stdout_trimmed() {
        let uri = stream_uri_from_stdout(b"rtmp://example/live/stream1\n".to_vec())
            .expect("should parse");
        assert_eq!(uri, "rtmp://example/live/stream1");

        let uri = stream_uri_from_stdout(b"  https://cdn.example/hls.m3u8  \r\n".to_vec())
            .expect("should parse");
        assert_eq!(uri, "https://cdn.example/hls.m3u8");
    }

    #[test]
    fn blank_stdout_is_an_error() {
        assert!(matches!(
            stream_uri_from_stdout(b"".to_vec()),
            Err(ResolveError::EmptyOutput)
        ));
        assert!(matches!(
            stream_uri_from_stdout(b" \n".to_vec()),
            Err(ResolveError::EmptyOutput)
        ));
    }

    #[test]
    fn non_utf8_stdout_is_an_error() {
        assert!(matches!(
            stream_uri_from_stdout(vec![0xff, 0xfe]),
            Err(ResolveError::InvalidOutput(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let cfg = RecorderConfig {
            streamlink_bin: "false".into(),
            ..Default::default()
        };
        assert!(matches!(
            resolve(&cfg).await,
            Err(ResolveError::ResolverFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn silent_resolver_is_an_error() {
        let cfg = RecorderConfig {
            streamlink_bin: "true".into(),
            ..Default::default()
        };
        assert!(matches!(resolve(&cfg).await, Err(ResolveError::EmptyOutput)));
    }
}
