//! # chzzk-rec
//!
//! This crate provides a library for monitoring a Chzzk live page and
//! recording broadcasts as they happen. It drives two external tools:
//! `streamlink` to resolve the page into a playable stream URI, and
//! `ffmpeg` to capture and transcode the stream.
//!
//! ## Usage
//!
//! The pieces compose directly: probe the page, and when it reports live,
//! run a recording session.
//!
//! ```no_run
//! use chzzk_rec::{config::RecorderConfig, probe::Prober, recorder};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = RecorderConfig::default();
//!
//!     // Prober owns a reqwest client configured with the proxy, a browser
//!     // User-Agent and a request timeout
//!     let prober = Prober::new(&cfg).unwrap();
//!
//!     // Cancelled by a Ctrl-C handler to stop the capture early
//!     let interrupt = CancellationToken::new();
//!
//!     if prober.is_live().await {
//!         let saved = recorder::run_session(&cfg, &interrupt).await.unwrap();
//!         println!("Saved {}", saved.display());
//!     }
//! }
//! ```
//!
//! A session captures into an intermediate FLV, converts it to MP4 once the
//! stream ends (or the token is cancelled), and deletes the FLV.

#[forbid(unsafe_code)]
#[macro_use]
extern crate log;

pub mod config;
pub mod ffmpeg;
pub mod probe;
pub mod recorder;
pub mod resolver;
pub mod util;
