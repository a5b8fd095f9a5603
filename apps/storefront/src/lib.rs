//! # Toolshop Storefront Library
//!
//! Host shell for the storefront and admin console. Everything except
//! process startup lives here so it can be tested without stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! toolshop_storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup, line loop)
//! ├── config.rs       ◄─── AppConfig: TOML file + TOOLSHOP_* environment
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (all holders)
//! │   ├── store.rs    ◄─── StoreState: Arc<Mutex<Store>>
//! │   └── menu_editor.rs ◄─ MenuEditorState: the open working copy
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatcher and wire format
//! │   └── ...         ◄─── One file per console area
//! └── error.rs        ◄─── ApiError returned by commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};

use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use config::DEFAULT_LOG_FILTER;
use state::AppState;

fn subscriber<W>(
    default_filter: &str,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=toolshop=trace` - Show trace for toolshop crates only
/// - Default: `default_filter` (from config, `info,toolshop=debug`)
///
/// Logs go to stderr; stdout carries responses only.
pub fn init_tracing(default_filter: &str) {
    subscriber(default_filter, std::io::stderr).init();
}

/// Runs `f` under a temporary subscriber with the default filter.
///
/// The configured filter is only known once the config is loaded, so config
/// loading itself logs through this one.
pub fn with_startup_logging<W, T, F>(writer: W, f: F) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    F: FnOnce() -> T,
{
    tracing::subscriber::with_default(subscriber(DEFAULT_LOG_FILTER, writer), f)
}

/// Answers one JSON request per input line until `input` ends.
///
/// Blank lines are skipped. Returns how many requests were handled.
pub fn serve<R, W>(app: &AppState, input: R, mut output: W) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = commands::handle_line(app, &line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }

    info!(requests = handled, "Input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use serde_json::Value;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_load_is_logged_at_startup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recently_viewed_limit = 4").unwrap();

        let buffer = Arc::new(Mutex::new(Vec::new()));
        let make_writer = {
            let buf = buffer.clone();
            move || Capture(buf.clone())
        };
        let path = file.path().to_path_buf();
        let config = with_startup_logging(make_writer, || AppConfig::load(Some(path))).unwrap();
        assert_eq!(config.recently_viewed_limit, 4);

        let log = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(
            log.contains("Loading storefront config from file"),
            "expected config log, got: {}",
            log
        );
    }

    #[test]
    fn test_serve_answers_each_line() {
        let app = AppState::default();
        let input = Cursor::new(
            "{\"id\":1,\"command\":\"add_to_cart\",\"args\":{\"productId\":5}}\n\
             \n\
             {\"id\":2,\"command\":\"get_cart\"}\n",
        );
        let mut output = Vec::new();

        let handled = serve(&app, input, &mut output).unwrap();
        assert_eq!(handled, 2);

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["id"], 2);
        assert_eq!(lines[1]["data"]["total"], 350_000);
    }
}
