use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use wordfinder::core::config::{self, CliOverrides, EnvOverrides};
use wordfinder::core::{SessionController, StoreError, WordStore};
use wordfinder::notify::{self, NotificationSink, NotifyKind};
use wordfinder::tui;

#[derive(Parser)]
#[command(
    name = "wordfinder",
    about = "Find the longest unused word containing a 2-4 letter pattern"
)]
struct Args {
    /// Word list file, one entry per line
    word_list: Option<PathBuf>,

    /// Webhook URL that receives a "[KIND] message" post for every action
    #[arg(short, long)]
    webhook: Option<String>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Give in-flight notifications up to `deadline` to land before the runtime
/// shuts down and cancels them.
async fn flush_notifications(sink: &dyn NotificationSink, deadline: Duration) {
    if tokio::time::timeout(deadline, sink.flush()).await.is_err() {
        log::warn!("Gave up on pending notifications after {:?}", deadline);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        config::WordfinderConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        EnvOverrides::from_env(),
        CliOverrides {
            word_list: args.word_list,
            webhook_url: args.webhook,
            log_file: args.log_file,
        },
    );

    // Terminal UI owns stdout, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Wordfinder starting up: {:?}", resolved);

    let sink: Arc<dyn NotificationSink> =
        Arc::from(notify::sink_for(resolved.webhook_url.as_deref(), resolved.notify_timeout));
    let code = run(resolved.word_list, Arc::clone(&sink));
    flush_notifications(sink.as_ref(), resolved.notify_timeout).await;
    code
}

fn run(word_list: Option<PathBuf>, sink: Arc<dyn NotificationSink>) -> ExitCode {
    let Some(path) = word_list else {
        log::error!("No word list given");
        sink.notify(NotifyKind::Error, "No file selected.");
        eprintln!("Error: No file selected. Pass a word list path or set {}.", config::ENV_WORD_LIST);
        return ExitCode::FAILURE;
    };

    let store = match WordStore::load(&path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load word list: {}", e);
            if let StoreError::NotFound(p) = &e {
                sink.notify(NotifyKind::Error, &format!("File not found: {}", p.display()));
            }
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let session = match SessionController::new(store, Box::new(sink)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
