use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod analysis;
mod api;
mod cli;
mod core;
mod generators;
mod models;
mod ui;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::cli::render::render_state;
use crate::core::config::Config;
use crate::ui::{Controller, ControllerOptions, HttpBackend, JsonFileStore, MemoryStore, PreferenceStore, SystemClipboard};

fn init_logging(config: &Config) -> io::Result<()> {
    config.ensure_directories_exist();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .target(env_logger::Target::Pipe(Box::new(
            std::fs::File::create(&config.log_file)?
        )))
        .init();

    Ok(())
}

fn build_controller(
    config: &Config,
) -> io::Result<(Controller, tokio::sync::mpsc::UnboundedReceiver<ui::UiEvent>)> {
    let backend = HttpBackend::new(config.backend_url.clone(), config.backend_timeout).map_err(|e| {
        log::error!("Failed to build HTTP client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    let store: Box<dyn PreferenceStore> = match &config.preferences_file {
        Some(path) => Box::new(JsonFileStore::new(path.clone())),
        None => {
            log::warn!("No preferences location available, theme will not persist");
            Box::new(MemoryStore::new())
        }
    };

    Ok(Controller::new(
        Arc::new(backend),
        store,
        Box::new(SystemClipboard::new()),
        ControllerOptions {
            toast_duration: config.toast_duration,
            discard_stale_responses: config.discard_stale_responses,
        },
    ))
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    args.apply_to(&mut config);

    init_logging(&config)?;
    log::info!("🔐 Starting passmeter");
    log::debug!("Loaded config: {:?}", config);

    // One-shot commands talk to an already running backend
    if let Some(command) = &args.command {
        let (controller, events) = build_controller(&config)?;
        let state = match command {
            CliCommand::Check { password } => {
                cli::handlers::handle_check(controller, events, password.clone()).await
            }
            CliCommand::Generate => cli::handlers::handle_generate(controller, events).await,
        };
        println!("{}", render_state(&state));
        return Ok(());
    }

    // API-only mode (blocks until shutdown)
    if args.api_only {
        log::info!("🔒 API-only mode active. Interactive meter disabled.");
        println!("🚀 API server listening on {}:{}", config.web_address, config.web_port);
        return api::start_server(config).await.map_err(|e| {
            log::error!("API server failed: {}", e);
            e
        });
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        if let Err(e) = ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Initiating shutdown...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            std::process::exit(0);
        }) {
            log::warn!("Failed to set Ctrl+C handler: {}", e);
        }
    }

    // Start API server in background (using a separate thread for Actix)
    if !args.no_api {
        let server_config = config.clone();
        std::thread::spawn(move || {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => {
                    rt.block_on(async {
                        match api::start_server(server_config).await {
                            Ok(_) => log::info!("API server shut down gracefully"),
                            Err(e) => {
                                eprintln!("❌ API server error: {}", e);
                                log::error!("API server error: {:?}", e);
                            }
                        }
                    });
                }
                Err(e) => log::error!("Failed to create tokio runtime: {:?}", e),
            }
        });
        println!("🚀 API server started on port {}", config.web_port);
    }

    let (controller, events) = build_controller(&config)?;
    cli::menu::run_meter_menu(controller, events, should_exit).await.map_err(|e| {
        log::error!("Meter error: {:?}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ passmeter shutdown complete.");
    Ok(())
}
