//! GUI runner - launches the dashboard window
//!
//! eframe owns the main thread. Backend calls and polling run on a
//! multi-threaded tokio runtime that lives for the whole window lifetime.

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::DashboardApp;
use crate::api::HttpBackend;
use crate::config::Config;
use crate::confirm::PromptConfirmer;
use crate::dashboard::Dashboard;
use crate::scheduler::PollingScheduler;
use crate::session::SessionId;

/// Run the dashboard window until it is closed
pub fn run_gui(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("echodeck-worker")
        .build()?;

    let backend = Arc::new(HttpBackend::new(&config.server));
    let (confirmer, prompts) = PromptConfirmer::channel();
    let session = SessionId::load_or_create(&SessionId::default_path());
    info!(
        "[echodeck] Starting dashboard against {} (session {})",
        backend.base_url(),
        session
    );

    let dashboard = Dashboard::new(backend, Arc::new(confirmer), session);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Echo Deck")
            .with_inner_size([config.gui.width, config.gui.height])
            .with_min_inner_size([800.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    let polling = config.polling.clone();

    eframe::run_native(
        "echodeck",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let scheduler = {
                let _enter = handle.enter();
                PollingScheduler::new(dashboard.clone(), polling)
                    .on_change(move || ctx.request_repaint())
                    .spawn()
            };
            Ok(Box::new(DashboardApp::new(
                dashboard, handle, scheduler, prompts,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    // Cancels any in-flight fetches
    runtime.shutdown_background();
    Ok(())
}
