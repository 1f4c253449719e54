use std::sync::Arc;

use bank_terminal::core::ClientConfig;
use bank_terminal::services::api::ApiClient;
use bank_terminal::services::session::FileSessionStore;
use bank_terminal::ui::theme::Theme;
use bank_terminal::ui::widgets::notifications::NotificationManager;
use bank_terminal::{debug, ui, App};

const WINDOW_TITLE: &str = "Bank Terminal";

/// eframe wrapper: drains async results, then draws the current page
struct BankApp {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for BankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);
    }
}

fn main() -> eframe::Result<()> {
    let _log_guard = debug::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, falling back to defaults");
            ClientConfig::default()
        }
    };
    tracing::info!(api_url = %config.resolved_api_url(), session = %config.session_path.display(), "Starting bank terminal");

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            std::process::exit(1);
        }
    };
    // Handlers spawn onto this runtime from the UI thread
    let _runtime_guard = runtime.enter();

    let api = Arc::new(ApiClient::new(&config));
    let session = Arc::new(FileSessionStore::new(config.session_path.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Theme::apply_bank_theme(&cc.egui_ctx);
            Ok(Box::new(BankApp {
                app: App::new(api, session),
                notifications: NotificationManager::new(),
            }))
        }),
    )
}
