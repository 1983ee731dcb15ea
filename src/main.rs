// Breach Estimator GUI - Main Entry Point
// Native desktop client for the data-breach cost estimator

use std::future::Future;
use std::sync::Arc;

use breach_estimator_gui::api::HttpBreachApi;
use breach_estimator_gui::config::Config;
use breach_estimator_gui::controller::Controller;
use breach_estimator_gui::ui::{render_app_layout, UiAction};
use eframe::egui;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Network calls run here; the UI thread only renders
    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?,
    );

    let api = Arc::new(HttpBreachApi::new(config.api.base_url.clone()));
    let controller = Controller::new(api);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size),
        ..Default::default()
    };

    info!(backend = %config.api.base_url, "Starting UI");

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| Box::new(BreachEstimatorApp::new(controller, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated with error: {}", e))
}

/// Main application struct
/// Renders the page state and hands user actions to the controller
struct BreachEstimatorApp {
    /// Owns the page state and the backend client
    controller: Controller,
    /// Runtime the backend requests are spawned on
    runtime: Arc<tokio::runtime::Runtime>,
}

impl BreachEstimatorApp {
    fn new(controller: Controller, runtime: Arc<tokio::runtime::Runtime>) -> Self {
        Self {
            controller,
            runtime,
        }
    }

    /// Run the async half of an action, repainting once it lands
    fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            task.await;
            ctx.request_repaint();
        });
    }

    /// Apply one user action: synchronous step now, request in the background
    fn dispatch(&self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::Calculate => {
                if let Some(request) = self.controller.prepare_calculation() {
                    let controller = self.controller.clone();
                    self.spawn(ctx, async move {
                        controller.complete_calculation(request).await;
                    });
                }
            }
            UiAction::FetchRecommendations => {
                if let Some(request) = self.controller.prepare_recommendations() {
                    let controller = self.controller.clone();
                    self.spawn(ctx, async move {
                        controller.complete_recommendations(request).await;
                    });
                }
            }
            UiAction::SendChat(message) => {
                if let Some(request) = self.controller.prepare_chat(&message) {
                    let controller = self.controller.clone();
                    self.spawn(ctx, async move {
                        controller.complete_chat(request).await;
                    });
                }
            }
            UiAction::DismissAlert => self.controller.dismiss_alert(),
        }
    }
}

impl eframe::App for BreachEstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = {
            let mut state = self.controller.lock();
            render_app_layout(ctx, &mut state)
        };

        for action in actions {
            self.dispatch(ctx, action);
        }
    }
}
