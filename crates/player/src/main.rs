//! CURP Generator - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curpgen_player::infrastructure::http_client::ApiAdapter;
use curpgen_player::ports::outbound::RawApiPort;
use curpgen_player::{ClientConfig, CurpService, FormController};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curpgen_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting CURP Generator");

    // Configuration
    let config = ClientConfig::from_env();
    tracing::info!(
        endpoint = config.endpoint(),
        timeout = ?config.request_timeout(),
        "Code-generation service configured"
    );

    // HTTP
    let api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(config.request_timeout()));
    let controller = FormController::new(CurpService::new(api, config));

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_form_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(controller)
        .launch(curpgen_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_form_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/curp_form.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
