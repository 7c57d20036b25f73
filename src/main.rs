//! Native entry point: CLI parsing, logging, window creation.

use clap::Parser;
use eframe::egui;

use goldberg::app::MachineApp;
use goldberg::config::SceneConfig;

/// Interactive spring-launched Rube Goldberg machine.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Path to a scene layout JSON file; defaults to the built-in layout.
    #[arg(short, long)]
    scene: Option<std::path::PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("goldberg=info")),
        )
        .init();

    let args = CliArgs::parse();
    let config = match &args.scene {
        None => SceneConfig::default(),
        Some(path) => match SceneConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
    };
    tracing::info!(layout = %config.name, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 860.0])
            .with_title("Goldberg Machine"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Goldberg Machine",
        options,
        Box::new(move |cc| Ok(Box::new(MachineApp::new(cc, config)))),
    )
}
