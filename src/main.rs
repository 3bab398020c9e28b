use eframe::egui;
use share_math::{
    gui::{
        SettingsData,
        ShareMathApp,
    },
    logging,
};

fn main() -> eframe::Result {
    let settings = SettingsData::load();
    logging::init_with_config(&settings.logging);
    tracing::info!("Starting share-math");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Share Math")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Share Math",
        options,
        Box::new(|cc| Ok(Box::new(ShareMathApp::new(cc, settings)))),
    )
}
