use std::{
    fs,
    path::Path,
};

use eframe::egui::{
    self,
    containers,
};
use tracing::{
    info,
    warn,
};

use super::{
    error_modal::ErrorModal,
    input_form::InputForm,
    results_table::ResultsTableWidget,
    settings::SettingsData,
};
use crate::{
    core::{
        HtmlFragment,
        ShareMathError,
    },
    persistence::JsonFileStore,
    presenter::Presenter,
};

pub struct ShareMathApp {
    presenter: Presenter<JsonFileStore>,
    // The "results" surface; mirrors what the table shows
    results: HtmlFragment,
    settings: SettingsData,
    error_modal: ErrorModal,
}

impl ShareMathApp {
    /// eframe only calls this once the window and context exist, so saved
    /// inputs are restored and calculated against a ready UI.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsData) -> Self {
        let mut results = HtmlFragment::new();
        let presenter = Presenter::init(JsonFileStore::open_default(), &mut results);

        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.set_zoom_factor(settings.zoom);

        Self { presenter, results, settings, error_modal: ErrorModal::new() }
    }

    fn calculate(&mut self) {
        self.presenter.calculate(&mut self.results);
    }

    fn export_html(&mut self) {
        if self.results.is_empty() {
            let error = ShareMathError::Custom("There are no results to export yet".to_string());
            self.error_modal.show_error("Nothing to export", &error);
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html", "htm"])
            .set_file_name("share-math-results.html")
            .save_file()
        else {
            return;
        };

        match write_fragment(&path, self.results.as_str()) {
            Ok(()) => info!("Exported results to {}", path.display()),
            Err(e) => {
                warn!("Failed to export results to {}: {}", path.display(), e);
                self.error_modal.show_error("Export failed", &e);
            }
        }
    }

    /// Persists theme and zoom when the user changed either this frame.
    fn sync_settings(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        let zoom = ctx.zoom_factor();
        if dark_mode == self.settings.dark_mode && zoom == self.settings.zoom {
            return;
        }

        self.settings.dark_mode = dark_mode;
        self.settings.zoom = zoom;
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Export HTML…").clicked() {
                        self.export_html();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }
}

fn write_fragment(path: &Path, fragment: &str) -> Result<(), ShareMathError> {
    fs::write(path, fragment)?;
    Ok(())
}

impl eframe::App for ShareMathApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Share Math");
            ui.add_space(8.0);

            let submitted = InputForm::show(ui, &mut self.presenter);

            ui.add_space(8.0);
            let mut calculate = submitted;
            ui.horizontal(|ui| {
                calculate |= ui.add(egui::Button::new("Calculate")).clicked();
                if ui.button("Clear").clicked() {
                    self.presenter.clear_inputs();
                    calculate = true;
                }
                let has_results = !self.results.is_empty();
                if ui.add_enabled(has_results, egui::Button::new("Copy as HTML")).clicked() {
                    ctx.copy_text(self.results.as_str().to_string());
                }
            });
            if calculate {
                self.calculate();
            }

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ResultsTableWidget::show(ui, self.presenter.results());
            });
        });

        self.error_modal.show(ctx);
        self.sync_settings(ctx);
    }
}
