use eframe::egui;

use crate::core::ShareMathError;

#[derive(Default)]
pub struct ErrorModal {
    open: bool,
    title: String,
    details: Option<String>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, title: impl Into<String>, error: &ShareMathError) {
        self.title = title.into();
        self.details = Some(error.to_string());
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&self.title).size(18.0).strong());
            });

            if let Some(details) = &self.details {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(details).weak());
            }

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.details = None;
        }
    }
}
