use eframe::egui;

use crate::{
    core::InputId,
    persistence::KeyValueStore,
    presenter::Presenter,
};

const INPUT_WIDTH: f32 = 220.0;

pub struct InputForm;

impl InputForm {
    /// Draws the five fields. Every edit is saved right away; the returned
    /// flag reports whether Enter was pressed in one of them.
    pub fn show<S: KeyValueStore>(ui: &mut egui::Ui, presenter: &mut Presenter<S>) -> bool {
        let mut submitted = false;

        egui::Grid::new("inputs").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            for id in InputId::ALL {
                ui.label(id.label());
                let response = ui.add(
                    egui::TextEdit::singleline(presenter.input_mut(id))
                        .id_salt(id.as_str())
                        .hint_text(id.hint())
                        .desired_width(INPUT_WIDTH),
                );
                if response.changed() {
                    presenter.input_changed(id);
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.end_row();
            }
        });

        submitted
    }
}
