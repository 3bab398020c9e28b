use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::core::ResultSet;

const TABLE_LABEL_COLUMN_WIDTH: f32 = 300.0;
const TABLE_ROW_HEIGHT: f32 = 22.0;
const EXPLANATION_ROW_HEIGHT: f32 = 96.0;

pub struct ResultsTableWidget;

impl ResultsTableWidget {
    pub fn show(ui: &mut egui::Ui, results: Option<&ResultSet>) {
        let Some(results) = results else {
            ui.label(egui::RichText::new("Fill in all five fields to see results.").weak());
            return;
        };

        TableBuilder::new(ui)
            .id_salt("results")
            .striped(true)
            .cell_layout(egui::Layout::top_down(egui::Align::LEFT))
            .column(Column::initial(TABLE_LABEL_COLUMN_WIDTH).at_least(200.0))
            .column(Column::remainder())
            .body(|mut body| {
                for row in results {
                    let d = row.descriptor;
                    let height = match (d.explanation, d.sub_description) {
                        (Some(_), _) => EXPLANATION_ROW_HEIGHT,
                        (None, Some(_)) => TABLE_ROW_HEIGHT * 2.0,
                        (None, None) => TABLE_ROW_HEIGHT,
                    };

                    body.row(height, |mut table_row| {
                        table_row.col(|ui| {
                            ui.strong(d.description);
                            if let Some(sub) = d.sub_description {
                                ui.label(egui::RichText::new(format!("({sub})")).weak());
                            }
                        });
                        table_row.col(|ui| {
                            let text = egui::RichText::new(row.formatted()).monospace();
                            if row.value < 0.0 {
                                ui.label(text.color(ui.visuals().error_fg_color));
                            } else {
                                ui.label(text);
                            }
                            if let Some(explanation) = d.explanation {
                                ui.add(egui::Label::new(egui::RichText::new(explanation).small()).wrap());
                            }
                        });
                    });
                }
            });
    }
}
