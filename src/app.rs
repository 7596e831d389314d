use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EuroDashApp {
    pub state: AppState,
}

impl EuroDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for EuroDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the two linked charts with their controls ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::scatter_controls(ui, &mut self.state);
                    let scatter = self.state.scatter_chart();
                    plot::scatter_chart(ui, &scatter, &self.state.geo_colors);
                    panels::year_slider(ui, &mut self.state);

                    ui.separator();

                    panels::country_controls(ui, &mut self.state);
                    let line = self.state.country_chart();
                    plot::country_chart(ui, &line, &self.state.geo_colors);
                });
        });
    }
}
