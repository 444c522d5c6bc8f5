//! Moneyness Explorer GUI
//!
//! Sliders for spot, strike and time to maturity, a call/put selector, the
//! value readout and the payoff curve with the current spot highlighted.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points};
use tracing::{error, info, warn};

use moneyness_explorer::prelude::*;

struct ExplorerApp {
    engine: MoneynessEngine,
}

impl ExplorerApp {
    fn new(engine: MoneynessEngine) -> Self {
        Self { engine }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let inputs = *self.engine.inputs();

        ui.heading("Option Moneyness Explorer");
        ui.separator();

        let mut spot = inputs.spot;
        if ui
            .add(
                egui::Slider::new(&mut spot, MIN_PRICE..=MAX_PRICE)
                    .step_by(1.0)
                    .text("Spot Price (S)"),
            )
            .changed()
        {
            if let Err(e) = self.engine.set_spot(spot) {
                warn!("spot slider: {e}");
            }
        }

        let mut strike = inputs.strike;
        if ui
            .add(
                egui::Slider::new(&mut strike, MIN_PRICE..=MAX_PRICE)
                    .step_by(1.0)
                    .text("Exercise Price (X)"),
            )
            .changed()
        {
            if let Err(e) = self.engine.set_strike(strike) {
                warn!("strike slider: {e}");
            }
        }

        let mut maturity = inputs.time_to_maturity;
        if ui
            .add(
                egui::Slider::new(&mut maturity, MIN_MATURITY..=MAX_MATURITY)
                    .step_by(0.01)
                    .fixed_decimals(2)
                    .text("Time to Maturity (T)"),
            )
            .changed()
        {
            if let Err(e) = self.engine.set_time_to_maturity(maturity) {
                warn!("maturity slider: {e}");
            }
        }

        ui.add_space(8.0);

        let mut option_type = inputs.option_type;
        egui::ComboBox::from_label("Option Type")
            .selected_text(option_type.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut option_type, OptionType::Call, "Call");
                ui.selectable_value(&mut option_type, OptionType::Put, "Put");
            });
        if option_type != inputs.option_type {
            self.engine.set_option_type(option_type);
        }
    }

    fn info_box(&self, ui: &mut egui::Ui, readout: &Readout) {
        egui::Frame::group(ui.style())
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&readout.moneyness).strong().monospace());
                ui.label(
                    egui::RichText::new(format!("Intrinsic Value: {}", readout.intrinsic_value))
                        .monospace(),
                );
                ui.label(egui::RichText::new(&readout.formula).monospace());
            });
    }

    fn output_box(&self, ui: &mut egui::Ui, readout: &Readout) {
        let accent = to_color32(self.engine.color());
        egui::Frame::none()
            .fill(accent)
            .rounding(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let text = |s: String| egui::RichText::new(s).color(egui::Color32::BLACK);
                ui.label(text(format!("Time Value: {}", readout.time_value)));
                ui.label(text(format!("Total Option Value: {}", readout.total_value)));
                ui.label(text(format!("Moneyness: {}", readout.moneyness)));
            });
    }

    fn payoff_chart(&self, ui: &mut egui::Ui) {
        let series = self.engine.payoff_series();
        let (min, max) = series.chart_bounds();
        // Spot outside the window is not drawn
        let marker = self.engine.visible_marker();
        let marker_name = format!("Spot ({})", self.engine.moneyness().short_label());

        Plot::new("payoff_curve")
            .view_aspect(2.5)
            .x_axis_label("Exercise Price (X)")
            .y_axis_label("Payoff")
            .legend(egui_plot::Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));

                plot_ui.line(
                    Line::new(PlotPoints::new(series.xy()))
                        .name("Payoff")
                        .color(to_color32(DisplayColor::PAYOFF_LINE))
                        .width(2.0),
                );

                if let Some(marker) = marker {
                    plot_ui.points(
                        Points::new(vec![marker.xy()])
                            .name(marker_name)
                            .radius(6.0)
                            .filled(true)
                            .color(to_color32(DisplayColor::SPOT_MARKER)),
                    );
                }
            });
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .min_width(280.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            // Recomputed every frame from the current inputs
            let readout = self.engine.readout();

            self.info_box(ui, &readout);
            ui.add_space(12.0);
            self.output_box(ui, &readout);
            ui.add_space(24.0);
            self.payoff_chart(ui);
        });
    }
}

fn to_color32(color: DisplayColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn main() -> eframe::Result<()> {
    let config = match ExplorerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            init_tracing("info");
            error!("config error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    let engine = match MoneynessEngine::with_inputs(config.initial) {
        Ok(engine) => engine,
        Err(e) => {
            error!("initial inputs: {e}");
            std::process::exit(1);
        }
    };
    info!(inputs = ?engine.inputs(), "starting explorer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.width, config.gui.height])
            .with_title(config.gui.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Moneyness Explorer",
        options,
        Box::new(|_cc| Box::new(ExplorerApp::new(engine))),
    )
}
