// Year Grid demo application
// Hosts the year grid widget in an eframe window.

use anyhow::Context;
use chrono::Datelike;
use year_grid::ui_egui::hit_test::GestureEvent;
use year_grid::{YearConfig, YearView};

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Year Grid demo");

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("falling back to default configuration: {err:#}");
            demo_config()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 980.0])
            .with_min_inner_size([480.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Year Grid",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(config)))),
    )
}

/// Load the widget configuration from the TOML file given as the first
/// command line argument, if any.
fn load_config() -> anyhow::Result<YearConfig> {
    let path = std::env::args()
        .nth(1)
        .context("no configuration file argument")?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading configuration file {path}"))?;
    let config: YearConfig =
        toml::from_str(&text).with_context(|| format!("parsing {path}"))?;
    log::info!("loaded configuration from {path}");
    Ok(config)
}

/// Configuration used when no file is supplied: current year, Monday
/// first, Saturday/Sunday weekends, sticky selection on.
fn demo_config() -> YearConfig {
    use egui::Color32;
    use year_grid::FontStyle;

    let mut config = YearConfig {
        year: chrono::Local::now().year(),
        rows: 4,
        columns: 3,
        weekend_days: vec![6, 7],
        sticky_day_selection: true,
        ..YearConfig::default()
    };
    config.month_name.color = Color32::from_rgb(40, 80, 160);
    config.month_name.font_style = FontStyle::Bold;
    config.month_name.size = 13.0;
    config.today_month_name = config.month_name.clone();
    config.today_month_name.color = Color32::from_rgb(200, 60, 60);
    config.day_name.color = Color32::from_rgb(100, 100, 100);
    config.weekend_day.color = Color32::from_rgb(170, 80, 80);
    config.simple_day.color = Color32::from_rgb(40, 40, 40);
    config
}

struct DemoApp {
    view: YearView,
    last_event: String,
}

impl DemoApp {
    fn new(config: YearConfig) -> Self {
        Self {
            view: YearView::new(config),
            last_event: String::from("no gesture yet"),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.view.set_year(self.view.year() - 1);
                }
                ui.heading(self.view.year().to_string());
                if ui.button("▶").clicked() {
                    self.view.set_year(self.view.year() + 1);
                }
                ui.separator();
                ui.label(&self.last_event);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let result = self.view.show(ui);
            if let Some(event) = result.event {
                self.last_event = match event {
                    GestureEvent::MonthClick(at) => format!("month clicked: {}", at.date()),
                    GestureEvent::MonthLongClick(at) => {
                        format!("month long-pressed: {}", at.date())
                    }
                    GestureEvent::DayClick(at) => format!("day clicked: {}", at.date()),
                    GestureEvent::DayLongClick(at) => format!("day long-pressed: {}", at.date()),
                };
                log::debug!("{}", self.last_event);
            }
        });
    }
}
