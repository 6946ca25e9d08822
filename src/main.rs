#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(820., 860.))
            .with_min_inner_size(vec2(320., 360.)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(quadlife::App::new()?))),
    )
    .unwrap();
}
