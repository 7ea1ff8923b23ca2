use std::path::PathBuf;

use eframe::egui;

mod app;
mod ui;

use app::MoodMapApp;

fn main() {
    env_logger::init();

    // Optional override for the bundled region CSV.
    let csv_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DeliMood",
        options,
        Box::new(move |cc| {
            // Load a CJK-capable font so Korean region names render
            let mut fonts = egui::FontDefinitions::default();
            let font_paths = [
                "/System/Library/Fonts/AppleSDGothicNeo.ttc",
                "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
                "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            ];
            for path in &font_paths {
                if let Ok(data) = std::fs::read(path) {
                    fonts
                        .font_data
                        .insert("korean".to_owned(), egui::FontData::from_owned(data));
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Proportional)
                        .unwrap()
                        .push("korean".to_owned());
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Monospace)
                        .unwrap()
                        .push("korean".to_owned());
                    break;
                }
            }
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(MoodMapApp::new(csv_path)))
        }),
    )
    .expect("Failed to start DeliMood");
}
