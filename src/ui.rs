//! Stateless drawing helpers for mood-tag badges.

use eframe::egui;

use delimood::map::style::Rgb;
use delimood::map::PlacedTag;

/// Font size for a badge label: proportional to the radius, 10 px floor.
pub fn tag_font_size(radius: f32) -> f32 {
    (radius * 0.35).max(10.0)
}

/// Convert a palette RGB triple to an egui color with `alpha` in [0, 1].
pub fn fade(rgb: Rgb, alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

/// Paint one badge: filled circle, name, frequency, selection ring.
pub fn draw_mood_tag(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    placed: &PlacedTag,
    alpha: f32,
    selected: bool,
) {
    painter.circle_filled(center, radius, fade(placed.style.fill, alpha));

    if selected {
        painter.circle_stroke(
            center,
            radius + 3.0,
            egui::Stroke::new(2.0, egui::Color32::from_rgb(249, 115, 22)),
        );
    }

    let font = tag_font_size(radius);
    painter.text(
        center - egui::vec2(0.0, font * 0.45),
        egui::Align2::CENTER_CENTER,
        &placed.tag.name,
        egui::FontId::proportional(font),
        fade(placed.style.text, alpha),
    );
    painter.text(
        center + egui::vec2(0.0, font * 0.65),
        egui::Align2::CENTER_CENTER,
        format!("({})", placed.tag.frequency),
        egui::FontId::proportional(font * 0.7),
        fade(placed.style.text, alpha * 0.8),
    );
}
