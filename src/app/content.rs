//! Mood-map panel and find-matches bar for `MoodMapApp`.
//!
//! The panel paints the faded neighborhood label in the center-avoidance
//! zone, then the placed badges on top (low frequencies first so higher
//! frequencies win overlaps in z-order; the selected badge paints last).
//! Sentineled tags are skipped by the painter but stay in `self.placed`.

use eframe::egui;

use crate::ui::draw_mood_tag;
use super::{MoodMapApp, RESIZE_DEBOUNCE_MS};

/// Seconds a badge takes to fade in after its per-tag delay.
const FADE_IN_SECS: f32 = 0.5;

impl MoodMapApp {
    /// Render the mood-map panel.
    pub fn draw_map(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let size = ui.available_size();

        // Debounce resize-triggered recomputation instead of chasing every
        // intermediate layout step.
        if (size - self.map_size).length() > 0.5 {
            self.map_size = size;
            self.request_recompute(RESIZE_DEBOUNCE_MS);
        }

        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        if self.loading {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "지역 정보 로딩 중...",
                egui::FontId::proportional(14.0),
                egui::Color32::GRAY,
            );
            return;
        }

        if self.selected_neighborhood.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "먼저 지역(읍/면/동)을 선택해주세요.",
                egui::FontId::proportional(14.0),
                egui::Color32::GRAY,
            );
            return;
        }

        // Faded neighborhood label in the center-avoidance zone
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.selected_neighborhood,
            egui::FontId::proportional(48.0),
            egui::Color32::from_gray(210),
        );

        if self.placed.is_empty() {
            if self.recompute_at.is_none() {
                painter.text(
                    egui::pos2(rect.center().x, rect.top() + 60.0),
                    egui::Align2::CENTER_CENTER,
                    "선택된 지역에는 아직 데이터가 없어요 😅",
                    egui::FontId::proportional(13.0),
                    egui::Color32::GRAY,
                );
            }
            return;
        }

        let elapsed = self
            .placed_at
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(FADE_IN_SECS);
        let mut animating = false;
        let mut clicked: Option<String> = None;

        // `placed` is in descending frequency order; reverse so high
        // frequencies paint on top, then move the selection last.
        let mut order: Vec<usize> = (0..self.placed.len()).rev().collect();
        if let Some(selected) = self.selected_tag.as_deref() {
            if let Some(pos) = order
                .iter()
                .position(|&i| self.placed[i].tag.name == selected)
            {
                let idx = order.remove(pos);
                order.push(idx);
            }
        }

        for i in order {
            let placed = &self.placed[i];
            if !placed.is_visible() {
                continue;
            }

            let alpha = ((elapsed - placed.style.delay) / FADE_IN_SECS).clamp(0.0, 1.0);
            if alpha < 1.0 {
                animating = true;
            }

            let selected = self.selected_tag.as_deref() == Some(placed.tag.name.as_str());
            let center = rect.min + egui::vec2(placed.circle.x, placed.circle.y);
            // Scale in with the fade; the selected badge sits 10% larger
            let radius =
                placed.circle.radius * (0.8 + 0.2 * alpha) * if selected { 1.1 } else { 1.0 };

            draw_mood_tag(&painter, center, radius, placed, alpha, selected);

            let hit = egui::Rect::from_center_size(center, egui::vec2(radius, radius) * 2.0);
            let response = ui.interact(
                hit.intersect(rect),
                ui.id().with(("mood_tag", i)),
                egui::Sense::click(),
            );
            if response.clicked() {
                clicked = Some(placed.tag.name.clone());
            }
        }

        if let Some(name) = clicked {
            // Clicking the selected badge deselects it
            self.selected_tag = if self.selected_tag.as_deref() == Some(name.as_str()) {
                None
            } else {
                Some(name)
            };
        }

        if animating {
            ctx.request_repaint();
        }
    }

    /// Render the bottom action bar. The button only arms when both a
    /// neighborhood and a tag are selected.
    pub fn draw_find_bar(&mut self, ui: &mut egui::Ui) {
        let ready = !self.loading
            && !self.selected_neighborhood.is_empty()
            && self.selected_tag.is_some();

        let label = if self.loading {
            "로딩 중...".to_string()
        } else if let Some(tag) = self.selected_tag.as_deref() {
            format!("'{tag}' 맛집 찾기")
        } else {
            "지역과 기분 태그를 선택하세요".to_string()
        };

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(egui::RichText::new(label).strong())
                .min_size(egui::vec2(ui.available_width() - 16.0, 36.0));
            if ui.add_enabled(ready, button).clicked() {
                self.find_matches();
            }

            if let Some((neighborhood, tag)) = &self.last_search {
                ui.add_space(2.0);
                ui.label(
                    egui::RichText::new(format!("{neighborhood} · '{tag}' 검색 요청됨"))
                        .small()
                        .color(egui::Color32::GRAY),
                );
            }
        });
    }

    /// Fire the find-matches request. Downstream restaurant search is out
    /// of scope, so the request is logged and surfaced as a status line.
    pub fn find_matches(&mut self) {
        if let Some(tag) = self.selected_tag.clone() {
            if !self.selected_neighborhood.is_empty() {
                log::info!(
                    "find request: {} / {}",
                    self.selected_neighborhood,
                    tag
                );
                self.last_search = Some((self.selected_neighborhood.clone(), tag));
            }
        }
    }
}
