//! Selector strip for `MoodMapApp`.
//!
//! Three cascading ComboBoxes (city → district → neighborhood) plus the
//! guidance line underneath. Children stay disabled until their parent has
//! a selection.

use eframe::egui;

use super::MoodMapApp;

impl MoodMapApp {
    /// Render the cascading region selectors.
    pub fn draw_selectors(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let width = (ui.available_width() - 24.0) / 3.0;
            let loading = self.loading;

            // 시/도
            let mut city = self.selected_city.clone();
            ui.add_enabled_ui(!loading, |ui| {
                egui::ComboBox::from_id_salt("city")
                    .width(width)
                    .selected_text(if loading {
                        "로딩중...".to_string()
                    } else if city.is_empty() {
                        "시/도".to_string()
                    } else {
                        city.clone()
                    })
                    .show_ui(ui, |ui| {
                        for name in &self.city_list {
                            ui.selectable_value(&mut city, name.clone(), name);
                        }
                    });
            });

            // 시/군/구
            let mut district = self.selected_district.clone();
            ui.add_enabled_ui(!loading && !self.selected_city.is_empty(), |ui| {
                egui::ComboBox::from_id_salt("district")
                    .width(width)
                    .selected_text(if district.is_empty() {
                        "시/군/구".to_string()
                    } else {
                        district.clone()
                    })
                    .show_ui(ui, |ui| {
                        for name in &self.district_list {
                            ui.selectable_value(&mut district, name.clone(), name);
                        }
                    });
            });

            // 읍/면/동
            let mut neighborhood = self.selected_neighborhood.clone();
            ui.add_enabled_ui(!loading && !self.selected_district.is_empty(), |ui| {
                egui::ComboBox::from_id_salt("neighborhood")
                    .width(width)
                    .selected_text(if neighborhood.is_empty() {
                        "읍/면/동".to_string()
                    } else {
                        neighborhood.clone()
                    })
                    .show_ui(ui, |ui| {
                        for name in &self.neighborhood_list {
                            ui.selectable_value(&mut neighborhood, name.clone(), name);
                        }
                    });
            });

            // At most one box changes per frame; applying a parent change
            // first keeps the stale child values from clobbering the
            // cascade rebuild.
            if !loading {
                if city != self.selected_city {
                    self.set_city(city);
                } else if district != self.selected_district {
                    self.set_district(district);
                } else if neighborhood != self.selected_neighborhood {
                    self.set_neighborhood(neighborhood);
                }
            }
        });
    }

    /// One-line prompt under the selectors.
    pub fn draw_guidance(&self, ui: &mut egui::Ui) {
        let text = if self.loading {
            "지역 정보를 불러오는 중입니다...".to_string()
        } else if !self.selected_neighborhood.is_empty() {
            format!(
                "{}에서 어떤 분위기의 맛집을 찾으세요?",
                self.selected_neighborhood
            )
        } else {
            "먼저 지역(읍/면/동)을 선택해주세요.".to_string()
        };

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(100)));
        });
    }
}
