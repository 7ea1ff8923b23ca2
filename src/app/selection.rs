//! Region loading and cascade-selection methods for `MoodMapApp`.
//!
//! Covers the background CSV load (`start_region_load` / `check_region_load`),
//! the city → district → neighborhood cascade, and the debounced placement
//! recompute. Recomputation always replaces the whole placement output;
//! nothing is merged or reused across runs.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui;

use delimood::map::placement::{place_tags, PlacementParams};
use delimood::map::Canvas;
use delimood::region;
use delimood::tags;

use super::{MoodMapApp, SELECT_DEBOUNCE_MS};

/// Keep `prev` if the new list still contains it, otherwise fall back to
/// the first entry (or clear when the list is empty).
pub fn retain_or_first(prev: &str, list: &[String]) -> String {
    if list.iter().any(|s| s == prev) {
        prev.to_string()
    } else {
        list.first().cloned().unwrap_or_default()
    }
}

impl MoodMapApp {
    /// Start loading the region CSV on a background thread.
    pub fn start_region_load(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel();
        self.region_rx = Some(rx);

        let path = self.csv_path.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let table = region::parser::load_regions(path.as_deref());
            let _ = tx.send(table);
            ctx.request_repaint();
        });
    }

    /// Poll the loader channel and seed the cascade when the table arrives.
    pub fn check_region_load(&mut self) {
        if let Some(rx) = &self.region_rx {
            if let Ok(table) = rx.try_recv() {
                log::info!("loaded {} region rows", table.len());
                self.regions = table;
                self.city_list = self.regions.cities();
                self.selected_city = self.city_list.first().cloned().unwrap_or_default();
                self.rebuild_districts();
                self.loading = false;
                self.region_rx = None;
            }
        }
    }

    pub fn set_city(&mut self, city: String) {
        if city != self.selected_city {
            self.selected_city = city;
            self.rebuild_districts();
        }
    }

    pub fn set_district(&mut self, district: String) {
        if district != self.selected_district {
            self.selected_district = district;
            self.rebuild_neighborhoods();
        }
    }

    pub fn set_neighborhood(&mut self, neighborhood: String) {
        if neighborhood != self.selected_neighborhood {
            self.selected_neighborhood = neighborhood;
            self.request_recompute(SELECT_DEBOUNCE_MS);
        }
    }

    /// Rebuild the district list after a city change, keeping the previous
    /// district when it survives the change.
    pub fn rebuild_districts(&mut self) {
        self.district_list = self.regions.districts(&self.selected_city);
        self.selected_district = retain_or_first(&self.selected_district, &self.district_list);
        self.rebuild_neighborhoods();
    }

    /// Rebuild the neighborhood list after a district change.
    pub fn rebuild_neighborhoods(&mut self) {
        self.neighborhood_list = if self.selected_district.is_empty() {
            Vec::new()
        } else {
            self.regions
                .neighborhoods(&self.selected_city, &self.selected_district)
        };
        self.selected_neighborhood =
            retain_or_first(&self.selected_neighborhood, &self.neighborhood_list);
        self.request_recompute(SELECT_DEBOUNCE_MS);
    }

    /// Schedule a full placement recompute after `delay_ms`.
    pub fn request_recompute(&mut self, delay_ms: u64) {
        self.recompute_at = Some(Instant::now() + Duration::from_millis(delay_ms));
    }

    /// Run a scheduled recompute once its deadline has passed; otherwise
    /// ask for a repaint at the deadline so the frame loop comes back.
    pub fn run_pending_recompute(&mut self, ctx: &egui::Context) {
        if let Some(deadline) = self.recompute_at {
            let now = Instant::now();
            if now >= deadline {
                self.recompute_at = None;
                self.recompute_positions();
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }
    }

    /// Recompute every badge position from scratch for the current
    /// neighborhood and panel size. Clears the tag selection, as a new map
    /// invalidates it.
    pub fn recompute_positions(&mut self) {
        self.selected_tag = None;
        self.placed.clear();
        self.placed_at = None;

        if self.loading || self.selected_neighborhood.is_empty() {
            return;
        }

        let canvas = Canvas::new(self.map_size.x, self.map_size.y);
        if !canvas.is_valid() {
            log::warn!("map panel has no size yet; skipping placement");
            return;
        }

        let tag_list = tags::tags_for(&self.selected_neighborhood);
        if tag_list.is_empty() {
            return;
        }

        let mut rng = rand::rng();
        self.placed = place_tags(&tag_list, canvas, &PlacementParams::default(), &mut rng);
        self.placed_at = Some(Instant::now());

        log::debug!(
            "placed {}/{} tags for {}",
            self.placed.iter().filter(|p| p.is_visible()).count(),
            self.placed.len(),
            self.selected_neighborhood
        );
    }
}
