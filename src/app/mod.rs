//! `MoodMapApp` — the top-level egui application state.
//!
//! This module declares the `MoodMapApp` struct and its constructor.
//! All methods are split across the sibling sub-modules:
//!
//! - `selection` — region loading, cascade state, debounced recompute
//! - `toolbar`   — the city/district/neighborhood selector strip
//! - `content`   — mood-map panel and the find-matches bar

pub mod content;
pub mod selection;
pub mod toolbar;

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use delimood::map::PlacedTag;
use delimood::region::RegionTable;

/// Debounce applied after a selection change before recomputing.
pub const SELECT_DEBOUNCE_MS: u64 = 100;
/// Debounce applied after a panel resize before recomputing.
pub const RESIZE_DEBOUNCE_MS: u64 = 300;

pub struct MoodMapApp {
    // Region data
    pub csv_path: Option<PathBuf>,
    pub regions: RegionTable,
    pub loading: bool,
    pub region_rx: Option<mpsc::Receiver<RegionTable>>,

    // Cascading selection
    pub city_list: Vec<String>,
    pub district_list: Vec<String>,
    pub neighborhood_list: Vec<String>,
    pub selected_city: String,
    pub selected_district: String,
    pub selected_neighborhood: String,

    // Mood map
    pub selected_tag: Option<String>,
    pub placed: Vec<PlacedTag>,
    pub map_size: egui::Vec2,
    /// Deadline of a pending full recompute; rapid requests collapse into
    /// the latest one.
    pub recompute_at: Option<Instant>,
    /// When the current placement was produced, for the entry animation.
    pub placed_at: Option<Instant>,

    // Find action
    pub last_search: Option<(String, String)>,
}

impl MoodMapApp {
    pub fn new(csv_path: Option<PathBuf>) -> Self {
        Self {
            csv_path,
            regions: RegionTable::default(),
            loading: true,
            region_rx: None,
            city_list: Vec::new(),
            district_list: Vec::new(),
            neighborhood_list: Vec::new(),
            selected_city: String::new(),
            selected_district: String::new(),
            selected_neighborhood: String::new(),
            selected_tag: None,
            placed: Vec::new(),
            map_size: egui::Vec2::ZERO,
            recompute_at: None,
            placed_at: None,
            last_search: None,
        }
    }
}

impl Default for MoodMapApp {
    fn default() -> Self {
        Self::new(None)
    }
}

impl eframe::App for MoodMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.loading && self.region_rx.is_none() {
            self.start_region_load(ctx);
        }
        self.check_region_load();
        self.run_pending_recompute(ctx);

        ctx.set_visuals(egui::Visuals::light());

        egui::TopBottomPanel::top("selectors").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| ui.heading("DeliMood"));
            ui.add_space(4.0);
            self.draw_selectors(ui);
            ui.add_space(4.0);
            self.draw_guidance(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(8.0);
            self.draw_find_bar(ui);
            ui.add_space(8.0);
        });

        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_map(ui, &ctx_clone);
        });
    }
}
