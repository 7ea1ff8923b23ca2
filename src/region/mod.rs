//! Region-hierarchy data: city → district → neighborhood.
//!
//! Rows come from a CSV of administrative regions (see [`parser`]).
//! Lookups are always scoped by the full path: neighborhood names repeat
//! across districts, so a bare name is not a key.

pub mod parser;

use serde::Deserialize;

/// One row of the administrative-region CSV.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RegionEntry {
    #[serde(rename = "adm_dong_code")]
    pub code: String,
    pub city: String,
    pub district: String,
    pub neighborhood: String,
}

impl RegionEntry {
    /// A usable row has every field filled in.
    pub fn is_complete(&self) -> bool {
        !self.code.is_empty()
            && !self.city.is_empty()
            && !self.district.is_empty()
            && !self.neighborhood.is_empty()
    }
}

/// All parsed region rows, with path-scoped lookups for the cascade UI.
#[derive(Clone, Debug, Default)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    pub fn new(entries: Vec<RegionEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unique city names in first-seen order.
    pub fn cities(&self) -> Vec<String> {
        let mut out = Vec::new();
        for entry in &self.entries {
            push_unique(&mut out, &entry.city);
        }
        out
    }

    /// Unique district names within `city`, in first-seen order.
    pub fn districts(&self, city: &str) -> Vec<String> {
        let mut out = Vec::new();
        for entry in self.entries.iter().filter(|e| e.city == city) {
            push_unique(&mut out, &entry.district);
        }
        out
    }

    /// Unique neighborhood names within `city`/`district`, in first-seen
    /// order.
    pub fn neighborhoods(&self, city: &str, district: &str) -> Vec<String> {
        let mut out = Vec::new();
        for entry in self
            .entries
            .iter()
            .filter(|e| e.city == city && e.district == district)
        {
            push_unique(&mut out, &entry.neighborhood);
        }
        out
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, city: &str, district: &str, neighborhood: &str) -> RegionEntry {
        RegionEntry {
            code: code.to_string(),
            city: city.to_string(),
            district: district.to_string(),
            neighborhood: neighborhood.to_string(),
        }
    }

    #[test]
    fn lookups_are_scoped_by_full_path() {
        // The same neighborhood name in two districts must stay distinct.
        let table = RegionTable::new(vec![
            entry("1", "서울특별시", "마포구", "서교동"),
            entry("2", "서울특별시", "종로구", "사직동"),
            entry("3", "경기도", "성남시 분당구", "정자동"),
            entry("4", "서울특별시", "가상구", "서교동"),
        ]);

        assert_eq!(table.cities(), ["서울특별시", "경기도"]);
        assert_eq!(
            table.districts("서울특별시"),
            ["마포구", "종로구", "가상구"]
        );
        assert_eq!(table.neighborhoods("서울특별시", "마포구"), ["서교동"]);
        assert_eq!(table.neighborhoods("서울특별시", "가상구"), ["서교동"]);
        assert!(table.neighborhoods("경기도", "마포구").is_empty());
    }

    #[test]
    fn duplicate_rows_collapse_in_lookups() {
        let table = RegionTable::new(vec![
            entry("1", "서울특별시", "마포구", "연남동"),
            entry("1", "서울특별시", "마포구", "연남동"),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.neighborhoods("서울특별시", "마포구"), ["연남동"]);
    }
}
