//! Curated label pattern → data key synonym table

use super::normalize_key;
use crate::error::{FillError, FillResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Built-in table for the BOQ, Sizing and SLD enquiry templates.
///
/// Declaration order matters: the first pattern contained in a label is tried
/// first. Some patterns are declared twice with different candidates.
const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    // BOQ
    ("project name", &["project_name", "project"]),
    ("engineering consultant", &["engineering_consultant", "consultant"]),
    ("name of the epc", &["epc", "epc_name", "name_of_epc"]),
    ("9com numbers", &["9com_numbers", "equipment_list", "applicable_9com"]),
    ("standards", &["standards", "applicable_standards", "list_of_standards"]),
    ("number of systems", &["number_of_systems", "systems_count"]),
    ("wattage", &["wattage", "load_value", "load", "wattage_load"]),
    ("load value", &["wattage", "load_value", "load"]),
    ("number of sites", &["number_of_sites", "sites_count", "numbers_of_sites"]),
    ("battery type", &["battery_type", "required_battery_type"]),
    ("battery autonomy", &["battery_autonomy", "autonomy", "required_battery_autonomy"]),
    ("battery capacity", &["battery_capacity", "capacity", "required_battery_capacity"]),
    ("environmental", &["environmental_conditions", "environment"]),
    ("temperature", &["temperature_range", "temperature"]),
    ("support structure", &["support_structure", "structure"]),
    ("specifications", &["other_specifications", "specifications", "other_equipment"]),
    ("other service", &["other_services", "services"]),
    // Sizing
    ("solar panels config", &["solar_panels_config", "solar_config"]),
    ("charge controllers config", &["charge_controllers_config", "charge_controller_config"]),
    ("batteries config", &["batteries_config", "battery_config"]),
    ("load-list", &["load_list", "loads"]),
    ("load list", &["load_list", "loads"]),
    ("future expansion", &["future_expansion_factor", "future_expansion"]),
    ("battery back-up", &["battery_backup_time", "backup_time"]),
    ("back-up time", &["battery_backup_time", "backup_time"]),
    ("ageing factor", &["ageing_factor", "aging_factor"]),
    ("design factor", &["design_factor"]),
    ("temperature compensation", &["temperature_compensation"]),
    ("other factor", &["other_battery_factors", "other_factors"]),
    ("computed required battery", &["computed_battery_capacity", "required_battery_capacity"]),
    ("required battery capacity", &["computed_battery_capacity", "required_battery_capacity"]),
    ("end of discharge", &["end_of_discharge_voltage", "eod_voltage"]),
    ("cells in series", &["cells_in_series", "number_of_cells"]),
    ("proposed battery cell", &["proposed_cell_capacity", "proposed_capacity"]),
    ("parallel sets", &["parallel_strings", "number_of_parallel"]),
    ("parallel strings", &["parallel_strings", "number_of_parallel"]),
    ("derating factors", &["derating_factors", "solar_derating"]),
    ("sun hours", &["sun_hours", "effective_sun_hours"]),
    ("future factor", &["solar_future_factor", "future_factor"]),
    ("formula", &["solar_sizing_formula", "sizing_formula"]),
    ("total daily required", &["total_daily_ah", "daily_required_ah"]),
    ("panels in one string", &["solar_panels_per_string", "panels_per_string"]),
    ("parallel solar panels", &["parallel_solar_panels", "parallel_panels"]),
    ("how many solar panels", &["solar_panels_per_string", "panels_per_string"]),
    ("how many parallel", &["parallel_solar_panels", "parallel_panels"]),
    // SLD
    ("junction box", &["array_junction_boxes", "junction_boxes"]),
    ("charge controller type", &["charge_controller_type", "controller_type"]),
    ("mppt or pwm", &["charge_controller_type", "controller_type"]),
    ("hard-wired signals", &["hardwired_signals", "signals_to_rtu"]),
    ("hardwired signals", &["hardwired_signals", "signals_to_rtu"]),
    ("other signals", &["other_signals", "other_alarms"]),
    ("battery breaker box", &["battery_breaker_box", "breaker_box_required"]),
    ("battery breaker boxes", &["num_battery_breaker_boxes", "number_of_breaker_boxes"]),
    ("battery configuration", &["battery_config", "batteries_config"]),
    ("battery type", &["battery_type"]),
    ("nicd or vrla", &["battery_type"]),
    ("cells in series", &["cells_in_series", "number_of_cells"]),
    ("strings of batteries", &["battery_strings", "number_of_strings"]),
    ("how many strings", &["battery_strings", "number_of_strings"]),
    ("enclosure ip", &["battery_enclosure_rating", "enclosure_rating"]),
    ("nema rating", &["battery_enclosure_rating", "enclosure_rating"]),
    ("back-up", &["required_backup", "backup_autonomy"]),
    ("autonomy", &["required_backup", "backup_autonomy"]),
    ("panel board", &["panel_board_required", "los_required"]),
    ("db / los", &["panel_board_required", "los_required"]),
    ("los required", &["panel_board_required", "los_required"]),
    ("enclosure rating of los", &["los_enclosure_rating", "power_panel_rating"]),
    ("power panel", &["los_enclosure_rating", "power_panel_rating"]),
    ("breakers and ratings", &["breaker_list", "number_of_breakers"]),
    ("number of breakers", &["breaker_list", "number_of_breakers"]),
    ("notes for pv", &["pv_notes", "charge_controller_notes"]),
    ("notes for batteries", &["battery_notes", "enclosure_notes"]),
    ("other equipment", &["other_equipment", "additional_equipment"]),
    ("critical points", &["critical_points", "other_notes"]),
];

/// One pattern and the key spellings it may resolve to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub pattern: String,
    pub candidates: Vec<String>,
}

impl SynonymEntry {
    pub fn new<S: AsRef<str>>(pattern: &str, candidates: &[S]) -> Self {
        Self {
            pattern: pattern.to_string(),
            candidates: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }
}

/// Ordered list of synonym entries, compared in normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// Build a table, normalizing patterns and candidates.
    ///
    /// Entries whose pattern normalizes to nothing are dropped, as are empty
    /// candidates: either would match every label or key.
    pub fn new(entries: impl IntoIterator<Item = SynonymEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let pattern = normalize_key(&entry.pattern);
                if pattern.is_empty() {
                    return None;
                }
                let candidates = entry
                    .candidates
                    .iter()
                    .map(|c| normalize_key(c))
                    .filter(|c| !c.is_empty())
                    .collect();
                Some(SynonymEntry {
                    pattern,
                    candidates,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a YAML sequence of `{pattern, candidates}` entries
    pub fn from_yaml_str(yaml: &str) -> FillResult<Self> {
        let raw: Vec<SynonymEntry> = serde_yaml::from_str(yaml)?;
        for (idx, entry) in raw.iter().enumerate() {
            if normalize_key(&entry.pattern).is_empty() {
                return Err(FillError::Config(format!(
                    "synonym entry {} has an empty pattern",
                    idx + 1
                )));
            }
            if entry.candidates.iter().all(|c| normalize_key(c).is_empty()) {
                return Err(FillError::Config(format!(
                    "synonym entry '{}' has no candidate keys",
                    entry.pattern
                )));
            }
        }
        Ok(Self::new(raw))
    }

    /// Load a table from a YAML file
    pub fn load(path: &Path) -> FillResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns declared more than once, in order of first declaration.
    ///
    /// Only the first declaration of such a pattern can ever win, so each one
    /// is a possible source ambiguity.
    pub fn duplicate_patterns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut repeated = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.pattern.as_str()) {
                repeated.insert(entry.pattern.as_str());
            }
        }

        let mut reported = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.pattern.as_str())
            .filter(|p| repeated.contains(p) && reported.insert(*p))
            .collect()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_SYNONYMS
                .iter()
                .map(|&(pattern, candidates)| SynonymEntry::new(pattern, candidates)),
        )
    }
}
