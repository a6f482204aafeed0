// 🌍 Region Matcher - Fuzzy country-to-region eligibility
// Resolves a free-text region field against a selected country via a
// fixed country → parent-region alias table

use std::collections::HashMap;

/// Selection value that matches every entity regardless of region text.
pub const GLOBAL_REGION: &str = "Global";

// ============================================================================
// REGION MAP
// ============================================================================

/// RegionMap - static lookup from lowercase country name to the lowercase
/// parent-region aliases that imply availability in that country.
///
/// Built once at startup and never mutated afterwards.
pub struct RegionMap {
    aliases: HashMap<&'static str, &'static [&'static str]>,
}

impl RegionMap {
    pub fn new() -> Self {
        let mut aliases: HashMap<&'static str, &'static [&'static str]> = HashMap::new();

        aliases.insert("india", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("nigeria", &["africa", "global", "worldwide"]);
        aliases.insert("japan", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("south korea", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("vietnam", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("indonesia", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("philippines", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("thailand", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("singapore", &["apac", "asia", "global", "worldwide"]);
        aliases.insert("australia", &["apac", "oceania", "global", "worldwide"]);
        aliases.insert("china", &["apac", "asia", "global", "worldwide"]);

        aliases.insert("brazil", &["latam", "south america", "global", "worldwide"]);
        aliases.insert("argentina", &["latam", "south america", "global", "worldwide"]);
        aliases.insert("mexico", &["latam", "north america", "global", "worldwide"]);

        aliases.insert("canada", &["north america", "global", "worldwide"]);

        aliases.insert("united kingdom", &["uk", "europe", "global", "worldwide"]);
        aliases.insert("germany", &["eea", "europe", "global", "worldwide"]);
        aliases.insert("france", &["eea", "europe", "global", "worldwide"]);
        aliases.insert("spain", &["eea", "europe", "global", "worldwide"]);
        aliases.insert("italy", &["eea", "europe", "global", "worldwide"]);
        aliases.insert("netherlands", &["eea", "europe", "global", "worldwide"]);
        aliases.insert("switzerland", &["europe", "global", "worldwide"]);

        aliases.insert("turkey", &["europe", "asia", "global", "worldwide"]);
        aliases.insert("uae", &["mena", "global", "worldwide"]);
        aliases.insert("saudi arabia", &["mena", "global", "worldwide"]);
        aliases.insert("south africa", &["africa", "global", "worldwide"]);

        // US cards are often excluded from "Global" offerings, so the US
        // entry deliberately has no continent or worldwide fallback: only
        // an explicit "US"/"USA" in the entity text counts.
        aliases.insert("united states", &["us", "usa"]);
        aliases.insert("usa", &["us", "usa"]);

        RegionMap { aliases }
    }

    /// Check whether an entity's free-text region field satisfies the
    /// user-selected country/region.
    ///
    /// Matching is case-insensitive substring containment only; no accent
    /// stripping or synonym expansion beyond the alias table.
    pub fn matches(&self, entity_regions: &str, selected_region: &str) -> bool {
        if selected_region.is_empty() || selected_region == GLOBAL_REGION {
            return true;
        }

        let entity_lower = entity_regions.to_lowercase();
        let selected_lower = selected_region.to_lowercase();

        // Direct hit: the entity text already names the selected region
        if entity_lower.contains(&selected_lower) {
            return true;
        }

        // Parent-region fallback via the alias table
        if let Some(parents) = self.aliases.get(selected_lower.as_str()) {
            return parents.iter().any(|p| entity_lower.contains(p));
        }

        false
    }

    /// Number of countries in the alias table
    pub fn country_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for RegionMap {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_matches_everything() {
        let map = RegionMap::new();
        assert!(map.matches("United States", ""));
        assert!(map.matches("", ""));
        assert!(map.matches("EEA, UK", ""));
    }

    #[test]
    fn test_global_selection_matches_everything() {
        let map = RegionMap::new();
        assert!(map.matches("United States", "Global"));
        assert!(map.matches("Nowhere in particular", "Global"));
    }

    #[test]
    fn test_direct_substring_match() {
        let map = RegionMap::new();
        assert!(map.matches("US, EEA, UK", "UK"));
        assert!(map.matches("United States", "united states"));
        assert!(map.matches("Global, Worldwide", "Worldwide"));
    }

    #[test]
    fn test_parent_region_fallback() {
        let map = RegionMap::new();
        // India is not listed, but APAC / Global imply availability
        assert!(map.matches("APAC, EEA", "India"));
        assert!(map.matches("Global", "India"));
        assert!(map.matches("Worldwide", "Nigeria"));
        assert!(map.matches("Africa", "Nigeria"));
        assert!(map.matches("Europe", "Germany"));
    }

    #[test]
    fn test_united_states_is_strict() {
        let map = RegionMap::new();
        // A card that only says "Global" does not necessarily serve the US
        assert!(!map.matches("Global", "United States"));
        assert!(!map.matches("Worldwide, EEA", "USA"));
        // Explicit US listings do match
        assert!(map.matches("US, EEA", "United States"));
        assert!(map.matches("USA only", "United States"));
        // The same "Global" text still matches a non-US country
        assert!(map.matches("Global", "India"));
    }

    #[test]
    fn test_unknown_region_fails_closed() {
        let map = RegionMap::new();
        assert!(!map.matches("EEA, UK", "Atlantis"));
        assert!(!map.matches("", "Atlantis"));
    }

    #[test]
    fn test_case_insensitivity() {
        let map = RegionMap::new();
        assert!(map.matches("apac, eea", "JAPAN"));
        assert!(map.matches("GLOBAL", "india"));
    }
}
