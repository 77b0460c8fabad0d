//! Province filter values.
//!
//! A province is a plain string. The sentinel [`ALL_PROVINCES`] means "no
//! filter"; the server never lists it, the client always puts it first.

use std::collections::HashSet;

/// Sentinel value for the unfiltered view.
pub const ALL_PROVINCES: &str = "All";

/// Display text for [`ALL_PROVINCES`].
pub const ALL_PROVINCES_LABEL: &str = "All Provinces";

/// Text shown for a province value in the filter.
pub fn display_label(value: &str) -> &str {
    if value == ALL_PROVINCES {
        ALL_PROVINCES_LABEL
    } else {
        value
    }
}

/// Build the option list `["All", ...provinces]`.
///
/// Server-sent `"All"` entries and blank names are dropped and duplicates
/// keep their first position, so option values stay unique.
pub fn province_options(provinces: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = Vec::with_capacity(provinces.len() + 1);
    options.push(ALL_PROVINCES.to_string());
    for province in provinces {
        let name = province.as_str();
        if name.is_empty() || name == ALL_PROVINCES {
            continue;
        }
        if seen.insert(name) {
            options.push(province.clone());
        }
    }
    options
}

/// Pick the province shown as selected after a results render.
///
/// A value the user picked from the dropdown wins. Without one, precedence
/// is the payload's `selected_province` if non-empty, then the province the
/// controller requested, then [`ALL_PROVINCES`]. Values that are not in
/// `options` are skipped.
pub fn initial_selection(
    chosen: Option<&str>,
    payload_selected: Option<&str>,
    tracked: &str,
    options: &[String],
) -> String {
    let is_option = |value: &str| options.iter().any(|o| o == value);

    if let Some(chosen) = chosen.filter(|c| is_option(c)) {
        return chosen.to_string();
    }
    if let Some(selected) = payload_selected.filter(|s| !s.is_empty()) {
        if is_option(selected) {
            return selected.to_string();
        }
        log::warn!("Ignoring selected_province {:?}: not a known province", selected);
    }
    if !tracked.is_empty() && is_option(tracked) {
        return tracked.to_string();
    }
    ALL_PROVINCES.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("All"), "All Provinces");
        assert_eq!(display_label("ON"), "ON");
        assert_eq!(display_label("all"), "all");
    }

    #[test]
    fn test_options_start_with_all() {
        let options = province_options(&names(&["ON", "QC"]));
        assert_eq!(options, names(&["All", "ON", "QC"]));

        assert_eq!(province_options(&[]), names(&["All"]));
    }

    #[test]
    fn test_options_are_unique() {
        let options = province_options(&names(&["QC", "All", "ON", "QC", ""]));
        assert_eq!(options, names(&["All", "QC", "ON"]));
    }

    #[test]
    fn test_initial_selection_precedence() {
        let options = names(&["All", "ON", "QC"]);

        assert_eq!(initial_selection(None, Some("QC"), "ON", &options), "QC");
        assert_eq!(initial_selection(None, Some(""), "ON", &options), "ON");
        assert_eq!(initial_selection(None, None, "ON", &options), "ON");
        assert_eq!(initial_selection(None, None, "", &options), "All");
    }

    #[test]
    fn test_user_choice_beats_payload() {
        let options = names(&["All", "ON", "QC"]);

        assert_eq!(initial_selection(Some("All"), Some("QC"), "All", &options), "All");
        assert_eq!(initial_selection(Some("ON"), Some("QC"), "ON", &options), "ON");
        // A choice the new option list no longer has falls through.
        assert_eq!(initial_selection(Some("BC"), Some("QC"), "BC", &options), "QC");
    }

    #[test]
    fn test_initial_selection_skips_unknown_values() {
        let options = names(&["All", "ON"]);

        assert_eq!(initial_selection(None, Some("BC"), "ON", &options), "ON");
        assert_eq!(initial_selection(None, Some("BC"), "MB", &options), "All");
    }
}
