//! Country name filtering and selection-preserving refilter for the countries view.

use crate::state::{CountriesView, Country};

/// What: Case-insensitive substring match of `term` against a country name.
///
/// Details:
/// - `term_lower` must already be lowercased; the name is lowercased per call.
fn name_matches(country: &Country, term_lower: &str) -> bool {
    country.name.to_lowercase().contains(term_lower)
}

/// What: Select the countries whose name contains `term`, ignoring case.
///
/// Inputs:
/// - `countries`: Full list in display order.
/// - `term`: Search term, used verbatim (no trimming).
///
/// Output:
/// - Matching countries in their original relative order; the whole list when `term` is empty.
///
/// Details:
/// - Idempotent: filtering the output again with the same term returns it unchanged.
#[must_use]
pub fn filter_countries(countries: &[Country], term: &str) -> Vec<Country> {
    if term.is_empty() {
        return countries.to_vec();
    }
    filter_indices(countries, term)
        .into_iter()
        .map(|i| countries[i].clone())
        .collect()
}

/// What: Indices of the countries matching `term`; `filter_countries` is built on it.
///
/// Inputs:
/// - `countries`: Full list.
/// - `term`: Search term.
///
/// Output:
/// - Ascending indices into `countries`.
#[must_use]
pub fn filter_indices(countries: &[Country], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    countries
        .iter()
        .enumerate()
        .filter(|(_, c)| needle.is_empty() || name_matches(c, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// What: Recompute `view.filtered` from the fetched list and current term, keeping the cursor.
///
/// Inputs:
/// - `view`: Countries view with `all` and `search_term` set.
///
/// Output:
/// - Updates `filtered`, `selected`, and `list_state`.
///
/// Details:
/// - Selection is restored by name when the previously highlighted country survives;
///   otherwise clamped, or cleared when nothing matches.
/// - Before a successful fetch the filtered list is empty.
pub fn apply_country_filter_preserve_selection(view: &mut CountriesView) {
    let prev_name = view.filtered.get(view.selected).map(|c| c.name.clone());
    view.filtered = view
        .all
        .data()
        .map(|all| filter_countries(all, &view.search_term))
        .unwrap_or_default();

    if view.filtered.is_empty() {
        view.selected = 0;
        view.list_state.select(None);
        return;
    }
    if let Some(pos) = prev_name.and_then(|name| view.filtered.iter().position(|c| c.name == name))
    {
        view.selected = pos;
    } else {
        view.selected = view.selected.min(view.filtered.len() - 1);
    }
    view.list_state.select(Some(view.selected));
}
