//! Raw user selections and their translation into a [`FilterSpec`].

use std::collections::BTreeMap;

use crate::search::filter::{FilterSpec, PriceBucket, PriceFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Colour section (multi-select).
pub const SECTION_COLOR: &str = "farbe";
/// Price bucket section (single-select).
pub const SECTION_PRICE: &str = "preis";
/// Size section (multi-select).
pub const SECTION_SIZE: &str = "groesse";
/// Material section (multi-select).
pub const SECTION_MATERIAL: &str = "material";

/// Selected option identifiers per filter section, as produced by the UI.
///
/// Section identifiers are stored lower-cased. Options keep their
/// selection order and are never duplicated within a section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct RawSelection {
    sections: BTreeMap<String, Vec<String>>,
}

impl RawSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to a section.
    ///
    /// Selecting an option twice is a no-op, so a raw map listing the same
    /// option twice counts it once towards [`count`](Self::count).
    pub fn select(&mut self, section: &str, option: impl Into<String>) {
        let option = option.into();
        let entry = self.sections.entry(section.to_lowercase()).or_default();
        if !entry.contains(&option) {
            entry.push(option);
        }
    }

    /// Builder form of [`select`](Self::select).
    pub fn with(mut self, section: &str, option: impl Into<String>) -> Self {
        self.select(section, option);
        self
    }

    /// Remove an option from a section, dropping the section when it empties.
    pub fn deselect(&mut self, section: &str, option: &str) {
        let key = section.to_lowercase();
        if let Some(entry) = self.sections.get_mut(&key) {
            entry.retain(|o| o != option);
            if entry.is_empty() {
                self.sections.remove(&key);
            }
        }
    }

    /// Replace a section's options.
    pub fn set_section<I, S>(&mut self, section: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = section.to_lowercase();
        self.sections.remove(&key);
        for option in options {
            self.select(&key, option);
        }
    }

    /// Options selected in a section (empty if none).
    pub fn options(&self, section: &str) -> &[String] {
        self.sections
            .get(&section.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if an option is selected.
    pub fn is_selected(&self, section: &str, option: &str) -> bool {
        self.options(section).iter().any(|o| o == option)
    }

    /// Number of selected options across all sections.
    pub fn count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterate over non-empty sections.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .filter(|(_, options)| !options.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Translate into a filter specification.
    ///
    /// Only the first price bucket is honoured. Unknown bucket identifiers
    /// leave the price unconstrained; unknown sections are ignored.
    pub fn to_filter_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new()
            .with_colors(self.options(SECTION_COLOR).iter().cloned())
            .with_sizes(self.options(SECTION_SIZE).iter().cloned())
            .with_materials(self.options(SECTION_MATERIAL).iter().cloned());

        if let Some(first) = self.options(SECTION_PRICE).first() {
            spec.price = match first.parse::<PriceBucket>() {
                Ok(bucket) => PriceFilter::Bucket(bucket),
                Err(e) => {
                    warn!(error = %e, "ignoring price selection");
                    PriceFilter::Any
                }
            };
        }

        for (section, options) in self.sections() {
            if ![SECTION_COLOR, SECTION_PRICE, SECTION_SIZE, SECTION_MATERIAL].contains(&section) {
                debug!(section, count = options.len(), "ignoring unknown filter section");
            }
        }

        spec
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for RawSelection {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        let mut selection = RawSelection::new();
        for (section, options) in iter {
            let section: String = section.into();
            for option in options {
                selection.select(&section, option);
            }
        }
        selection
    }
}

impl From<BTreeMap<String, Vec<String>>> for RawSelection {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<RawSelection> for BTreeMap<String, Vec<String>> {
    fn from(selection: RawSelection) -> Self {
        selection.sections
    }
}
