//! Filter sheet sections and selection bookkeeping.

use crate::search::filter::PriceBucket;
use crate::search::selection::{RawSelection, SECTION_COLOR, SECTION_PRICE};
use serde::{Deserialize, Serialize};

/// A selectable option in a filter section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Identifier placed in the selection.
    pub id: String,
    /// Label shown to the shopper.
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A section of the filter sheet (e.g., colour or price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    /// Section identifier used as the selection key.
    pub id: String,
    /// Heading shown to the shopper.
    pub title: String,
    /// Whether several options may be selected at once.
    pub multi_select: bool,
    /// Options in display order.
    pub options: Vec<FilterOption>,
}

impl FilterSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, multi_select: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            multi_select,
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn with_option(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(id, label));
        self
    }

    fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

/// The set of filter sections offered to the shopper.
///
/// The panel holds no selection state of its own. Every toggle takes the
/// current [`RawSelection`] and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
    pub sections: Vec<FilterSection>,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::with_currency("€")
    }
}

impl FilterPanel {
    /// The standard colour and price sections, with price labels in `symbol`.
    pub fn with_currency(symbol: &str) -> Self {
        let colors = [
            ("White", "White"),
            ("Red", "Red"),
            ("Green", "Green"),
            ("Blue", "Blue"),
            ("Grey", "Grey"),
            ("Yellow", "Yellow"),
        ]
        .into_iter()
        .fold(FilterSection::new(SECTION_COLOR, "FARBE", true), |s, (id, label)| {
            s.with_option(id, label)
        });

        let prices = PriceBucket::ALL
            .into_iter()
            .fold(FilterSection::new(SECTION_PRICE, "PREIS", false), |s, b| {
                s.with_option(b.as_str(), b.label(symbol))
            });

        Self {
            sections: vec![colors, prices],
        }
    }

    /// A panel with the given sections.
    pub fn new(sections: Vec<FilterSection>) -> Self {
        Self { sections }
    }

    /// Look up a section.
    pub fn section(&self, section_id: &str) -> Option<&FilterSection> {
        self.sections
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(section_id))
    }

    /// Toggle an option and return the resulting selection.
    ///
    /// Multi-select sections flip the option. Single-select sections select
    /// the option exclusively, or clear it when it was already selected.
    /// Unknown sections or options leave the selection unchanged.
    pub fn toggle(&self, current: &RawSelection, section_id: &str, option_id: &str) -> RawSelection {
        let mut next = current.clone();
        let Some(section) = self.section(section_id) else {
            return next;
        };
        if !section.has_option(option_id) {
            return next;
        }

        let was_selected = current.is_selected(&section.id, option_id);
        if section.multi_select {
            if was_selected {
                next.deselect(&section.id, option_id);
            } else {
                next.select(&section.id, option_id);
            }
        } else if was_selected {
            next.set_section(&section.id, Vec::<String>::new());
        } else {
            next.set_section(&section.id, [option_id]);
        }
        next
    }

    /// Number of selected options known to this panel, for the sheet header.
    pub fn selected_count(&self, selection: &RawSelection) -> usize {
        self.sections
            .iter()
            .map(|section| {
                section
                    .options
                    .iter()
                    .filter(|o| selection.is_selected(&section.id, &o.id))
                    .count()
            })
            .sum()
    }

    /// The selection after pressing reset.
    pub fn reset(&self) -> RawSelection {
        RawSelection::new()
    }
}
