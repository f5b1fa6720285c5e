use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::facets::FacetKind;

/// The facet values currently chosen by the user.
///
/// A facet with no entry imposes no constraint. Values keep the order in which
/// they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    facets: BTreeMap<FacetKind, Vec<String>>,
}

impl SelectionState {
    /// Returns the state with `value` added to (`checked`) or removed from the
    /// set selected for `facet`. Removing an unselected value is a no-op.
    #[must_use]
    pub fn toggle(mut self, facet: FacetKind, value: impl Into<String>, checked: bool) -> Self {
        let value = value.into();
        if checked {
            let selected = self.facets.entry(facet).or_default();
            if !selected.contains(&value) {
                selected.push(value);
            }
        } else if let Some(selected) = self.facets.get_mut(&facet) {
            selected.retain(|v| *v != value);
            if selected.is_empty() {
                self.facets.remove(&facet);
            }
        }
        self
    }

    /// Selected values for `facet`; empty when unconstrained.
    pub fn selected(&self, facet: FacetKind) -> &[String] {
        self.facets.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Facets carrying at least one selected value.
    pub fn active(&self) -> impl Iterator<Item = (FacetKind, &[String])> + '_ {
        self.facets
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(kind, values)| (*kind, values.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}
