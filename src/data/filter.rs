use std::fmt;

use super::model::{Facet, Profile};

// ---------------------------------------------------------------------------
// Selection: the value picked for one facet
// ---------------------------------------------------------------------------

/// Facet selection. `All` imposes no constraint on the facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Whether a profile carrying `values` for the facet passes this selection.
    /// Facet values come from the dataset itself, so matching is exact.
    pub fn admits(&self, values: &[String]) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => values.iter().any(|v| v == wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterState: search term + one selection per facet
// ---------------------------------------------------------------------------

/// Current filter selection. Every field defaults to "no constraint" and a
/// profile is kept only if it passes all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub search: String,
    pub area: Selection,
    pub location: Selection,
    pub technology: Selection,
}

/// Partial update of a [`FilterState`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub area: Option<Selection>,
    pub location: Option<Selection>,
    pub technology: Option<Selection>,
}

impl FilterPatch {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn facet(facet: Facet, selection: Selection) -> Self {
        let mut patch = Self::default();
        match facet {
            Facet::Area => patch.area = Some(selection),
            Facet::Location => patch.location = Some(selection),
            Facet::Technology => patch.technology = Some(selection),
        }
        patch
    }
}

impl FilterState {
    pub fn selection(&self, facet: Facet) -> &Selection {
        match facet {
            Facet::Area => &self.area,
            Facet::Location => &self.location,
            Facet::Technology => &self.technology,
        }
    }

    /// Merge a partial update into this state.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(area) = patch.area {
            self.area = area;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(technology) = patch.technology {
            self.technology = technology;
        }
    }

    /// Normalised search term, `None` when it imposes no constraint.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim().to_lowercase();
        (!term.is_empty()).then_some(term)
    }

    /// Whether nothing is constrained (whitespace-only search counts as empty).
    pub fn is_unconstrained(&self) -> bool {
        self.search_term().is_none() && Facet::ALL.iter().all(|f| self.selection(*f).is_all())
    }

    /// `(label, value)` for every field currently constraining the result.
    pub fn active_constraints(&self) -> Vec<(&'static str, String)> {
        let mut active = Vec::new();
        if self.search_term().is_some() {
            active.push(("Search", self.search.trim().to_string()));
        }
        for facet in Facet::ALL {
            if let Selection::Only(v) = self.selection(facet) {
                active.push((facet.label(), v.clone()));
            }
        }
        active
    }

    /// Check one profile against all four predicates.
    pub fn matches(&self, profile: &Profile) -> bool {
        self.admits(self.search_term().as_deref(), profile)
    }

    /// The four-way conjunction, with the search term already normalised.
    fn admits(&self, term: Option<&str>, profile: &Profile) -> bool {
        matches_search(profile, term)
            && Facet::ALL
                .iter()
                .all(|f| self.selection(*f).admits(profile.facet_values(*f)))
    }
}

/// Search predicate: `term` must already be trimmed and lower-cased.
fn matches_search(profile: &Profile, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    let text = [
        profile.name.as_str(),
        profile.role.as_str(),
        profile.summary.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    text.contains(term)
        || profile
            .technical_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(term))
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Return indices of profiles that pass all active filters, in dataset order.
pub fn filtered_indices(profiles: &[Profile], filters: &FilterState) -> Vec<usize> {
    let term = filters.search_term();
    profiles
        .iter()
        .enumerate()
        .filter(|(_, p)| filters.admits(term.as_deref(), p))
        .map(|(i, _)| i)
        .collect()
}

/// Profiles passing all active filters, in dataset order.
pub fn filtered_profiles<'a>(profiles: &'a [Profile], filters: &FilterState) -> Vec<&'a Profile> {
    filtered_indices(profiles, filters)
        .into_iter()
        .map(|i| &profiles[i])
        .collect()
}
