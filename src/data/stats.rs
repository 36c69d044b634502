use std::collections::{BTreeMap, BTreeSet};

use super::model::{Facet, Profile};

// ---------------------------------------------------------------------------
// Facet discovery over the full dataset
// ---------------------------------------------------------------------------

/// Distinct values of every facet, each sorted by code point and duplicate free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedOptions {
    pub areas: Vec<String>,
    pub locations: Vec<String>,
    pub technologies: Vec<String>,
}

impl DerivedOptions {
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Area => &self.areas,
            Facet::Location => &self.locations,
            Facet::Technology => &self.technologies,
        }
    }
}

/// Headline counts over the full (unfiltered) dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub profiles: usize,
    pub areas: usize,
    pub locations: usize,
    pub technologies: usize,
}

fn distinct<'a>(profiles: &'a [Profile], facet: Facet) -> BTreeSet<&'a str> {
    profiles
        .iter()
        .flat_map(|p| p.facet_values(facet))
        .map(String::as_str)
        .collect()
}

/// Build the option lists shown in the facet selectors.
pub fn derived_options(profiles: &[Profile]) -> DerivedOptions {
    // `str` ordering is byte-wise, which for UTF-8 is code-point order.
    let sorted = |facet: Facet| -> Vec<String> {
        distinct(profiles, facet)
            .into_iter()
            .map(str::to_string)
            .collect()
    };
    DerivedOptions {
        areas: sorted(Facet::Area),
        locations: sorted(Facet::Location),
        technologies: sorted(Facet::Technology),
    }
}

pub fn aggregate_stats(profiles: &[Profile]) -> AggregateStats {
    AggregateStats {
        profiles: profiles.len(),
        areas: distinct(profiles, Facet::Area).len(),
        locations: distinct(profiles, Facet::Location).len(),
        technologies: distinct(profiles, Facet::Technology).len(),
    }
}

/// Number of profiles carrying each value of a facet. A profile listing the
/// same technology twice is counted once for it.
pub fn facet_counts(profiles: &[Profile], facet: Facet) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for p in profiles {
        let values: BTreeSet<&String> = p.facet_values(facet).iter().collect();
        for v in values {
            *counts.entry(v.clone()).or_default() += 1;
        }
    }
    counts
}
