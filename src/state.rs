use std::collections::BTreeMap;
use std::time::Instant;

use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::data::filter::{filtered_indices, FilterPatch, FilterState};
use crate::data::loader::LoadOutcome;
use crate::data::model::{Facet, Profile};
use crate::data::stats::{aggregate_stats, derived_options, facet_counts, AggregateStats, DerivedOptions};
use crate::error::{DatasetLoadError, ValidationError};
use crate::message::MessageDraft;
use crate::toast::Toast;

// ---------------------------------------------------------------------------
// Load state machine
// ---------------------------------------------------------------------------

/// `Idle → Loading → Ready`, or `Loading → Error`. A manual reload goes back
/// to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

// ---------------------------------------------------------------------------
// Recommendation counter
// ---------------------------------------------------------------------------

/// Session-scoped recommendation counts per profile id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCounter {
    counts: BTreeMap<u32, u32>,
}

impl RecommendationCounter {
    /// Add one recommendation and return the new count.
    pub fn increment(&mut self, id: u32) -> u32 {
        let count = self.counts.entry(id).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn count(&self, id: u32) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub load_state: LoadState,

    /// Full dataset, empty unless `load_state` is `Ready`.
    profiles: Vec<Profile>,

    /// Facet option lists over the full dataset (cached per dataset).
    pub options: DerivedOptions,

    /// Headline counts over the full dataset (cached per dataset).
    pub stats: AggregateStats,

    /// Profiles per area over the full dataset (cached per dataset).
    pub area_counts: BTreeMap<String, usize>,

    /// Colour of each area.
    pub area_colors: ColorMap,

    pub filters: FilterState,

    /// Indices of profiles passing the current filters (cached).
    visible_indices: Vec<usize>,

    pub recommendations: RecommendationCounter,

    /// Id of the profile shown in the detail window.
    pub selected_profile: Option<u32>,

    /// Open message composer, if any.
    pub composer: Option<MessageDraft>,

    pub toast: Toast,

    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let toast = Toast::new(config.toast_duration);
        Self {
            config,
            load_state: LoadState::Idle,
            profiles: Vec::new(),
            options: DerivedOptions::default(),
            stats: AggregateStats::default(),
            area_counts: BTreeMap::new(),
            area_colors: ColorMap::default(),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            recommendations: RecommendationCounter::default(),
            selected_profile: None,
            composer: None,
            toast,
            dark_mode: false,
        }
    }

    // ---- Loading ----

    /// A load request went out: the dataset is treated as empty until it
    /// resolves.
    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
        self.replace_dataset(Vec::new());
    }

    /// Ingest a newly loaded dataset, rebuild option lists and stats.
    pub fn set_dataset(&mut self, profiles: Vec<Profile>) {
        self.replace_dataset(profiles);
        self.load_state = LoadState::Ready;
        log::info!(
            "Loaded {} profiles ({} areas, {} cities, {} technologies)",
            self.stats.profiles,
            self.stats.areas,
            self.stats.locations,
            self.stats.technologies
        );
    }

    /// Surface a load failure; the dataset stays empty.
    pub fn set_load_error(&mut self, err: &DatasetLoadError) {
        let chain = error_chain(err);
        log::error!("Failed to load profiles: {chain}");
        self.replace_dataset(Vec::new());
        self.load_state = LoadState::Error(format!("Could not load profiles: {chain}"));
    }

    /// Apply the result of the loader's latest request.
    pub fn finish_loading(&mut self, outcome: LoadOutcome) {
        match outcome.result {
            Ok(profiles) => self.set_dataset(profiles),
            Err(err) => self.set_load_error(&err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    fn replace_dataset(&mut self, profiles: Vec<Profile>) {
        self.options = derived_options(&profiles);
        self.stats = aggregate_stats(&profiles);
        self.area_counts = facet_counts(&profiles, Facet::Area);
        self.area_colors = ColorMap::new(&self.options.areas);
        self.profiles = profiles;
        self.selected_profile = None;
        self.composer = None;
        self.refilter();
    }

    // ---- Derived view-state ----

    pub fn aggregate_stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn derived_options(&self) -> &DerivedOptions {
        &self.options
    }

    /// Profiles passing the current filters, in dataset order.
    pub fn filtered_profiles(&self) -> Vec<&Profile> {
        self.visible_indices
            .iter()
            .filter_map(|&i| self.profiles.get(i))
            .collect()
    }

    /// The full dataset, in file order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Number of profiles passing the current filters.
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn profile(&self, id: u32) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    // ---- Filters ----

    /// Recompute `visible_indices` after a filter or dataset change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.profiles, &self.filters);
    }

    /// Merge a partial filter update and recompute the visible profiles.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
        log::debug!("Filters changed: {:?}", self.filters);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.refilter();
    }

    // ---- Recommendations ----

    pub fn increment_recommendation(&mut self, id: u32) -> u32 {
        self.recommendations.increment(id)
    }

    pub fn recommendation_count(&self, id: u32) -> u32 {
        self.recommendations.count(id)
    }

    /// Recommend a profile and confirm it with a toast.
    pub fn recommend(&mut self, id: u32, now: Instant) {
        let count = self.increment_recommendation(id);
        if let Some(name) = self.profile(id).map(|p| p.name.clone()) {
            log::info!("Recommended {name} (now {count})");
            self.toast.show(format!("You recommended {name}!"), now);
        }
    }

    // ---- Detail window and composer ----

    pub fn open_profile(&mut self, id: u32) {
        self.selected_profile = Some(id);
        self.composer = None;
    }

    pub fn close_profile(&mut self) {
        self.selected_profile = None;
        self.composer = None;
    }

    /// Open the composer for `id`, or close it if it is already open for `id`.
    pub fn toggle_composer(&mut self, id: u32) {
        self.composer = match self.composer.take() {
            Some(draft) if draft.recipient == id => None,
            _ => Some(MessageDraft::new(id)),
        };
    }

    /// Validate and "send" the open draft. On failure the draft stays open.
    pub fn submit_message(&mut self, now: Instant) -> Result<(), ValidationError> {
        let Some(draft) = &self.composer else {
            return Ok(());
        };
        match draft.validate() {
            Ok(message) => {
                let name = self
                    .profile(message.recipient)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                log::info!("Message to {name}: {:?}", message.subject);
                self.toast.show(format!("Message sent to {name}!"), now);
                self.composer = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("Message rejected: {err}");
                self.toast.show("Fill in subject and message to send.", now);
                Err(err)
            }
        }
    }
}

/// `top: cause: cause` rendering of an error and its sources.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::data::filter::Selection;
    use crate::data::model::fixtures::profile;

    fn ready_state() -> AppState {
        let mut state = AppState::default();
        state.begin_loading();
        state.set_dataset(vec![
            profile(1, "Dados", "SP", &["Python"]),
            profile(2, "Design", "RJ", &["Figma"]),
        ]);
        state
    }

    #[test]
    fn stale_visible_cache_never_indexes_past_dataset() {
        let mut state = ready_state();
        assert_eq!(state.visible_count(), 2);
        state.profiles.truncate(1);

        let ids: Vec<u32> = state.filtered_profiles().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
        state.refilter();
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn loading_suppresses_derivations() {
        let mut state = ready_state();
        state.begin_loading();
        assert!(state.is_loading());
        assert!(state.filtered_profiles().is_empty());
        assert_eq!(state.aggregate_stats(), AggregateStats::default());
        assert!(state.derived_options().areas.is_empty());
    }

    #[test]
    fn ready_state_derives_from_full_dataset() {
        let mut state = ready_state();
        state.set_filters(FilterPatch::facet(Facet::Area, Selection::Only("Dados".into())));

        assert_eq!(state.filtered_profiles().len(), 1);
        assert_eq!(state.aggregate_stats().areas, 2);
        assert_eq!(state.derived_options().technologies, vec!["Figma", "Python"]);
        assert_eq!(state.area_counts["Design"], 1);
    }

    #[test]
    fn empty_result_is_not_loading() {
        let mut state = ready_state();
        state.set_filters(FilterPatch::search("nobody"));
        assert!(state.filtered_profiles().is_empty());
        assert_eq!(state.load_state, LoadState::Ready);
    }

    #[test]
    fn load_error_keeps_dataset_empty() {
        let mut state = ready_state();
        state.begin_loading();
        state.finish_loading(LoadOutcome {
            generation: 1,
            path: PathBuf::from("data/professionals.json"),
            result: Err(DatasetLoadError::WorkerLost),
        });

        assert!(state.profiles.is_empty());
        assert_eq!(state.aggregate_stats(), AggregateStats::default());
        let msg = state.error_message().unwrap();
        assert!(msg.contains("stopped before reporting"), "{msg}");
    }

    #[test]
    fn recommendations_are_per_profile() {
        let mut state = ready_state();
        state.increment_recommendation(1);
        state.increment_recommendation(1);
        assert_eq!(state.recommendation_count(1), 2);
        assert_eq!(state.recommendation_count(2), 0);
    }

    #[test]
    fn recommend_shows_toast() {
        let now = Instant::now();
        let mut state = ready_state();
        state.recommend(2, now);
        assert_eq!(state.recommendation_count(2), 1);
        assert_eq!(state.toast.message(now), Some("You recommended Person 2!"));
    }

    #[test]
    fn composer_toggles_per_profile() {
        let mut state = ready_state();
        state.open_profile(1);
        state.toggle_composer(1);
        assert_eq!(state.composer.as_ref().map(|d| d.recipient), Some(1));
        state.toggle_composer(1);
        assert!(state.composer.is_none());

        state.toggle_composer(1);
        state.close_profile();
        assert!(state.composer.is_none());
        assert!(state.selected_profile.is_none());
    }

    #[test]
    fn invalid_message_keeps_draft_open() {
        let now = Instant::now();
        let mut state = ready_state();
        state.toggle_composer(1);
        if let Some(draft) = state.composer.as_mut() {
            draft.subject = "Hello".into();
        }
        assert_eq!(state.submit_message(now), Err(ValidationError::MissingBody));
        assert!(state.composer.is_some());
        assert_eq!(
            state.toast.message(now),
            Some("Fill in subject and message to send.")
        );
    }

    #[test]
    fn valid_message_closes_composer() {
        let now = Instant::now();
        let mut state = ready_state();
        state.toggle_composer(2);
        if let Some(draft) = state.composer.as_mut() {
            draft.subject = "Invite".into();
            draft.body = "Join our project".into();
        }
        assert_eq!(state.submit_message(now), Ok(()));
        assert!(state.composer.is_none());
        assert_eq!(state.toast.message(now), Some("Message sent to Person 2!"));
        assert_eq!(state.toast.message(now + Duration::from_secs(4)), None);
    }
}
