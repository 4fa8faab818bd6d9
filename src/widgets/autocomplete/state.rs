use crate::runtime::effect::Effect;
use crate::task::{FetchCompletion, FetchRequest};
use crate::widgets::autocomplete::presenter::{ListView, present};
use tracing::debug;

/// Query, candidates and flags behind one autocomplete instance.
///
/// Every keystroke and every selection starts a new generation; a fetch
/// result is only accepted for the generation it was issued in.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    query: String,
    candidates: Vec<String>,
    loading: bool,
    selected: bool,
    generation: u64,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn on_input_changed(&mut self, text: impl Into<String>) -> Effect {
        self.selected = false;
        self.query = text.into();
        self.candidates.clear();
        self.generation = self.generation.wrapping_add(1);

        if self.query.trim().is_empty() {
            self.loading = false;
            return Effect::CancelFetch;
        }

        self.loading = true;
        Effect::ScheduleFetch(FetchRequest::new(self.query.clone(), self.generation))
    }

    /// Applies a finished search. Returns `false` when the result was stale.
    pub fn on_fetch_resolved(&mut self, completion: FetchCompletion) -> bool {
        if completion.generation != self.generation {
            debug!(
                query = %completion.query,
                issued = completion.generation,
                current = self.generation,
                "discarding stale search result"
            );
            return false;
        }
        self.candidates = completion.candidates.unwrap_or_default();
        self.loading = false;
        true
    }

    pub fn on_option_selected(&mut self, candidate: impl Into<String>) -> Effect {
        self.query = candidate.into();
        self.candidates.clear();
        self.selected = true;
        self.loading = false;
        self.generation = self.generation.wrapping_add(1);
        Effect::CancelFetch
    }

    pub fn list_visible(&self) -> bool {
        !self.query.is_empty() && !self.selected
    }

    /// The list view, or `None` while the list is hidden.
    pub fn view(&self) -> Option<ListView> {
        if !self.list_visible() {
            return None;
        }
        Some(present(&self.query, &self.candidates, self.loading))
    }
}

#[cfg(test)]
mod tests {
    use super::AutocompleteState;
    use crate::runtime::effect::Effect;
    use crate::task::{FetchCompletion, FetchRequest};
    use crate::widgets::autocomplete::presenter::ListView;

    fn completion(request: &FetchRequest, names: &[&str]) -> FetchCompletion {
        FetchCompletion {
            query: request.query.clone(),
            generation: request.generation,
            candidates: Some(names.iter().map(|name| name.to_string()).collect()),
        }
    }

    fn scheduled(effect: Effect) -> FetchRequest {
        match effect {
            Effect::ScheduleFetch(request) => request,
            other => panic!("expected ScheduleFetch, got {other:?}"),
        }
    }

    #[test]
    fn typing_starts_loading_and_schedules_fetch() {
        let mut state = AutocompleteState::new();
        let request = scheduled(state.on_input_changed("Stark"));

        assert_eq!(request.query, "Stark");
        assert_eq!(request.generation, state.generation());
        assert!(state.is_loading());
        assert!(state.candidates().is_empty());
        assert_eq!(state.view(), Some(ListView::Fetching));
    }

    #[test]
    fn blank_input_hides_list_without_fetching() {
        let mut state = AutocompleteState::new();
        state.on_input_changed("S");

        assert_eq!(state.on_input_changed(""), Effect::CancelFetch);
        assert!(!state.is_loading());
        assert!(!state.list_visible());
        assert_eq!(state.view(), None);
    }

    #[test]
    fn whitespace_input_shows_no_results_without_fetching() {
        let mut state = AutocompleteState::new();
        assert_eq!(state.on_input_changed("  "), Effect::CancelFetch);
        assert!(!state.is_loading());
        assert_eq!(state.view(), Some(ListView::NoResults));
    }

    #[test]
    fn resolved_fetch_fills_candidates() {
        let mut state = AutocompleteState::new();
        let request = scheduled(state.on_input_changed("Targ"));

        assert!(state.on_fetch_resolved(completion(
            &request,
            &["Daenerys Targaryen", "Rhaegar Targaryen"]
        )));
        assert!(!state.is_loading());
        let view = state.view().expect("visible");
        assert_eq!(view.option_at(0), Some("Daenerys Targaryen"));
        assert_eq!(view.option_at(1), Some("Rhaegar Targaryen"));
    }

    #[test]
    fn failed_fetch_resolves_to_no_results() {
        let mut state = AutocompleteState::new();
        let request = scheduled(state.on_input_changed("Maester"));

        assert!(state.on_fetch_resolved(FetchCompletion {
            query: request.query,
            generation: request.generation,
            candidates: None,
        }));
        assert_eq!(state.view(), Some(ListView::NoResults));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = AutocompleteState::new();
        let slow = scheduled(state.on_input_changed("Tar"));
        let fresh = scheduled(state.on_input_changed("Targ"));

        assert!(!state.on_fetch_resolved(completion(&slow, &["Tarly"])));
        assert!(state.is_loading());
        assert!(state.candidates().is_empty());

        assert!(state.on_fetch_resolved(completion(&fresh, &["Rhaegar Targaryen"])));
        assert_eq!(state.candidates(), &["Rhaegar Targaryen".to_string()]);
    }

    #[test]
    fn selection_fills_query_and_hides_list_until_next_keystroke() {
        let mut state = AutocompleteState::new();
        let request = scheduled(state.on_input_changed("Lann"));
        state.on_fetch_resolved(completion(&request, &["Alton Lannister", "Cersei Lannister"]));

        assert_eq!(state.on_option_selected("Cersei Lannister"), Effect::CancelFetch);
        assert_eq!(state.query(), "Cersei Lannister");
        assert!(state.is_selected());
        assert!(state.candidates().is_empty());
        assert_eq!(state.view(), None);

        state.on_input_changed("Cersei Lanniste");
        assert!(!state.is_selected());
        assert!(state.list_visible());
    }

    #[test]
    fn fetch_finishing_after_selection_is_ignored() {
        let mut state = AutocompleteState::new();
        let request = scheduled(state.on_input_changed("Aer"));
        state.on_option_selected("Aerys Targaryen");

        assert!(!state.on_fetch_resolved(completion(&request, &["Aerys Targaryen"])));
        assert!(state.candidates().is_empty());
        assert!(!state.list_visible());
    }
}
