use super::event::{AppEvent, Key};
use super::mode::AppMode;
use super::render_state::{RenderState, ReselectView};
use crate::config::EditorConfig;
use crate::formula::{
    can_append, classify, evaluate, format_result, FormulaStore, TokenId, TokenKind,
};
use crate::suggest::filter::find_by_name_ignore_case;
use crate::suggest::{lookup_query, Lookup, Suggestion, SuggestionService};
use std::time::Instant;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

const FULL_LIST: &str = "";

struct Reselection {
    token_id: TokenId,
    candidate: Option<usize>,
}

/// Input controller: turns key, text and pick events into formula edits and
/// keeps the suggestion dropdown in sync with the debounced query.
pub struct App {
    mode: AppMode,
    store: FormulaStore,
    service: SuggestionService,
    config: EditorConfig,
    input: String,
    show_suggestions: bool,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
    /// Query whose results may be displayed; anything else is stale.
    active_query: Option<String>,
    pending_query: Option<(String, Instant)>,
    loading: bool,
    reselection: Option<Reselection>,
}

impl App {
    pub fn new(service: SuggestionService, config: EditorConfig) -> Self {
        Self::new_at(service, config, Instant::now())
    }

    pub fn new_at(service: SuggestionService, config: EditorConfig, now: Instant) -> Self {
        let mut app = Self {
            mode: AppMode::Editing,
            store: FormulaStore::new(),
            service,
            config,
            input: String::new(),
            show_suggestions: false,
            suggestions: Vec::new(),
            highlighted: None,
            active_query: None,
            pending_query: None,
            loading: false,
            reselection: None,
        };
        app.service.request(FULL_LIST, now);
        app.service.poll(now);
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn store(&self) -> &FormulaStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_showing_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Most recent unfiltered list, used to resolve typed tag names.
    pub fn all_suggestions(&self) -> &[Suggestion] {
        self.service.last_known(FULL_LIST).unwrap_or(&[])
    }

    pub fn result(&self) -> f64 {
        evaluate(self.store.formula())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_at(event, Instant::now());
    }

    pub fn handle_event_at(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::InputChanged(text) => {
                self.input = text;
                self.on_input_changed(now);
            }
            AppEvent::TypeChar(c) => {
                self.input.push(c);
                self.on_input_changed(now);
            }
            AppEvent::Key(key) => self.handle_key(key, now),
            AppEvent::SuggestionPicked(suggestion) => self.pick(suggestion),
            AppEvent::PickHighlighted => {
                let picked = self
                    .highlighted
                    .filter(|_| self.show_suggestions)
                    .and_then(|index| self.suggestions.get(index))
                    .cloned();
                if let Some(suggestion) = picked {
                    self.pick(suggestion);
                }
            }
            AppEvent::HighlightNext => self.move_highlight(1),
            AppEvent::HighlightPrevious => self.move_highlight(-1),
            AppEvent::Reselect { token_id, name } => self.reselect(token_id, &name),
            AppEvent::BeginReselect => self.begin_reselect(),
            AppEvent::FocusNextTag => self.move_tag_focus(1),
            AppEvent::FocusPreviousTag => self.move_tag_focus(-1),
            AppEvent::CandidateNext => self.move_candidate(1),
            AppEvent::CandidatePrevious => self.move_candidate(-1),
            AppEvent::ApplyCandidate => self.apply_candidate(),
            AppEvent::Cancel => {
                if self.mode == AppMode::Reselecting {
                    self.end_reselect();
                } else {
                    self.show_suggestions = false;
                }
            }
            AppEvent::Clear => {
                self.end_reselect();
                self.store.clear_formula();
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
    }

    /// Fires a due debounced lookup and takes in finished fetches.
    pub fn tick(&mut self, now: Instant) {
        if let Some((query, due)) = self.pending_query.take() {
            if now >= due {
                self.start_lookup(query, now);
            } else {
                self.pending_query = Some((query, due));
            }
        }

        if self.service.cached(FULL_LIST, now).is_none() && !self.service.is_in_flight(FULL_LIST)
        {
            self.service.request(FULL_LIST, now);
        }

        for fetched in self.service.poll(now) {
            if self.active_query.as_deref() == Some(fetched.query.as_str()) {
                self.show_results(fetched.suggestions);
            } else if !fetched.query.is_empty() {
                debug!(query = %fetched.query, "dropping stale suggestions");
            }
        }
    }

    fn on_input_changed(&mut self, now: Instant) {
        let trimmed = self.input.trim();
        self.show_suggestions = !trimmed.is_empty() && classify(trimmed) == TokenKind::Tag;

        let query = lookup_query(&self.input);
        if query.is_empty() {
            self.pending_query = None;
            self.active_query = None;
            self.loading = false;
            self.suggestions.clear();
            self.highlighted = None;
        } else {
            if self.active_query.as_deref() != Some(query.as_str()) {
                self.active_query = None;
                self.loading = false;
            }
            self.pending_query = Some((query, now + self.config.debounce()));
        }
    }

    fn start_lookup(&mut self, query: String, now: Instant) {
        let lookup = self.service.request(&query, now);
        self.active_query = Some(query);
        match lookup {
            Lookup::Ready(suggestions) => self.show_results(suggestions),
            Lookup::Pending => self.loading = true,
        }
    }

    fn show_results(&mut self, suggestions: Vec<Suggestion>) {
        self.loading = false;
        self.highlighted = if suggestions.is_empty() { None } else { Some(0) };
        self.suggestions = suggestions;
    }

    fn handle_key(&mut self, key: Key, now: Instant) {
        if self.input.trim().is_empty() {
            match key {
                Key::Backspace => {
                    if let Some(id) = self.store.last().map(|token| token.id) {
                        self.store.remove_tag(id);
                    }
                    self.pop_grapheme(now);
                }
                Key::Space => self.handle_event_at(AppEvent::TypeChar(' '), now),
                Key::Enter => {}
            }
            return;
        }

        match key {
            Key::Backspace => self.pop_grapheme(now),
            Key::Enter | Key::Space => {
                if !self.commit(key) && key == Key::Space {
                    self.handle_event_at(AppEvent::TypeChar(' '), now);
                }
            }
        }
    }

    fn pop_grapheme(&mut self, now: Instant) {
        if let Some((offset, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(offset);
            self.on_input_changed(now);
        }
    }

    /// Appends the typed text if the key and sequence allow it.
    fn commit(&mut self, key: Key) -> bool {
        let value = self.input.trim().to_string();
        let kind = classify(&value);

        let triggered = key == Key::Enter || (key == Key::Space && kind == TokenKind::Operand);
        if !triggered || !can_append(kind, self.store.last()) {
            debug!(value = %value, ?kind, "commit rejected");
            return false;
        }

        let suggestion = if kind == TokenKind::Tag {
            find_by_name_ignore_case(self.all_suggestions(), &value).cloned()
        } else {
            None
        };
        self.store.add_tag(value, kind, suggestion);
        self.reset_input();
        true
    }

    fn pick(&mut self, suggestion: Suggestion) {
        if !can_append(TokenKind::Tag, self.store.last()) {
            return;
        }
        self.store
            .add_tag(suggestion.name.clone(), TokenKind::Tag, Some(suggestion));
        self.reset_input();
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.show_suggestions = false;
        self.suggestions.clear();
        self.highlighted = None;
        self.active_query = None;
        self.pending_query = None;
        self.loading = false;
    }

    fn move_highlight(&mut self, delta: isize) {
        self.highlighted = step(self.highlighted, delta, self.suggestions.len());
    }

    fn reselect(&mut self, token_id: TokenId, name: &str) {
        if name.is_empty() {
            return;
        }
        let is_tag = self
            .store
            .get(token_id)
            .is_some_and(|token| token.kind == TokenKind::Tag);
        if !is_tag {
            return;
        }
        let suggestion = self
            .all_suggestions()
            .iter()
            .find(|suggestion| suggestion.name == name)
            .cloned();
        self.store.update_tag(token_id, name, suggestion);
    }

    fn tag_ids(&self) -> Vec<TokenId> {
        self.store
            .formula()
            .iter()
            .filter(|token| token.kind == TokenKind::Tag)
            .map(|token| token.id)
            .collect()
    }

    fn candidate_for(&self, token_id: TokenId) -> Option<usize> {
        let all = self.all_suggestions();
        let current = self.store.get(token_id).map(|token| token.value.as_str());
        current
            .and_then(|name| all.iter().position(|suggestion| suggestion.name == name))
            .or(if all.is_empty() { None } else { Some(0) })
    }

    fn focus(&mut self, token_id: TokenId) {
        let candidate = self.candidate_for(token_id);
        self.reselection = Some(Reselection {
            token_id,
            candidate,
        });
        self.mode = AppMode::Reselecting;
    }

    fn begin_reselect(&mut self) {
        if let Some(&last) = self.tag_ids().last() {
            self.show_suggestions = false;
            self.focus(last);
        }
    }

    fn move_tag_focus(&mut self, delta: isize) {
        let Some(current) = self.reselection.as_ref().map(|r| r.token_id) else {
            return;
        };
        let ids = self.tag_ids();
        let Some(position) = ids.iter().position(|&id| id == current) else {
            self.end_reselect();
            return;
        };
        let next = position as isize + delta;
        if let Some(&id) = usize::try_from(next).ok().and_then(|i| ids.get(i)) {
            self.focus(id);
        }
    }

    fn move_candidate(&mut self, delta: isize) {
        let count = self.all_suggestions().len();
        if let Some(reselection) = self.reselection.as_mut() {
            reselection.candidate = step(reselection.candidate, delta, count);
        }
    }

    fn apply_candidate(&mut self) {
        let chosen = self.reselection.as_ref().and_then(|r| {
            r.candidate
                .and_then(|index| self.all_suggestions().get(index))
                .map(|suggestion| (r.token_id, suggestion.name.clone()))
        });
        if let Some((token_id, name)) = chosen {
            self.reselect(token_id, &name);
        }
        self.end_reselect();
    }

    fn end_reselect(&mut self) {
        self.reselection = None;
        if self.mode == AppMode::Reselecting {
            self.mode = AppMode::Editing;
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let reselect = self.reselection.as_ref().map(|r| ReselectView {
            token_id: r.token_id,
            candidates: self.all_suggestions().to_vec(),
            selected: r.candidate,
        });

        RenderState {
            mode: self.mode,
            tokens: self.store.formula().to_vec(),
            input: self.input.clone(),
            suggestions: self.suggestions.clone(),
            show_suggestions: self.show_suggestions,
            loading: self.loading,
            highlighted: self.highlighted,
            result: format_result(self.result()),
            reselect,
        }
    }
}

/// Moves a wrapping selection cursor through `len` entries.
fn step(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let next = match current {
        Some(index) => (index as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    Some(next as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(Some(2), 1, 3), Some(0));
        assert_eq!(step(Some(0), -1, 3), Some(2));
        assert_eq!(step(None, 1, 3), Some(0));
        assert_eq!(step(None, -1, 3), Some(2));
        assert_eq!(step(Some(1), 1, 0), None);
    }
}
