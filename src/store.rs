//! The new request store: form state plus the actions that call the API
//!
//! State sits behind a mutex that is never held across an await, so the
//! view layer can read it, mutate it, or cancel an analysis while a request
//! is in flight.

use anyhow::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

use crate::api::{NameAnalysisQuery, NameRequestApi};
use crate::state::{
    normalize_word_case, AnalysisJson, SearchStage, Stats, ValidationError, WizardState,
};

/// How a call to [`NewRequestStore::start_analyze_name`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeOutcome {
    /// The form did not validate; nothing was sent
    Invalid(Vec<ValidationError>),
    /// The analysis was stored and the results stage is showing
    Completed(AnalysisJson),
    /// The request was cancelled before a response arrived
    Cancelled,
    /// A response arrived after a reset or newer submission and was dropped
    Superseded,
}

pub struct NewRequestStore<A> {
    api: A,
    state: Mutex<WizardState>,
    cancel: Mutex<CancellationToken>,
    generation: AtomicU64,
}

impl<A: NameRequestApi> NewRequestStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, WizardState::default())
    }

    pub fn with_state(api: A, state: WizardState) -> Self {
        Self {
            api,
            state: Mutex::new(state),
            cancel: Mutex::new(CancellationToken::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Lock the form state for reading or mutation
    pub fn state(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current form state
    pub fn snapshot(&self) -> WizardState {
        self.state().clone()
    }

    fn current_token(&self) -> CancellationToken {
        self.cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cancel every request bound to the current token and start a new one
    fn rotate_token(&self) {
        let mut token = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        token.cancel();
        *token = CancellationToken::new();
    }

    /// Invalidate any in-flight response. Caller holds the state lock.
    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch usage statistics and keep them in state
    pub async fn get_stats(&self) -> Result<Stats> {
        let stats = self.api.get_stats().await?;
        self.state().set_stats(stats.clone());
        Ok(stats)
    }

    /// Validate the form and, when it passes, send the name for analysis
    pub async fn start_analyze_name(&self) -> Result<AnalyzeOutcome> {
        let (query, generation, token) = {
            let mut state = self.state();
            if !state.validate() {
                tracing::debug!(errors = ?state.errors, "name request failed validation");
                return Ok(AnalyzeOutcome::Invalid(state.errors.clone()));
            }
            let name = normalize_word_case(&state.name);
            state.set_name(&name);
            state.set_search_show_stage(SearchStage::Analyzing);
            let query = NameAnalysisQuery {
                name,
                location: state.location,
                entity_type: state.entity_type.clone(),
                request_type: state.request_type.clone(),
            };
            (query, self.bump_generation(), self.current_token())
        };

        tracing::info!(
            name = %query.name,
            location = query.location.as_str(),
            entity_type = %query.entity_type,
            request_type = %query.request_type,
            generation,
            "starting name analysis"
        );

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::info!(generation, "name analysis cancelled");
                return Ok(AnalyzeOutcome::Cancelled);
            }
            result = self.api.analyze_name(&query) => result,
        };

        let mut state = self.state();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                generation,
                failed = result.is_err(),
                "discarding stale name analysis"
            );
            return Ok(AnalyzeOutcome::Superseded);
        }
        let analysis = result?;
        state.set_analysis(analysis.clone());
        state.set_search_show_stage(SearchStage::Results);
        tracing::info!(
            status = %analysis.status,
            issues = analysis.issues.len(),
            "name analysis complete"
        );
        Ok(AnalyzeOutcome::Completed(analysis))
    }

    /// Abort the in-flight analysis and return to the search form
    pub fn stop_analyze_name(&self) {
        let mut state = self.state();
        self.bump_generation();
        self.rotate_token();
        state.reset_search();
        tracing::info!("name analysis stopped");
    }

    /// Clear results and return to the search form without touching the network
    pub fn start_again(&self) {
        let mut state = self.state();
        self.bump_generation();
        state.reset_search();
    }
}
