//! Quick match: pick roles, then poll the role browse directory until a
//! compatible member shows up.
//!
//! The search is a cancellable timed task. Cancellation is an explicit
//! [`CancellationToken`] checked before every attempt and raced against
//! every request and every sleep, so a cancelled search makes no further
//! network calls.

use crate::toast::ToastSink;
use familia_core::config::QuickMatchSettings;
use familia_core::error::{FamiliaError, Result};
use familia_core::gateway::MatchingGateway;
use familia_core::matching::{BrowseProfile, MatchPhase, Role, RoleBrowseQuery, normalize_role};
use familia_core::profile::Relationship;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::time::{Instant, sleep, sleep_until};
use tokio_util::sync::CancellationToken;

pub struct QuickMatch {
    matching: Arc<dyn MatchingGateway>,
    toasts: Arc<dyn ToastSink>,
    settings: QuickMatchSettings,
    authenticated: bool,
    phase: Mutex<MatchPhase>,
}

fn parse_role(field: &str, role: &str) -> Result<String> {
    Role::from_str(role.trim())
        .map(|r| r.to_string())
        .map_err(|_| FamiliaError::validation(field, format!("Unknown role '{}'", role.trim())))
}

impl QuickMatch {
    pub fn new(
        matching: Arc<dyn MatchingGateway>,
        toasts: Arc<dyn ToastSink>,
        settings: QuickMatchSettings,
    ) -> Self {
        Self {
            matching,
            toasts,
            settings,
            authenticated: false,
            phase: Mutex::new(MatchPhase::SelectRole),
        }
    }

    /// Use the authenticated browse endpoint.
    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    pub fn settings(&self) -> &QuickMatchSettings {
        &self.settings
    }

    fn lock_phase(&self) -> MutexGuard<'_, MatchPhase> {
        // every write leaves a complete phase behind, so a poisoned lock is still consistent
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn phase(&self) -> MatchPhase {
        self.lock_phase().clone()
    }

    fn set_phase(&self, next: MatchPhase) {
        tracing::debug!(phase = next.name(), "Quick match phase");
        *self.lock_phase() = next;
    }

    /// Chooses the role the member offers and moves on to the partner role.
    pub fn choose_my_role(&self, role: &str) -> Result<()> {
        let my_role = parse_role("my_role", role)?;
        let mut phase = self.lock_phase();
        if phase.is_searching() {
            return Err(FamiliaError::validation("my_role", "A search is already running"));
        }
        *phase = MatchPhase::SelectPartner { my_role };
        Ok(())
    }

    /// Steps back one screen: results return to partner selection,
    /// partner selection returns to role selection.
    pub fn back(&self) {
        let mut phase = self.lock_phase();
        let next = match &*phase {
            MatchPhase::SelectPartner { .. } | MatchPhase::SelectRole => MatchPhase::SelectRole,
            MatchPhase::Searching { my_role, .. }
            | MatchPhase::Found { my_role, .. }
            | MatchPhase::NotFound { my_role, .. } => MatchPhase::SelectPartner {
                my_role: my_role.clone(),
            },
        };
        tracing::debug!(phase = next.name(), "Quick match phase");
        *phase = next;
    }

    /// Moves into `Searching` if the flow is ready for a search.
    /// Returns the member's own role.
    fn begin_search(&self, partner_role: &str) -> Result<String> {
        let mut phase = self.lock_phase();
        let my_role = match &*phase {
            MatchPhase::SelectPartner { my_role }
            | MatchPhase::Found { my_role, .. }
            | MatchPhase::NotFound { my_role, .. } => my_role.clone(),
            MatchPhase::SelectRole => {
                return Err(FamiliaError::validation("my_role", "Choose your role first"));
            }
            MatchPhase::Searching { .. } => {
                return Err(FamiliaError::validation("partner_role", "A search is already running"));
            }
        };
        *phase = MatchPhase::Searching {
            my_role: my_role.clone(),
            partner_role: partner_role.to_string(),
        };
        Ok(my_role)
    }

    /// Runs one search for members offering `partner_role`.
    ///
    /// Returns the phase the search ended in: `Found`, `NotFound`, or
    /// `SelectPartner` when cancelled. Request errors are surfaced as a
    /// toast and end in `NotFound` without a retry.
    ///
    /// # Errors
    ///
    /// `Validation` when no own role was chosen or the partner role is unknown.
    pub async fn search(&self, partner_role: &str, cancel: CancellationToken) -> Result<MatchPhase> {
        let partner_role = parse_role("partner_role", partner_role)?;
        let my_role = self.begin_search(&partner_role)?;

        let started = Instant::now();
        let query = RoleBrowseQuery::new(partner_role.clone(), self.authenticated);
        tracing::info!(%my_role, %partner_role, "Quick match search started");

        let max_attempts = self.settings.max_attempts;
        for attempt in 1..=max_attempts {
            if cancel.is_cancelled() {
                return Ok(self.cancelled(my_role));
            }

            tracing::debug!(attempt, max_attempts, "Browsing for partner");
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(self.cancelled(my_role)),
                result = self.matching.browse(&query) => result,
            };

            match result {
                Ok(raw) => {
                    let matches = query.filter(raw);
                    if !matches.is_empty() {
                        if !self.wait_min_duration(started, &cancel).await {
                            return Ok(self.cancelled(my_role));
                        }
                        tracing::info!(count = matches.len(), attempt, "Quick match found");
                        let phase = MatchPhase::Found {
                            my_role,
                            partner_role,
                            matches,
                        };
                        self.set_phase(phase.clone());
                        return Ok(phase);
                    }
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Quick match browse failed");
                    self.toasts.error(&e.user_message());
                    let phase = MatchPhase::NotFound {
                        my_role,
                        partner_role,
                    };
                    self.set_phase(phase.clone());
                    return Ok(phase);
                }
            }

            if attempt < max_attempts {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Ok(self.cancelled(my_role)),
                    _ = sleep(self.settings.poll_interval()) => {}
                }
            }
        }

        if !self.wait_min_duration(started, &cancel).await {
            return Ok(self.cancelled(my_role));
        }
        tracing::info!(max_attempts, "Quick match found nobody");
        let phase = MatchPhase::NotFound {
            my_role,
            partner_role,
        };
        self.set_phase(phase.clone());
        Ok(phase)
    }

    fn cancelled(&self, my_role: String) -> MatchPhase {
        tracing::info!("Quick match search cancelled");
        let phase = MatchPhase::SelectPartner { my_role };
        self.set_phase(phase.clone());
        phase
    }

    /// Holds results back until the minimum search time has passed.
    /// Returns `false` if cancelled while waiting.
    async fn wait_min_duration(&self, started: Instant, cancel: &CancellationToken) -> bool {
        let ready_at = started + self.settings.min_search_duration();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            _ = sleep_until(ready_at) => true,
        }
    }

    /// Full directory of members offering any role, unfiltered.
    pub async fn browse_all(&self) -> Result<Vec<BrowseProfile>> {
        self.matching.browse_all().await.inspect_err(|e| {
            self.toasts.error(&e.user_message());
        })
    }

    /// Turns a found member into a relationship in the role the member asked for.
    pub async fn connect(&self, target_user_id: &str, role: &str) -> Result<Relationship> {
        let role = normalize_role(role);
        match self.matching.connect(target_user_id, &role).await {
            Ok(relationship) => {
                tracing::info!(%target_user_id, %role, relationship_id = %relationship.id, "Connected");
                self.toasts.info("New bond created!");
                Ok(relationship)
            }
            Err(e) => {
                self.toasts.error(&e.user_message());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CallCounts, MockBackend, candidate};
    use crate::toast::RecordingToasts;
    use std::time::Duration;

    fn flow(backend: &Arc<MockBackend>, toasts: &Arc<RecordingToasts>) -> QuickMatch {
        let flow = QuickMatch::new(
            backend.clone(),
            toasts.clone(),
            QuickMatchSettings::default(),
        );
        flow.choose_my_role("sister").unwrap();
        flow
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_exceeds_max_attempts() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = flow(&backend, &toasts);

        let phase = flow.search("brother", CancellationToken::new()).await.unwrap();

        assert!(matches!(phase, MatchPhase::NotFound { .. }));
        assert_eq!(CallCounts::get(&backend.calls.browse), 12);
        assert!(toasts.errors().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_hit_waits_for_min_duration() {
        let backend = Arc::new(MockBackend::new());
        backend.push_browse(Ok(vec![candidate("p1", Some("brother"))]));
        let toasts = Arc::new(RecordingToasts::new());
        let flow = flow(&backend, &toasts);

        let started = Instant::now();
        let phase = flow.search("brother", CancellationToken::new()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert_eq!(phase.matches().len(), 1);
        assert_eq!(CallCounts::get(&backend.calls.browse), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_further_attempts() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = Arc::new(flow(&backend, &toasts));
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let flow = flow.clone();
            let cancel = cancel.clone();
            async move { flow.search("brother", cancel).await }
        });

        // attempts at 0s and 2s, then cancel while sleeping towards 4s
        sleep(Duration::from_millis(3000)).await;
        assert!(flow.phase().is_searching());
        cancel.cancel();
        let phase = task.await.unwrap().unwrap();

        assert_eq!(
            phase,
            MatchPhase::SelectPartner {
                my_role: "sister".into()
            }
        );
        let calls = CallCounts::get(&backend.calls.browse);
        assert_eq!(calls, 2);

        sleep(Duration::from_secs(30)).await;
        assert_eq!(CallCounts::get(&backend.calls.browse), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_min_wait_drops_results() {
        let backend = Arc::new(MockBackend::new());
        backend.push_browse(Ok(vec![candidate("p1", Some("brother"))]));
        let toasts = Arc::new(RecordingToasts::new());
        let flow = Arc::new(flow(&backend, &toasts));
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let flow = flow.clone();
            let cancel = cancel.clone();
            async move { flow.search("brother", cancel).await }
        });
        sleep(Duration::from_millis(1000)).await;
        cancel.cancel();

        let phase = task.await.unwrap().unwrap();
        assert!(phase.matches().is_empty());
        assert!(!phase.is_terminal());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filtered_out_results_count_as_empty() {
        let backend = Arc::new(MockBackend::new());
        backend.push_browse(Ok(vec![candidate("p1", Some("mentor")), candidate("p2", None)]));
        backend.push_browse(Ok(vec![candidate("p3", Some("Brother "))]));
        let toasts = Arc::new(RecordingToasts::new());
        let flow = QuickMatch::new(
            backend.clone(),
            toasts.clone(),
            QuickMatchSettings::default(),
        );
        flow.choose_my_role("Sister").unwrap();

        let phase = flow.search("sibling", CancellationToken::new()).await.unwrap();

        assert_eq!(CallCounts::get(&backend.calls.browse), 2);
        let ids: Vec<&str> = phase.matches().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["p3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_error_ends_search_with_toast() {
        let backend = Arc::new(MockBackend::new());
        backend.push_browse(Err(FamiliaError::network("connection refused")));
        let toasts = Arc::new(RecordingToasts::new());
        let flow = flow(&backend, &toasts);

        let phase = flow.search("brother", CancellationToken::new()).await.unwrap();

        assert!(matches!(phase, MatchPhase::NotFound { .. }));
        assert_eq!(CallCounts::get(&backend.calls.browse), 1);
        assert_eq!(toasts.errors(), vec!["Could not reach the Familia server"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sibling_matches_brother_but_mentor_does_not() {
        let pool = || Ok(vec![candidate("p-brother", Some("brother"))]);
        let toasts = Arc::new(RecordingToasts::new());

        let backend = Arc::new(MockBackend::new());
        backend.push_browse(pool());
        let sibling_flow = flow(&backend, &toasts);
        let found = sibling_flow
            .search("sibling", CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(found.matches()[0].id, "p-brother");

        let backend = Arc::new(MockBackend::new());
        for _ in 0..12 {
            backend.push_browse(pool());
        }
        let mentor_flow = flow(&backend, &toasts);
        let missed = mentor_flow
            .search("mentor", CancellationToken::new())
            .await
            .unwrap();
        assert!(missed.matches().is_empty());
        assert!(matches!(missed, MatchPhase::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_requires_own_role_and_known_partner_role() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = QuickMatch::new(backend.clone(), toasts.clone(), QuickMatchSettings::default());

        let err = flow.search("brother", CancellationToken::new()).await.unwrap_err();
        assert!(err.is_validation());

        flow.choose_my_role("sister").unwrap();
        let err = flow.search("cousin", CancellationToken::new()).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(CallCounts::get(&backend.calls.browse), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_searches_only_one_starts() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let settings = QuickMatchSettings {
            poll_interval_ms: 200,
            max_attempts: 3,
            min_search_duration_ms: 0,
        };
        let flow = Arc::new(QuickMatch::new(backend.clone(), toasts.clone(), settings));
        flow.choose_my_role("sister").unwrap();
        let barrier = Arc::new(tokio::sync::Barrier::new(2));

        let tasks: Vec<_> = (0..2)
            .map(|_| {
                let flow = flow.clone();
                let barrier = barrier.clone();
                tokio::spawn(async move {
                    barrier.wait().await;
                    flow.search("brother", CancellationToken::new()).await
                })
            })
            .collect();

        let mut started = 0;
        let mut rejected = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(phase) => {
                    assert!(matches!(phase, MatchPhase::NotFound { .. }));
                    started += 1;
                }
                Err(e) => {
                    assert!(e.is_validation());
                    rejected += 1;
                }
            }
        }
        assert_eq!((started, rejected), (1, 1));
        assert_eq!(CallCounts::get(&backend.calls.browse), 3);
    }

    #[test]
    fn test_poisoned_phase_lock_keeps_last_phase() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = Arc::new(flow(&backend, &toasts));

        let poisoner = flow.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.phase.lock().unwrap();
            panic!("poison the phase lock");
        })
        .join();

        assert_eq!(flow.phase().name(), "select-partner-role");
        flow.back();
        assert_eq!(flow.phase(), MatchPhase::SelectRole);
    }

    #[test]
    fn test_back_navigation() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = flow(&backend, &toasts);

        assert_eq!(flow.phase().name(), "select-partner-role");
        flow.back();
        assert_eq!(flow.phase(), MatchPhase::SelectRole);
        assert!(flow.choose_my_role("auntie").is_err());
    }

    #[tokio::test]
    async fn test_connect_normalizes_role() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let flow = flow(&backend, &toasts);

        let relationship = flow.connect("p1", " Brother ").await.unwrap();

        assert_eq!(relationship.id, "rel-p1");
        assert_eq!(
            backend.connected.lock().unwrap()[0],
            ("p1".to_string(), "brother".to_string())
        );
    }
}
