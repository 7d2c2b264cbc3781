#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;

    use crate::core::animation::testing::{ManualScheduler, RecordingSink};
    use crate::core::animation::{
        ElementStyle, EntranceTarget, Playback, PlaybackState, WillChange, entrance_timeline,
    };
    use crate::core::notify::{Notifier, Toast, ToastKind};
    use crate::core::waitlist::{
        EmailError, GENERIC_FAILURE, JOINED_MESSAGE, JoinRequest, SubmissionFlow, SubmissionStore,
        SubmitOutcome, WaitlistClient, WaitlistError,
    };

    // ========================================================================
    // Fakes
    // ========================================================================

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct SubmissionState {
        email: String,
        is_submitting: bool,
    }

    /// In-memory store, detachable to mimic a torn-down view
    #[derive(Clone, Debug)]
    struct LocalStore {
        state: Rc<RefCell<SubmissionState>>,
        attached: Rc<Cell<bool>>,
    }

    impl LocalStore {
        fn new() -> Self {
            Self {
                state: Rc::new(RefCell::new(SubmissionState::default())),
                attached: Rc::new(Cell::new(true)),
            }
        }

        fn snapshot(&self) -> SubmissionState {
            self.state.borrow().clone()
        }

        fn detach(&self) {
            self.attached.set(false);
        }
    }

    impl SubmissionStore for LocalStore {
        fn email(&self) -> String {
            self.state.borrow().email.clone()
        }

        fn set_email(&self, email: String) {
            self.state.borrow_mut().email = email;
        }

        fn is_submitting(&self) -> bool {
            self.state.borrow().is_submitting
        }

        fn set_submitting(&self, submitting: bool) {
            self.state.borrow_mut().is_submitting = submitting;
        }

        fn is_attached(&self) -> bool {
            self.attached.get()
        }
    }

    #[derive(Clone)]
    struct FakeClient {
        calls: Rc<RefCell<Vec<JoinRequest>>>,
        result: Rc<RefCell<Result<(), WaitlistError>>>,
        gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
    }

    impl FakeClient {
        fn answering(result: Result<(), WaitlistError>) -> Self {
            Self {
                calls: Rc::new(RefCell::new(Vec::new())),
                result: Rc::new(RefCell::new(result)),
                gate: Rc::new(RefCell::new(None)),
            }
        }

        fn ok() -> Self {
            Self::answering(Ok(()))
        }

        /// Hold the next request until the returned sender fires
        fn gated(self) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            *self.gate.borrow_mut() = Some(rx);
            (self, tx)
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl WaitlistClient for FakeClient {
        async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError> {
            self.calls.borrow_mut().push(request.clone());
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.result.borrow().clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    impl RecordingNotifier {
        fn all(&self) -> Vec<Toast> {
            self.toasts.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    fn flow(
        client: FakeClient,
    ) -> (
        SubmissionFlow<LocalStore, FakeClient, RecordingNotifier>,
        LocalStore,
        RecordingNotifier,
    ) {
        let store = LocalStore::new();
        let notifier = RecordingNotifier::default();
        let flow = SubmissionFlow::new(store.clone(), client, notifier.clone());
        (flow, store, notifier)
    }

    // ========================================================================
    // Submission flow
    // ========================================================================

    #[test]
    fn test_flow_starts_idle() {
        let (flow, store, notifier) = flow(FakeClient::ok());
        assert_eq!(store.snapshot(), SubmissionState::default());
        assert!(store.is_attached());

        flow.set_email("user@example.com");
        assert_eq!(store.email(), "user@example.com");
        assert!(!store.is_submitting());
        assert!(notifier.all().is_empty());
    }

    #[test]
    fn test_empty_email_never_hits_network() {
        let client = FakeClient::ok();
        let (flow, store, notifier) = flow(client.clone());

        let outcome = block_on(flow.submit());

        assert_eq!(outcome, SubmitOutcome::Invalid(EmailError::Empty));
        assert_eq!(client.call_count(), 0);
        assert_eq!(
            notifier.all(),
            vec![Toast::error("Please enter your email address")]
        );
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_malformed_email_never_hits_network() {
        for email in ["abc", "a@b", "a@.com", "user@exa mple.com", "x@y@z.com"] {
            let client = FakeClient::ok();
            let (flow, store, notifier) = flow(client.clone());
            flow.set_email(email);

            let outcome = block_on(flow.submit());

            assert_eq!(outcome, SubmitOutcome::Invalid(EmailError::Malformed));
            assert_eq!(client.call_count(), 0, "{:?} reached the network", email);
            assert_eq!(
                notifier.all(),
                vec![Toast::error("Please enter a valid email address")]
            );
            assert_eq!(store.email(), email);
        }
    }

    #[test]
    fn test_successful_join() {
        let client = FakeClient::ok();
        let (flow, store, notifier) = flow(client.clone());
        flow.set_email("user@example.com");

        let outcome = block_on(flow.submit());

        assert_eq!(outcome, SubmitOutcome::Joined);
        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_string(&calls[0]).unwrap(),
            r#"{"email":"user@example.com"}"#
        );

        let state = store.snapshot();
        assert!(!state.is_submitting);
        assert_eq!(state.email, "");

        let toasts = notifier.all();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, JOINED_MESSAGE);
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let client = FakeClient::answering(Err(WaitlistError::Rejected {
            status: 409,
            message: Some("Already registered".to_string()),
        }));
        let (flow, store, notifier) = flow(client.clone());
        flow.set_email("user@example.com");

        let outcome = block_on(flow.submit());

        assert_eq!(outcome, SubmitOutcome::Failed("Already registered".to_string()));
        assert_eq!(client.call_count(), 1);
        let state = store.snapshot();
        assert!(!state.is_submitting);
        assert_eq!(state.email, "user@example.com");
        assert_eq!(notifier.all(), vec![Toast::error("Already registered")]);
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let client =
            FakeClient::answering(Err(WaitlistError::Network("connection refused".to_string())));
        let (flow, store, notifier) = flow(client);
        flow.set_email("user@example.com");

        let outcome = block_on(flow.submit());

        assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_FAILURE.to_string()));
        assert_eq!(notifier.all(), vec![Toast::error(GENERIC_FAILURE)]);
        assert!(!store.is_submitting());
        assert_eq!(store.email(), "user@example.com");
    }

    #[test]
    fn test_retry_after_failure() {
        let client = FakeClient::answering(Err(WaitlistError::Rejected {
            status: 503,
            message: None,
        }));
        let (flow, store, notifier) = flow(client.clone());
        flow.set_email("user@example.com");

        block_on(flow.submit());
        *client.result.borrow_mut() = Ok(());
        let outcome = block_on(flow.submit());

        assert_eq!(outcome, SubmitOutcome::Joined);
        assert_eq!(client.call_count(), 2);
        assert_eq!(store.email(), "");
        let kinds: Vec<ToastKind> = notifier.all().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Error, ToastKind::Success]);
    }

    #[test]
    fn test_no_overlapping_submissions() {
        let (client, release) = FakeClient::ok().gated();
        let (flow, store, notifier) = flow(client.clone());
        flow.set_email("user@example.com");

        let mut pool = LocalPool::new();
        let first = Rc::new(RefCell::new(None));
        {
            let flow = flow.clone();
            let first = first.clone();
            pool.spawner()
                .spawn_local(async move {
                    *first.borrow_mut() = Some(flow.submit().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        assert!(store.is_submitting());
        assert_eq!(client.call_count(), 1);

        // Second trigger while the first request is in flight
        let second = block_on(flow.submit());
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(client.call_count(), 1);
        assert!(notifier.all().is_empty());

        release.send(()).unwrap();
        pool.run();

        assert_eq!(*first.borrow(), Some(SubmitOutcome::Joined));
        assert!(!store.is_submitting());
        assert_eq!(notifier.all().len(), 1);
    }

    #[test]
    fn test_completion_after_teardown_is_silent() {
        let (client, release) = FakeClient::ok().gated();
        let (flow, store, notifier) = flow(client);
        flow.set_email("user@example.com");

        let mut pool = LocalPool::new();
        let outcome = Rc::new(RefCell::new(None));
        {
            let flow = flow.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    *outcome.borrow_mut() = Some(flow.submit().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        store.detach();
        release.send(()).unwrap();
        pool.run();

        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Detached));
        assert!(notifier.all().is_empty());
        assert!(!store.is_submitting());
        assert_eq!(store.email(), "user@example.com");
    }

    // ========================================================================
    // Entrance animation
    // ========================================================================

    /// Frame index at which each target first becomes partly visible
    fn first_visible_frames(sink: &RecordingSink<EntranceTarget>) -> Vec<(EntranceTarget, usize)> {
        let applied = sink.applied.borrow();
        let per_frame = EntranceTarget::ALL.len();
        EntranceTarget::ALL
            .iter()
            .map(|target| {
                let index = applied
                    .iter()
                    .position(|(t, style, _)| t == target && style.opacity > 0.0)
                    .expect("target never became visible");
                (*target, index / per_frame)
            })
            .collect()
    }

    #[test]
    fn test_entrance_reveals_in_order() {
        let scheduler = ManualScheduler::new();
        let sink = RecordingSink::new();
        let playback = Playback::new(entrance_timeline(), scheduler.clone(), sink.clone());

        assert!(playback.play());
        scheduler.run_until_idle(0.0, 16.0);
        assert_eq!(playback.state(), PlaybackState::Completed);

        let frames = first_visible_frames(&sink);
        for pair in frames.windows(2) {
            assert!(
                pair[0].1 < pair[1].1,
                "{:?} should appear before {:?}",
                pair[0].0,
                pair[1].0
            );
        }

        for target in EntranceTarget::ALL {
            assert_eq!(
                sink.last(target),
                Some((ElementStyle::SETTLED, WillChange::Auto)),
                "{:?} did not settle",
                target
            );
        }
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_entrance_prepare_hides_everything() {
        let sink = RecordingSink::new();
        let playback = Playback::new(entrance_timeline(), ManualScheduler::new(), sink.clone());

        playback.prepare();

        for target in EntranceTarget::ALL {
            let (style, hint) = sink.last(target).unwrap();
            assert_eq!(style, target.initial_style());
            assert_eq!(hint, target.hint());
            assert_eq!(style.opacity, 0.0);
        }
    }

    #[test]
    fn test_entrance_teardown_leaves_nothing_scheduled() {
        let scheduler = ManualScheduler::new();
        let sink = RecordingSink::new();
        let playback = Playback::new(entrance_timeline(), scheduler.clone(), sink.clone());

        playback.play();
        for frame in 0..40 {
            scheduler.run_frame(frame as f64 * 16.0);
        }
        assert_eq!(playback.state(), PlaybackState::Running);

        playback.cancel();
        drop(playback);

        assert_eq!(scheduler.pending_count(), 0);
        let applied = sink.len();
        scheduler.run_frame(10_000.0);
        assert_eq!(sink.len(), applied);
    }
}
