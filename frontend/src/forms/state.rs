use std::rc::Rc;

use yew::prelude::*;

use super::submission::SubmitError;

/// Modal closes this long after a successful submission.
pub const AUTO_CLOSE_MS: u32 = 3_000;
/// The form resets once the close transition has finished.
pub const RESET_AFTER_CLOSE_MS: u32 = 300;

/// What happens after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Close the enclosing modal.
    Close,
    /// Clear the fields and return to idle.
    Reset,
}

/// Delays, in ms from entering `Success`, at which each follow-up fires.
pub fn success_schedule() -> [(u32, FollowUp); 2] {
    [
        (AUTO_CLOSE_MS, FollowUp::Close),
        (AUTO_CLOSE_MS + RESET_AFTER_CLOSE_MS, FollowUp::Reset),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle { error: Option<String> },
    Submitting,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub status: FormStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self { status: FormStatus::Idle { error: None } }
    }
}

impl FormState {
    pub fn is_busy(&self) -> bool {
        !matches!(self.status, FormStatus::Idle { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Idle { error } => error.as_deref(),
            _ => None,
        }
    }
}

pub enum FormAction {
    Submit,
    Resolved(Result<(), SubmitError>),
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let status = match (&self.status, action) {
            (FormStatus::Idle { .. }, FormAction::Submit) => FormStatus::Submitting,
            // A second submit while one is in flight is dropped
            (_, FormAction::Submit) => return self,
            (FormStatus::Submitting, FormAction::Resolved(Ok(()))) => FormStatus::Success,
            (FormStatus::Submitting, FormAction::Resolved(Err(e))) => FormStatus::Idle {
                error: Some(e.user_message()),
            },
            (_, FormAction::Resolved(_)) => return self,
            (_, FormAction::Reset) => FormStatus::Idle { error: None },
        };
        Rc::new(FormState { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::{FormKind, FormSubmission, Fields};
    use crate::forms::transport::{deliver, FormTransport, RawResponse};
    use chrono::Utc;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct MockEndpoint {
        status: u16,
        body: &'static str,
        calls: Cell<u32>,
    }

    impl MockEndpoint {
        fn new(status: u16, body: &'static str) -> Self {
            Self { status, body, calls: Cell::new(0) }
        }
    }

    impl FormTransport for MockEndpoint {
        async fn post(&self, _submission: &FormSubmission) -> Result<RawResponse, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            Ok(RawResponse { status: self.status, body: self.body.to_string() })
        }
    }

    struct Offline;

    impl FormTransport for Offline {
        async fn post(&self, _submission: &FormSubmission) -> Result<RawResponse, SubmitError> {
            Err(SubmitError::Network("connection refused".into()))
        }
    }

    fn submission() -> FormSubmission {
        let fields = Fields {
            full_name: "Jett Windwalker".into(),
            email: "agent@valorant.com".into(),
            ..Fields::default()
        };
        FormSubmission::new(FormKind::Registration, &fields, Utc::now())
    }

    fn run(state: Rc<FormState>, transport: &impl FormTransport) -> Rc<FormState> {
        let state = state.reduce(FormAction::Submit);
        assert_eq!(state.status, FormStatus::Submitting);
        let outcome = block_on(deliver(transport, &submission()));
        state.reduce(FormAction::Resolved(outcome))
    }

    #[test]
    fn success_schedule_closes_then_resets() {
        assert_eq!(
            success_schedule(),
            [(3_000, FollowUp::Close), (3_300, FollowUp::Reset)]
        );
        let [(close_at, _), (reset_at, _)] = success_schedule();
        assert!(close_at < reset_at);
    }

    #[test]
    fn success_returns_to_idle_when_schedule_runs() {
        let endpoint = MockEndpoint::new(200, "{}");
        let mut state = run(Rc::new(FormState::default()), &endpoint);
        assert_eq!(state.status, FormStatus::Success);
        assert_eq!(endpoint.calls.get(), 1);

        let mut closed = false;
        for (_, follow_up) in success_schedule() {
            match follow_up {
                FollowUp::Close => {
                    // Still showing the success view while the modal closes
                    assert_eq!(state.status, FormStatus::Success);
                    closed = true;
                }
                FollowUp::Reset => {
                    assert!(closed);
                    state = state.reduce(FormAction::Reset);
                }
            }
        }
        assert_eq!(*state, FormState::default());
    }

    #[test]
    fn server_error_returns_to_idle_with_message() {
        let endpoint = MockEndpoint::new(500, r#"{"error":"Bad input","details":"email invalid"}"#);
        let state = run(Rc::new(FormState::default()), &endpoint);
        assert_eq!(state.error(), Some("Bad input: email invalid"));
        assert!(!state.is_busy());
    }

    #[test]
    fn network_failure_allows_retry() {
        let state = run(Rc::new(FormState::default()), &Offline);
        assert!(state.error().is_some());

        let endpoint = MockEndpoint::new(201, "");
        let state = run(state, &endpoint);
        assert_eq!(state.status, FormStatus::Success);
    }

    #[test]
    fn double_submit_is_ignored() {
        let submitting = Rc::new(FormState::default()).reduce(FormAction::Submit);
        let again = Rc::clone(&submitting).reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&submitting, &again));
        assert!(again.is_busy());
    }

    #[test]
    fn late_resolution_after_reset_is_dropped() {
        let state = Rc::new(FormState::default())
            .reduce(FormAction::Submit)
            .reduce(FormAction::Reset);
        let state = state.reduce(FormAction::Resolved(Ok(())));
        assert_eq!(*state, FormState::default());
    }

    #[test]
    fn success_cannot_be_resubmitted() {
        let state = Rc::new(FormState { status: FormStatus::Success });
        let state = state.reduce(FormAction::Submit);
        assert_eq!(state.status, FormStatus::Success);
    }
}
