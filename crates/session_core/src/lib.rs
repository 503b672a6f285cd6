//! Login/session controller: synchronous field validation, a simulated-latency
//! credential check behind a capability trait, and a broadcast event stream
//! for the presentation layer.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Credentials, Session, UserProfile},
    error::{PasswordError, ValidationReport},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

mod validate;
pub use validate::validate;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub const DEFAULT_MOCK_EMAIL: &str = "admin@skyline.com";
pub const DEFAULT_MOCK_PASSWORD: &str = "admin123";
pub const DEFAULT_MOCK_DISPLAY_NAME: &str = "Admin User";
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1500);

/// Outcome of one credential check. Denial is a normal result rather than an
/// error, so the trait is infallible; the hint ends up in the password field's
/// message slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthDecision {
    Granted(UserProfile),
    Denied { hint: String },
}

/// Capability seam for the asynchronous credential check. A real backend can
/// be substituted without touching the session state machine.
#[async_trait]
pub trait CredentialBackend: Send + Sync {
    async fn check(&self, credentials: &Credentials) -> AuthDecision;
}

pub struct MissingCredentialBackend;

#[async_trait]
impl CredentialBackend for MissingCredentialBackend {
    async fn check(&self, _credentials: &Credentials) -> AuthDecision {
        AuthDecision::Denied {
            hint: "No credential backend is configured".to_string(),
        }
    }
}

/// Stand-in backend: sleeps for a fixed delay, then compares against a single
/// configured pair with exact string equality.
#[derive(Debug, Clone)]
pub struct MockCredentialBackend {
    email: String,
    password: String,
    display_name: String,
    delay: Duration,
}

impl Default for MockCredentialBackend {
    fn default() -> Self {
        Self::new(
            DEFAULT_MOCK_EMAIL,
            DEFAULT_MOCK_PASSWORD,
            DEFAULT_MOCK_DISPLAY_NAME,
            DEFAULT_MOCK_DELAY,
        )
    }
}

impl MockCredentialBackend {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
            delay,
        }
    }

    fn hint(&self) -> String {
        format!("Invalid credentials. Try {} / {}", self.email, self.password)
    }
}

#[async_trait]
impl CredentialBackend for MockCredentialBackend {
    async fn check(&self, credentials: &Credentials) -> AuthDecision {
        tokio::time::sleep(self.delay).await;
        if credentials.email == self.email && credentials.password == self.password {
            AuthDecision::Granted(UserProfile {
                email: credentials.email.clone(),
                name: self.display_name.clone(),
            })
        } else {
            AuthDecision::Denied { hint: self.hint() }
        }
    }
}

/// Events emitted as the controller moves through a submission cycle.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    ValidationRejected(ValidationReport),
    Pending,
    LoggedIn(UserProfile),
    LoginFailed { password_error: PasswordError },
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field validation failed; the backend was never consulted.
    Invalid(ValidationReport),
    /// A prior submission is still in flight; this one was ignored.
    AlreadyPending,
    LoggedIn(UserProfile),
    Denied,
}

/// Point-in-time view handed to the presentation layer for rendering. The
/// pending flag is what callers use to disable the submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: Session,
    pub pending: bool,
    pub validation: ValidationReport,
}

#[derive(Default)]
struct ControllerState {
    session: Session,
    pending: bool,
    validation: ValidationReport,
}

/// Owns the session exclusively; callers observe it through snapshots and the
/// event stream and never mutate it directly.
pub struct SessionController {
    backend: Arc<dyn CredentialBackend>,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionController {
    pub fn new() -> Arc<Self> {
        Self::with_backend(Arc::new(MissingCredentialBackend))
    }

    pub fn with_backend(backend: Arc<dyn CredentialBackend>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            backend,
            inner: Mutex::new(ControllerState::default()),
            events,
        })
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let guard = self.inner.lock().await;
        SessionSnapshot {
            session: guard.session.clone(),
            pending: guard.pending,
            validation: guard.validation.clone(),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Runs the full submission cycle: format validation, then one credential
    /// check. Overlapping submissions are serialized; a submit that arrives
    /// while another is in flight is ignored rather than raced.
    pub async fn submit(&self, email: &str, password: &str) -> SubmitOutcome {
        let report = validate(email, password);
        if !report.is_clean() {
            {
                let mut guard = self.inner.lock().await;
                guard.validation = report.clone();
            }
            info!(
                email_error = ?report.email,
                password_error = ?report.password,
                "login: submission rejected by field validation"
            );
            let _ = self
                .events
                .send(SessionEvent::ValidationRejected(report.clone()));
            return SubmitOutcome::Invalid(report);
        }

        {
            let mut guard = self.inner.lock().await;
            if guard.pending {
                info!("login: submission ignored while a credential check is in flight");
                return SubmitOutcome::AlreadyPending;
            }
            guard.pending = true;
            guard.validation = ValidationReport::default();
        }
        let _ = self.events.send(SessionEvent::Pending);

        let credentials = Credentials::new(email, password);
        let decision = self.backend.check(&credentials).await;

        let mut guard = self.inner.lock().await;
        guard.pending = false;
        match decision {
            AuthDecision::Granted(profile) => {
                guard.session = Session::LoggedIn(profile.clone());
                guard.validation = ValidationReport::default();
                drop(guard);
                info!(email = %credentials.email, "login: credential check granted");
                let _ = self.events.send(SessionEvent::LoggedIn(profile.clone()));
                SubmitOutcome::LoggedIn(profile)
            }
            AuthDecision::Denied { hint } => {
                let password_error = PasswordError::Rejected(hint);
                guard.session = Session::LoggedOut;
                // A stale email error from an earlier attempt is cleared too.
                guard.validation = ValidationReport {
                    email: None,
                    password: Some(password_error.clone()),
                };
                drop(guard);
                warn!(email = %credentials.email, "login: credential check denied");
                let _ = self
                    .events
                    .send(SessionEvent::LoginFailed { password_error });
                SubmitOutcome::Denied
            }
        }
    }

    /// Unconditionally returns to the logged-out state. Never fails.
    pub async fn logout(&self) {
        {
            let mut guard = self.inner.lock().await;
            guard.session = Session::LoggedOut;
            guard.pending = false;
            guard.validation = ValidationReport::default();
        }
        info!("login: session reset to logged out");
        let _ = self.events.send(SessionEvent::LoggedOut);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
