//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains results, fires deadlines       │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - active Page + one form per page                   │   │
//! │  │  - page generation + cancellation token              │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//!                         │ PageEvent { generation, event }
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::auth      login, register + send code, verify     │
//! │  - tasks::reset     send code, check code, new password     │
//! │  - tasks::dashboard customer document, create account       │
//! │  each raced against its page's CancellationToken            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Page Flow
//!
//! ```text
//!            ┌──────── link ────────┐
//!            ▼                      │
//! Register ──(register + send)──▶ Verify{email} ──(code ok)──▶ Login
//!    ▲                                                         │ │ │
//!    └────────────────────── link ─────────────────────────────┘ │ │
//! Forgot ◀────────────────── link ───────────────────────────────┘ │
//!   └──(reset ok, 1.5 s)──▶ Login ──(credentials ok)──▶ User | Admin
//!                             ▲                               │
//!                             └────────── logout ─────────────┘
//! ```
//!
//! Failures never change the page; they land in the issuing form's `error`.
//!
//! ## Thread Safety
//!
//! - **Main Thread**: egui rendering and every state transition
//! - **Async Tasks**: network I/O on the Tokio runtime
//! - **Communication**: `async_channel::unbounded`, polled with `try_recv()`
//! - **State Access**: locks are held only for the duration of one update

mod event_handler;
mod events;
pub mod filters;
mod handlers;
pub mod reveal;
mod state;
mod tasks;

pub use events::{AppEvent, PageEvent};
pub use state::*;

use std::sync::Arc;
use std::time::Instant;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{AccountType, RegisterRequest};

use crate::app::filters::TransactionFilter;
use crate::core::service::{ApiService, SessionStore};

/// Main application orchestrator.
///
/// Owns the shared state, the event channel and the two injected services.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use bank_terminal::app::App;
/// use bank_terminal::core::ClientConfig;
/// use bank_terminal::services::api::ApiClient;
/// use bank_terminal::services::session::FileSessionStore;
///
/// let config = ClientConfig::default();
/// let mut app = App::new(
///     Arc::new(ApiClient::new(&config)),
///     Arc::new(FileSessionStore::new(config.session_path.clone())),
/// );
///
/// // In the egui update loop:
/// app.on_tick();
/// let snapshot = app.state.read().clone();
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; the renderer works on a clone.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<PageEvent>,

    event_tx: Sender<PageEvent>,

    api: Arc<dyn ApiService>,

    session: Arc<dyn SessionStore>,
}

impl App {
    /// Create the application on the login page.
    pub fn new(api: Arc<dyn ApiService>, session: Arc<dyn SessionStore>) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            api,
            session,
        }
    }

    /// Per-frame update: apply finished async results, then fire due deadlines.
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    pub(crate) fn on_tick_at(&mut self, now: Instant) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        let mut state = self.state.write();
        if state.page == Page::Forgot {
            if let Some(at) = state.reset.redirect_at {
                if now >= at {
                    state.enter(Page::Login);
                    state.login.notice = Some("Password changed. Sign in with your new password.".to_string());
                }
            }
        }
    }

    fn handle_event(&mut self, event: PageEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    pub fn handle_navigate(&mut self, page: Page) {
        handlers::navigation::handle_navigate(self.state.clone(), page);
    }

    pub fn handle_logout(&mut self) {
        handlers::navigation::handle_logout(self.state.clone(), self.session.clone());
    }

    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), self.api.clone(), email, password);
    }

    pub fn handle_register_click(&mut self, request: RegisterRequest) {
        handlers::auth::handle_register_click(self.state.clone(), self.event_tx.clone(), self.api.clone(), request);
    }

    pub fn handle_verify_click(&mut self, code: String) {
        handlers::auth::handle_verify_click(self.state.clone(), self.event_tx.clone(), self.api.clone(), code);
    }

    pub fn handle_verify_resend_click(&mut self) {
        handlers::auth::handle_verify_resend_click(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }

    pub fn handle_reset_request_code(&mut self, email: String) {
        handlers::reset::handle_reset_request_code(self.state.clone(), self.event_tx.clone(), self.api.clone(), email);
    }

    pub fn handle_reset_check_code(&mut self, code: String) {
        handlers::reset::handle_reset_check_code(self.state.clone(), self.event_tx.clone(), self.api.clone(), code);
    }

    pub fn handle_reset_resend_code(&mut self) {
        handlers::reset::handle_reset_resend_code(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }

    pub fn handle_reset_submit(&mut self, new_password: String, confirm_password: String) {
        handlers::reset::handle_reset_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            new_password,
            confirm_password,
        );
    }

    /// Load the customer document; also the "Retry" action
    pub fn handle_dashboard_load(&mut self) {
        handlers::dashboard::handle_dashboard_load(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.session.clone(),
        );
    }

    pub fn handle_add_account_open(&mut self) {
        handlers::dashboard::handle_add_account_open(self.state.clone());
    }

    pub fn handle_add_account_close(&mut self) {
        handlers::dashboard::handle_add_account_close(self.state.clone());
    }

    pub fn handle_add_account_type(&mut self, account_type: AccountType) {
        handlers::dashboard::handle_add_account_type(self.state.clone(), account_type);
    }

    pub fn handle_add_account_submit(&mut self) {
        handlers::dashboard::handle_add_account_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.session.clone(),
        );
    }

    pub fn handle_tab_change(&mut self, tab: DashboardTab) {
        handlers::dashboard::handle_tab_change(self.state.clone(), tab);
    }

    pub fn handle_account_select(&mut self, index: usize) {
        handlers::dashboard::handle_account_select(self.state.clone(), index);
    }

    pub fn handle_filter_change(&mut self, filter: TransactionFilter) {
        handlers::dashboard::handle_filter_change(self.state.clone(), filter);
    }

    pub fn handle_filter_clear(&mut self) {
        handlers::dashboard::handle_filter_clear(self.state.clone());
    }

    pub fn handle_profile_toggle(&mut self) {
        handlers::dashboard::handle_profile_toggle(self.state.clone());
    }

    /// Returns the card number to copy when it was just revealed
    pub fn handle_card_number_toggle(&mut self) -> Option<String> {
        handlers::dashboard::handle_card_number_toggle(self.state.clone(), Instant::now())
    }

    pub fn handle_cvv_toggle(&mut self) {
        handlers::dashboard::handle_cvv_toggle(self.state.clone(), Instant::now());
    }

    /// Returns the account number to copy when it was just revealed
    pub fn handle_account_number_toggle(&mut self) -> Option<String> {
        handlers::dashboard::handle_account_number_toggle(self.state.clone(), Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ApiError, CONNECTION_ERROR};
    use crate::services::session::{MemorySessionStore, Session};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{Account, Card, CustomerData, LoginResponse};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Scripted API: canned outcomes plus a log of every call made
    struct MockApi {
        login: Result<LoginResponse, ApiError>,
        register: Result<(), ApiError>,
        send_code: Result<(), ApiError>,
        check_code: Result<(), ApiError>,
        reset: Result<(), ApiError>,
        customers: Mutex<VecDeque<Result<CustomerData, ApiError>>>,
        create: Result<(), ApiError>,
        delay: Option<Duration>,
        calls: Mutex<Vec<String>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            Self {
                login: Ok(LoginResponse {
                    token: "t1".to_string(),
                    role: "ROLE_USER".to_string(),
                }),
                register: Ok(()),
                send_code: Ok(()),
                check_code: Ok(()),
                reset: Ok(()),
                customers: Mutex::new(VecDeque::new()),
                create: Ok(()),
                delay: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl MockApi {
        async fn record(&self, call: String) {
            self.calls.lock().push(call);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
            self.record(format!("login {} {}", email, password)).await;
            self.login.clone()
        }

        async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
            self.record(format!("register {}", request.email)).await;
            self.register.clone()
        }

        async fn send_verification_code(&self, email: String) -> Result<(), ApiError> {
            self.record(format!("send {}", email)).await;
            self.send_code.clone()
        }

        async fn check_verification_code(&self, email: String, code: String) -> Result<(), ApiError> {
            self.record(format!("check {} {}", email, code)).await;
            self.check_code.clone()
        }

        async fn reset_password(&self, email: String, password: String) -> Result<(), ApiError> {
            self.record(format!("reset {} {}", email, password)).await;
            self.reset.clone()
        }

        async fn fetch_customer(&self, token: &str) -> Result<CustomerData, ApiError> {
            self.record(format!("fetch [{}]", token)).await;
            self.customers.lock().pop_front().unwrap_or_else(|| Ok(CustomerData::default()))
        }

        async fn create_account(&self, token: &str, account_type: AccountType) -> Result<(), ApiError> {
            self.record(format!("create [{}] {}", token, account_type.code())).await;
            self.create.clone()
        }
    }

    fn app_with(api: MockApi) -> (App, Arc<MockApi>, Arc<MemorySessionStore>) {
        let api = Arc::new(api);
        let session = Arc::new(MemorySessionStore::default());
        let app = App::new(api.clone(), session.clone());
        (app, api, session)
    }

    /// Wait for the next async result and apply it
    async fn settle(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
            .await
            .expect("no event within 2s")
            .expect("channel closed");
        app.handle_event(event);
    }

    fn customer_with_card() -> CustomerData {
        CustomerData {
            first_name: "Olena".to_string(),
            last_name: "Shevchenko".to_string(),
            accounts: vec![Account {
                account_number: "UA213223130000026007233566001".to_string(),
                currency: "UAH".to_string(),
                card: Card {
                    card_number: "4111111111111111".to_string(),
                    expiration_date: "2027-05-31".to_string(),
                    cvv: "123".to_string(),
                },
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_admin_login_routes_to_admin_and_stores_token() {
        let (mut app, api, session) = app_with(MockApi {
            login: Ok(LoginResponse {
                token: "t1".to_string(),
                role: "ADMIN_USER".to_string(),
            }),
            ..Default::default()
        });

        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        assert!(app.state.read().login.pending);
        settle(&mut app).await;

        assert_eq!(app.state.read().page, Page::Admin);
        assert_eq!(session.get(), Some(Session::new("t1", "ADMIN_USER")));
        assert_eq!(api.calls(), vec!["login a@b.com x"]);
    }

    #[tokio::test]
    async fn test_user_login_routes_to_dashboard_and_fetches_once() {
        let (mut app, api, _session) = app_with(MockApi::default());
        api.customers.lock().push_back(Ok(customer_with_card()));

        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        settle(&mut app).await;
        assert_eq!(app.state.read().page, Page::User);
        assert!(app.state.read().dashboard.loading);

        settle(&mut app).await;
        let state = app.state.read();
        assert!(!state.dashboard.loading);
        assert_eq!(state.dashboard.customer.as_ref().map(|c| c.first_name.as_str()), Some("Olena"));
        assert_eq!(api.calls(), vec!["login a@b.com x", "fetch [t1]"]);
    }

    #[tokio::test]
    async fn test_login_failure_stays_on_login_with_message() {
        let (mut app, _api, session) = app_with(MockApi {
            login: Err(ApiError::Status {
                status: 401,
                message: None,
            }),
            ..Default::default()
        });

        app.handle_login_click("a@b.com".to_string(), "bad".to_string());
        settle(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.page, Page::Login);
        assert_eq!(state.login.error.as_deref(), Some("Login failed"));
        assert!(!state.login.pending);
        assert_eq!(session.get(), None);
    }

    #[tokio::test]
    async fn test_login_network_failure_shows_connection_message() {
        let (mut app, _api, _session) = app_with(MockApi {
            login: Err(ApiError::Network("connection refused".to_string())),
            ..Default::default()
        });

        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        settle(&mut app).await;

        assert_eq!(app.state.read().login.error.as_deref(), Some(CONNECTION_ERROR));
    }

    #[tokio::test]
    async fn test_login_validation_makes_no_call() {
        let (mut app, api, _session) = app_with(MockApi::default());

        app.handle_login_click("".to_string(), "x".to_string());

        let state = app.state.read();
        assert_eq!(state.login.error.as_deref(), Some("Email is required"));
        assert!(!state.login.pending);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_while_pending_is_refused() {
        let (mut app, api, _session) = app_with(MockApi {
            delay: Some(Duration::from_millis(50)),
            ..Default::default()
        });

        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        settle(&mut app).await;

        assert_eq!(api.calls().iter().filter(|c| c.starts_with("login")).count(), 1);
    }

    #[tokio::test]
    async fn test_register_then_send_carries_email_into_verify() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.handle_navigate(Page::Register);

        app.handle_register_click(RegisterRequest {
            first_name: "Olena".to_string(),
            last_name: "Shevchenko".to_string(),
            email: "new@x.com".to_string(),
            password: "secret123".to_string(),
            phone_number: "+380501234567".to_string(),
        });
        settle(&mut app).await;

        assert_eq!(
            app.state.read().page,
            Page::Verify {
                email: "new@x.com".to_string()
            }
        );
        assert_eq!(api.calls(), vec!["register new@x.com", "send new@x.com"]);
    }

    #[tokio::test]
    async fn test_register_send_failure_stays_on_register() {
        let (mut app, _api, _session) = app_with(MockApi {
            send_code: Err(ApiError::Status {
                status: 500,
                message: None,
            }),
            ..Default::default()
        });
        app.handle_navigate(Page::Register);

        app.handle_register_click(RegisterRequest {
            first_name: "Olena".to_string(),
            last_name: "Shevchenko".to_string(),
            email: "new@x.com".to_string(),
            password: "secret123".to_string(),
            phone_number: "+380501234567".to_string(),
        });
        settle(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.page, Page::Register);
        assert_eq!(state.register.error.as_deref(), Some("Could not send the verification code"));
    }

    #[tokio::test]
    async fn test_verify_success_returns_to_login_with_notice() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.state.write().enter(Page::Verify {
            email: "new@x.com".to_string(),
        });

        app.handle_verify_click("123456".to_string());
        settle(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.page, Page::Login);
        assert!(state.login.notice.is_some());
        assert_eq!(api.calls(), vec!["check new@x.com 123456"]);
    }

    #[tokio::test]
    async fn test_verify_failure_uses_server_message() {
        let (mut app, _api, _session) = app_with(MockApi {
            check_code: Err(ApiError::Status {
                status: 400,
                message: Some("Code expired".to_string()),
            }),
            ..Default::default()
        });
        app.state.write().enter(Page::Verify {
            email: "new@x.com".to_string(),
        });

        app.handle_verify_click("123456".to_string());
        settle(&mut app).await;

        assert_eq!(app.state.read().verify.error.as_deref(), Some("Code expired"));
    }

    #[tokio::test]
    async fn test_reset_wizard_full_flow_and_delayed_redirect() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.handle_navigate(Page::Forgot);

        app.handle_reset_request_code("a@b.com".to_string());
        settle(&mut app).await;
        assert_eq!(app.state.read().reset.step, ResetStep::VerifyCode);

        app.handle_reset_check_code("654321".to_string());
        settle(&mut app).await;
        assert_eq!(app.state.read().reset.step, ResetStep::NewPassword);

        app.handle_reset_submit("newpass123".to_string(), "newpass123".to_string());
        settle(&mut app).await;

        let redirect_at = {
            let state = app.state.read();
            assert_eq!(state.reset.step, ResetStep::Done);
            state.reset.redirect_at.expect("redirect scheduled")
        };

        app.on_tick_at(redirect_at - Duration::from_millis(1));
        assert_eq!(app.state.read().page, Page::Forgot);

        app.on_tick_at(redirect_at);
        assert_eq!(app.state.read().page, Page::Login);

        assert_eq!(
            api.calls(),
            vec!["send a@b.com", "check a@b.com 654321", "reset a@b.com newpass123"]
        );
    }

    #[tokio::test]
    async fn test_reset_password_mismatch_makes_no_call() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.handle_navigate(Page::Forgot);
        {
            let mut state = app.state.write();
            state.reset.step = ResetStep::NewPassword;
            state.reset.email = "a@b.com".to_string();
        }

        app.handle_reset_submit("newpass123".to_string(), "newpass124".to_string());

        let state = app.state.read();
        assert_eq!(state.reset.step, ResetStep::NewPassword);
        assert_eq!(state.reset.error.as_deref(), Some("Passwords do not match"));
        assert!(!state.reset.pending);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_reset_steps_cannot_be_skipped() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.handle_navigate(Page::Forgot);

        app.handle_reset_check_code("654321".to_string());
        app.handle_reset_submit("newpass123".to_string(), "newpass123".to_string());

        assert_eq!(app.state.read().reset.step, ResetStep::RequestCode);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_reset_failure_uses_generic_message() {
        let (mut app, _api, _session) = app_with(MockApi {
            reset: Err(ApiError::Decode("bad body".to_string())),
            ..Default::default()
        });
        app.handle_navigate(Page::Forgot);
        {
            let mut state = app.state.write();
            state.reset.step = ResetStep::NewPassword;
            state.reset.email = "a@b.com".to_string();
        }

        app.handle_reset_submit("newpass123".to_string(), "newpass123".to_string());
        settle(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.reset.step, ResetStep::NewPassword);
        assert_eq!(state.reset.error.as_deref(), Some("Could not reset the password"));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_customer_unset_then_retry_refetches() {
        let (mut app, api, session) = app_with(MockApi::default());
        api.customers.lock().push_back(Err(ApiError::Status {
            status: 500,
            message: None,
        }));
        api.customers.lock().push_back(Ok(customer_with_card()));
        session.set(Session::new("t1", "ROLE_USER")).unwrap();
        app.state.write().enter(Page::User);

        app.handle_dashboard_load();
        settle(&mut app).await;
        {
            let state = app.state.read();
            assert!(state.dashboard.customer.is_none());
            assert_eq!(state.dashboard.error.as_deref(), Some("Could not load customer data"));
        }

        app.handle_dashboard_load();
        settle(&mut app).await;

        let state = app.state.read();
        assert!(state.dashboard.customer.is_some());
        assert!(state.dashboard.error.is_none());
        assert_eq!(api.calls(), vec!["fetch [t1]", "fetch [t1]"]);
    }

    #[tokio::test]
    async fn test_missing_session_fetches_with_empty_token() {
        let (mut app, api, _session) = app_with(MockApi::default());
        app.state.write().enter(Page::User);

        app.handle_dashboard_load();
        settle(&mut app).await;

        assert_eq!(api.calls(), vec!["fetch []"]);
    }

    #[tokio::test]
    async fn test_add_account_creates_then_refetches() {
        let (mut app, api, session) = app_with(MockApi::default());
        session.set(Session::new("t1", "ROLE_USER")).unwrap();
        app.state.write().enter(Page::User);

        app.handle_add_account_open();
        app.handle_add_account_type(AccountType::USD);
        app.handle_add_account_submit();
        settle(&mut app).await;

        {
            let state = app.state.read();
            assert!(!state.dashboard.add_account.open);
            assert!(state.dashboard.loading);
            assert_eq!(state.pending_notifications.len(), 1);
        }
        settle(&mut app).await;

        assert_eq!(api.calls(), vec!["create [t1] USD", "fetch [t1]"]);
    }

    #[tokio::test]
    async fn test_add_account_failure_keeps_modal_open() {
        let (mut app, api, _session) = app_with(MockApi {
            create: Err(ApiError::Status {
                status: 400,
                message: Some("Account limit reached".to_string()),
            }),
            ..Default::default()
        });
        app.state.write().enter(Page::User);

        app.handle_add_account_open();
        app.handle_add_account_submit();
        settle(&mut app).await;

        let state = app.state.read();
        assert!(state.dashboard.add_account.open);
        assert_eq!(state.dashboard.add_account.error.as_deref(), Some("Account limit reached"));
        assert_eq!(api.calls(), vec!["create [] UAH"]);
    }

    #[tokio::test]
    async fn test_stale_result_is_dropped() {
        let (mut app, _api, session) = app_with(MockApi::default());
        let old_generation = app.state.read().generation;

        app.handle_navigate(Page::Register);
        app.handle_event(PageEvent {
            generation: old_generation,
            event: AppEvent::LoginResult(Ok(LoginResponse {
                token: "t1".to_string(),
                role: "ADMIN_USER".to_string(),
            })),
        });

        assert_eq!(app.state.read().page, Page::Register);
        assert_eq!(session.get(), None);
    }

    #[tokio::test]
    async fn test_leaving_page_cancels_in_flight_request() {
        let (mut app, _api, _session) = app_with(MockApi {
            delay: Some(Duration::from_millis(200)),
            ..Default::default()
        });

        app.handle_login_click("a@b.com".to_string(), "x".to_string());
        app.handle_navigate(Page::Forgot);

        tokio::time::sleep(Duration::from_millis(300)).await;
        app.on_tick();

        assert!(app.event_rx.is_empty());
        assert_eq!(app.state.read().page, Page::Forgot);
    }

    #[tokio::test]
    async fn test_card_reveal_copies_and_toasts() {
        let (mut app, _api, _session) = app_with(MockApi::default());
        {
            let mut state = app.state.write();
            state.enter(Page::User);
            state.dashboard.set_customer(customer_with_card());
        }

        assert_eq!(app.handle_card_number_toggle().as_deref(), Some("4111111111111111"));
        {
            let state = app.state.read();
            let now = Instant::now();
            assert!(state.dashboard.card_reveal.is_revealed(now));
            assert_eq!(state.dashboard.toast.current(now), Some("Card number copied"));
        }

        // Second click masks again and copies nothing
        assert_eq!(app.handle_card_number_toggle(), None);

        app.handle_cvv_toggle();
        assert!(app.state.read().dashboard.cvv_reveal.is_revealed(Instant::now()));
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_returns_to_login() {
        let (mut app, _api, session) = app_with(MockApi::default());
        session.set(Session::new("t1", "ROLE_USER")).unwrap();
        app.state.write().enter(Page::User);

        app.handle_logout();

        assert_eq!(app.state.read().page, Page::Login);
        assert!(session.get().is_none());
    }

    #[tokio::test]
    async fn test_cannot_navigate_directly_to_dashboard() {
        let (mut app, _api, _session) = app_with(MockApi::default());

        app.handle_navigate(Page::User);
        app.handle_navigate(Page::Admin);

        assert_eq!(app.state.read().page, Page::Login);
    }
}
