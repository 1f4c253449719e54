//! # Application State Types
//!
//! All state-related types for the client: the active page, one form state per
//! page, and the dashboard.
//!
//! Exactly one [`Page`] is active at a time. Every page change goes through
//! [`AppState::enter`], which cancels the outgoing page's in-flight requests,
//! bumps the page generation and starts the incoming page from a clean form.

use std::time::{Duration, Instant};

use shared::{Account, AccountType, CustomerData};
use tokio_util::sync::CancellationToken;

use crate::app::filters::TransactionFilter;
use crate::app::reveal::{Reveal, Toast};

/// Delay between a successful password reset and the jump back to login.
pub const RESET_REDIRECT_DELAY: Duration = Duration::from_millis(1_500);

/// Application pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Credential entry (initial page)
    Login,
    /// New customer registration
    Register,
    /// Email verification for a just-registered customer
    Verify { email: String },
    /// Password-reset wizard
    Forgot,
    /// Customer dashboard
    User,
    /// Administrator landing
    Admin,
}

impl Page {
    /// Get page title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Register => "Create an account",
            Page::Verify { .. } => "Verify your email",
            Page::Forgot => "Reset password",
            Page::User => "Dashboard",
            Page::Admin => "Administration",
        }
    }

    /// Pages only reachable with a session
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Page::User | Page::Admin)
    }
}

/// Landing page for a freshly logged-in role.
///
/// Any role whose text contains "admin", in any case, is an administrator.
pub fn route_for_role(role: &str) -> Page {
    if role.to_uppercase().contains("ADMIN") {
        Page::Admin
    } else {
        Page::User
    }
}

/// Login form
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    /// Success notice carried over from another page (e.g. after verification)
    pub notice: Option<String>,
    pub pending: bool,
}

/// Registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub error: Option<String>,
    pub pending: bool,
}

/// Email verification form
#[derive(Debug, Clone, Default)]
pub struct VerifyForm {
    pub code: String,
    pub error: Option<String>,
    pub info: Option<String>,
    pub pending: bool,
}

/// Password-reset wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    RequestCode,
    VerifyCode,
    NewPassword,
    Done,
}

impl ResetStep {
    pub fn number(&self) -> usize {
        match self {
            ResetStep::RequestCode => 1,
            ResetStep::VerifyCode => 2,
            ResetStep::NewPassword => 3,
            ResetStep::Done => 3,
        }
    }
}

/// Password-reset wizard
#[derive(Debug, Clone, Default)]
pub struct ResetWizard {
    pub step: ResetStep,
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub info: Option<String>,
    pub pending: bool,
    /// When the Done step hands back to login
    pub redirect_at: Option<Instant>,
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Accounts,
    Transactions,
    Payments,
    Transfers,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Accounts,
            DashboardTab::Transactions,
            DashboardTab::Payments,
            DashboardTab::Transfers,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Accounts => "Accounts",
            DashboardTab::Transactions => "Transactions",
            DashboardTab::Payments => "Payments",
            DashboardTab::Transfers => "Transfers",
        }
    }
}

/// "Add account" modal
#[derive(Debug, Clone, Default)]
pub struct AddAccountModal {
    pub open: bool,
    pub account_type: AccountType,
    pub error: Option<String>,
    pub pending: bool,
}

/// Dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Whole customer document; `None` until the fetch succeeds
    pub customer: Option<CustomerData>,
    pub loading: bool,
    pub error: Option<String>,
    pub tab: DashboardTab,
    pub selected_account: usize,
    pub filter: TransactionFilter,
    pub add_account: AddAccountModal,
    pub card_reveal: Reveal,
    pub cvv_reveal: Reveal,
    pub account_reveal: Reveal,
    pub toast: Toast,
    pub show_profile: bool,
}

impl DashboardState {
    /// Currently selected account, clamped to what the customer actually has
    pub fn selected(&self) -> Option<&Account> {
        let accounts = &self.customer.as_ref()?.accounts;
        if accounts.is_empty() {
            return None;
        }
        accounts.get(self.selected_account.min(accounts.len() - 1))
    }

    fn clamp_selection(&mut self) {
        let count = self.customer.as_ref().map_or(0, |c| c.accounts.len());
        self.selected_account = self.selected_account.min(count.saturating_sub(1));
    }

    /// Install a freshly fetched customer document
    pub fn set_customer(&mut self, customer: CustomerData) {
        self.customer = Some(customer);
        self.clamp_selection();
    }

    /// Change the selected account. Reveals belong to the old account.
    pub fn select_account(&mut self, index: usize) {
        self.selected_account = index;
        self.clamp_selection();
        self.card_reveal.hide();
        self.cvv_reveal.hide();
        self.account_reveal.hide();
    }

    /// Earliest pending deadline, for repaint scheduling
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        [
            self.card_reveal.remaining(now),
            self.cvv_reveal.remaining(now),
            self.account_reveal.remaining(now),
            self.toast.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

/// Pending notification for the toast overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active page
    pub page: Page,
    /// Incremented on every page change; async results carry the value they were issued under
    pub generation: u64,
    /// Cancelled when the active page is left
    pub page_token: CancellationToken,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub verify: VerifyForm,
    pub reset: ResetWizard,
    pub dashboard: DashboardState,
    /// Drained by the UI into egui-notify toasts
    pub pending_notifications: Vec<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Login,
            generation: 0,
            page_token: CancellationToken::new(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            verify: VerifyForm::default(),
            reset: ResetWizard::default(),
            dashboard: DashboardState::default(),
            pending_notifications: Vec::new(),
        }
    }
}

impl AppState {
    /// Switch to `page`.
    ///
    /// Cancels everything in flight for the page being left and resets the
    /// incoming page's form, so nothing survives a round trip through another page.
    pub fn enter(&mut self, page: Page) {
        self.page_token.cancel();
        self.page_token = CancellationToken::new();
        self.generation = self.generation.wrapping_add(1);

        match &page {
            Page::Login => self.login = LoginForm::default(),
            Page::Register => self.register = RegisterForm::default(),
            Page::Verify { .. } => self.verify = VerifyForm::default(),
            Page::Forgot => self.reset = ResetWizard::default(),
            Page::User | Page::Admin => self.dashboard = DashboardState::default(),
        }

        tracing::debug!(from = ?self.page, to = ?page, generation = self.generation, "Page change");
        self.page = page;
    }

    /// Whether an async result issued under `generation` still belongs to the active page
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Earliest pending deadline on the active page
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match self.page {
            Page::User => self.dashboard.next_deadline(now),
            Page::Forgot => self
                .reset
                .redirect_at
                .map(|at| at.saturating_duration_since(now)),
            _ => None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }
}
