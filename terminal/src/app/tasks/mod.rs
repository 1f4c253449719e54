//! # Async Tasks
//!
//! Background requests for each page. Every task is bound to the page that
//! issued it: it races its request against the page's cancellation token and
//! tags its result with the page generation.

pub mod auth;
pub mod dashboard;
pub mod reset;

use std::future::Future;

use async_channel::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app::events::{AppEvent, PageEvent};
use crate::app::state::AppState;

/// Lifetime and return address of a page-bound task.
#[derive(Clone)]
pub(crate) struct PageScope {
    pub generation: u64,
    pub token: CancellationToken,
    pub event_tx: Sender<PageEvent>,
}

impl PageScope {
    /// Scope of the page active in `state`
    pub(crate) fn current(state: &AppState, event_tx: &Sender<PageEvent>) -> Self {
        Self {
            generation: state.generation,
            token: state.page_token.clone(),
            event_tx: event_tx.clone(),
        }
    }
}

/// Run `task` on the tokio runtime until it finishes or its page goes away.
pub(crate) fn spawn_page_task<F>(scope: PageScope, name: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = AppEvent> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = scope.token.cancelled() => {
                tracing::debug!(task = name, generation = scope.generation, "Task abandoned with its page");
            }
            event = task => {
                if scope.event_tx.send(PageEvent { generation: scope.generation, event }).await.is_err() {
                    tracing::warn!(task = name, "Event channel closed, dropping result");
                }
            }
        }
    })
}
