//! Delayed, cancellable client-side navigation.
//!
//! TRADE-OFFS
//! ==========
//! The timer task is detached (`spawn_local`), so cancellation is a shared
//! flag checked when the delay elapses rather than an abort. Pages cancel in
//! `on_cleanup`, which keeps a torn-down view from navigating. A handle
//! produced after the view is gone (the request outlived the page) is
//! cancelled as soon as it is parked.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::error::ScheduledRedirect;

/// Handle to a scheduled redirect. Fires at most once.
#[derive(Clone, Debug)]
pub struct PendingRedirect {
    armed: Arc<AtomicBool>,
}

impl PendingRedirect {
    fn new() -> Self {
        Self { armed: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the redirect from firing. Safe to call after it fired.
    pub fn cancel(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }

    /// Consume the armed flag; `true` only for the first caller while armed.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn take(&self) -> bool {
        self.armed.swap(false, Ordering::Relaxed)
    }

    /// Navigate if still armed. Returns whether navigation happened.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn fire<N>(&self, target: &str, navigate: &N) -> bool
    where
        N: Fn(&str, NavigateOptions),
    {
        if !self.take() {
            return false;
        }
        navigate(target, NavigateOptions::default());
        true
    }
}

/// Schedule `redirect` with `navigate`. During SSR nothing is scheduled, but
/// the returned handle still reports pending until cancelled.
pub fn schedule<N>(redirect: ScheduledRedirect, navigate: N) -> PendingRedirect
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    let pending = PendingRedirect::new();
    #[cfg(feature = "hydrate")]
    {
        let handle = pending.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(redirect.delay).await;
            handle.fire(redirect.target.path(), &navigate);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (redirect, navigate);
    }
    pending
}

/// View-owned slot for a pending redirect. Cancels whatever it holds when the
/// owning view is cleaned up.
pub fn cleanup_slot() -> StoredValue<Option<PendingRedirect>> {
    let slot = StoredValue::new(None::<PendingRedirect>);
    on_cleanup(move || {
        slot.try_with_value(|p| p.as_ref().map(PendingRedirect::cancel));
    });
    slot
}

/// Park `handle` in `slot`. If the slot was already disposed with its view,
/// the redirect is cancelled instead of being left to fire.
pub fn park(slot: StoredValue<Option<PendingRedirect>>, handle: PendingRedirect) {
    if let Some(Some(orphan)) = slot.try_set_value(Some(handle)) {
        log::debug!("view gone before redirect was parked; cancelling");
        orphan.cancel();
    }
}
