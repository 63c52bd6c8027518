//! Full-document navigation outside the client-side router.

/// Point the browsing context at an external URL (e.g. an OAuth consent
/// page). No-op during SSR.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("redirect to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
