//! Spawning for action futures.
//!
//! In the browser, futures run on the page's single-threaded executor. SSR
//! never handles user intents, so there the future is dropped unpolled.

use std::future::Future;

pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
