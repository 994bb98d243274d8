//! Platform glue for fire-and-forget background tasks.

use std::future::Future;

/// Spawn a future that runs to completion on its own. Completion is reported
/// back through whatever channel the caller baked into the future; callers
/// must treat a closed channel as "the receiver went away" and drop the send
/// result.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::spawn(future);
    }
}
