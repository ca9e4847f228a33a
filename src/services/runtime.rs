//! Tokio Runtime Bridge
//!
//! The component tree runs on a single-threaded cooperative executor, but
//! reqwest requires tokio. HTTP futures are handed to a shared tokio runtime
//! and their result is awaited from whichever executor drives the page.
//!
//! ```text
//! Page::perform_scripts (local executor)
//!       │
//!       ▼
//! run_in_tokio(async { client.get(..).send() })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to the page
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Runtime::new()?;
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Execute a future in the tokio runtime and wait for the result
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Invalid {
            message: format!("Tokio task cancelled: {e}"),
        }),
    }
}

/// Block on a local future synchronously
///
/// Drives page construction and script execution from the binary. Must not
/// be called from inside the tokio runtime.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    futures::executor::block_on(future)
}
