//! Service Layer
//!
//! Network-facing collaborators of the view runtime: remote script files and
//! the password reset submission. Both run their HTTP futures on the shared
//! tokio runtime and are awaited from the page's local executor.
//!
//! ```text
//! ┌──────────────────────┐    ┌────────────────────────────┐
//! │   HttpScriptLoader   │    │ HttpPasswordResetTransport │
//! └──────────┬───────────┘    └─────────────┬──────────────┘
//!            └──────────────┬───────────────┘
//!                           ▼ run_in_tokio
//!                  ┌─────────────────┐
//!                  │ tokio + reqwest │
//!                  └─────────────────┘
//! ```

mod password_reset;
mod runtime;
mod script_loader;

pub use password_reset::*;
pub use runtime::*;
pub use script_loader::*;
