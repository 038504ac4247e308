//! Two-tier client-side cache for API payloads.
//!
//! Tier one is the [`SessionTracker`]: an in-memory set of freshness
//! markers that survives client-side navigation but not a page reload.
//! Tier two is the persistent [`store`]: IndexedDB entries that survive
//! reloads and browser restarts. The [`Orchestrator`] combines the two
//! with cooperative cancellation: fresh-and-present data is served with
//! zero network calls, everything else goes to the network through a
//! cancellable fetch, and manual refresh bypasses both tiers.

mod cancel;
mod key;
mod orchestrator;
mod session;
pub mod store;

pub use cancel::CancelToken;
pub use key::CacheKey;
pub use orchestrator::{LoadOutcome, Orchestrator};
pub use session::SessionTracker;
