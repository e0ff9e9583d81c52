//! Session state and storage

mod state;
mod store;

pub use state::{Narrowing, SessionState};
pub use store::{InMemorySessionStore, SessionStore, SharedSession, lock};
