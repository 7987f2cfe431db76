//! Logging shim for openai-chat-schema
//!
//! Re-exports the tracing macros the crate uses under `log_*` names. The crate
//! never installs a subscriber; that is left to the host application.

pub use tracing::{debug as log_debug, error as log_error, trace as log_trace, warn as log_warn};
