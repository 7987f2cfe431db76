// Test modules for openai-chat-schema
//
// Each source module has a corresponding test file focused on the wire
// contract it owns. JSON fixture tests that exercise the public API end to
// end live in the crate-level tests/ directory.

pub mod codec;
pub mod config;
pub mod validation;
