// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the one-shot lookup tool.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Open Food Facts API
//   (product lookup, text search) and the response decoding.
// - `ui`: Renders products and search results as labeled lines and drives
//   the terminal feedback around network calls.
//
// Keeping this separation makes it easier to test the decoding and
// rendering logic without touching the network.
pub mod api;
pub mod ui;
