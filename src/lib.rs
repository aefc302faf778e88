// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive roster
// manager.
//
// Module responsibilities:
// - `model`: The employee record and its flat-file line form.
// - `store`: Whole-file load/save of the roster on disk.
// - `roster`: The in-memory record list and its lookup semantics.
// - `session`: The per-run context owning the store and the roster.
// - `ui`: The interactive menu loop and per-operation prompts.
//
// Keeping this separation makes the record and storage logic testable
// without a terminal attached.
pub mod model;
pub mod roster;
pub mod session;
pub mod store;
pub mod ui;
