// Résumé pipeline: load → validate → render.
// Validation is pure and synchronous; only loading from disk touches I/O.

pub mod dates;
pub mod handlers;
pub mod loader;
pub mod render;
pub mod validation;
