// Reusable library API — visible to the CLI binary and to integration tests
pub mod dictionary;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod solver;
