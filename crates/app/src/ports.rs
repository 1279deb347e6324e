//! Port definitions: traits that adapters implement.

pub mod clock;

pub use clock::Clock;
