#![warn(clippy::pedantic)]

#[allow(clippy::module_name_repetitions)]
pub mod in_memory;

pub use in_memory::{InMemory, training_store};
