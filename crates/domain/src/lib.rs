#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod date;
mod error;
mod service;
mod target;
mod week;
mod workout;

pub use date::*;
pub use error::*;
pub use service::*;
pub use target::*;
pub use week::*;
pub use workout::*;
