pub mod handlers;
pub mod registry;
mod state;
#[cfg(test)]
mod test_support;

pub use crate::domain::Command;
pub use registry::{CommandRegistry, Handler};
pub use state::State;
