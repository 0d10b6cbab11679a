#[path = "client/state.rs"]
mod state;

#[path = "client/builder.rs"]
mod builder;

#[path = "client/wrapper.rs"]
mod wrapper;

pub use builder::ClientBuilder;
pub use wrapper::{AttemptOutcome, Client};


#[cfg(test)]
mod http_tests;
