pub mod adapters;
pub mod configuration;
pub mod core;
pub mod environment;
pub mod greeter;
pub mod observability;
pub mod template;
