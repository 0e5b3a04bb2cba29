// Adapters layer: concrete implementations of the domain ports.

pub mod command;

pub use command::CommandFetcher;
