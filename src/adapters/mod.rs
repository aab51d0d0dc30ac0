// Adapters: concrete implementations of the domain ports.

pub mod json_source;
