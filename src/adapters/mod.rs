// Adapters layer: concrete road sources.

pub mod source;
