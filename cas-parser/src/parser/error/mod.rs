pub mod kind;

pub use cas_error::Error;
