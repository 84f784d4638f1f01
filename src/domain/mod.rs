pub mod booking;
pub mod commands;
pub mod errors;
pub mod room;
pub mod value_objects;

pub use booking::*;
pub use errors::*;
pub use room::*;
pub use value_objects::*;
