pub mod booking;
pub mod room;

pub use booking::BookingService;
pub use room::RoomService;
