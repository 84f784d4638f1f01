pub mod booking_repository;
pub mod database;
pub mod room_repository;

pub use booking_repository::BookingRepository as InMemoryBookingRepository;
pub use database::InMemoryDatabase;
pub use room_repository::RoomRepository as InMemoryRoomRepository;
