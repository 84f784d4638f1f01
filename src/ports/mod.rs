pub mod booking_repository;
pub mod room_repository;

pub use booking_repository::BookingRepository;
pub use room_repository::RoomRepository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use room_repository::MockRoomRepository;
