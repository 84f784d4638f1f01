pub mod booking_repository;
pub mod room_repository;

// パブリックに型を再エクスポート
pub use booking_repository::BookingRepository as PostgresBookingRepository;
pub use room_repository::RoomRepository as PostgresRoomRepository;
