use super::{BookingDate, BookingId, RoomId};

/// 検証済みの新規予約（ID未採番）
///
/// 開始日と終了日の前後関係は検証しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub start: BookingDate,
    pub end: BookingDate,
}

/// 永続化済みの予約
///
/// 部屋への参照はIDのみ（所有しない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub start: BookingDate,
    pub end: BookingDate,
}
