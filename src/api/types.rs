use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingId, Room, RoomId};

/// 部屋登録レスポンス（POST /room/add）
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomCreatedResponse {
    pub room_id: i64,
}

impl From<RoomId> for RoomCreatedResponse {
    fn from(id: RoomId) -> Self {
        Self { room_id: id.value() }
    }
}

/// 予約登録レスポンス（POST /bookings/create）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    pub booking_id: i64,
}

impl From<BookingId> for BookingCreatedResponse {
    fn from(id: BookingId) -> Self {
        Self {
            booking_id: id.value(),
        }
    }
}

/// 部屋レスポンス（GET /room/list）
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomResponse {
    pub room_id: i64,
    pub description: String,
    pub price: f64,
    pub date: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            room_id: room.id.value(),
            description: room.description,
            price: room.price.value(),
            date: room.created_at,
        }
    }
}

/// 予約レスポンス（GET /bookings/list）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub date_start: String,
    pub date_end: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id.value(),
            date_start: booking.start.to_string(),
            date_end: booking.end.to_string(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
