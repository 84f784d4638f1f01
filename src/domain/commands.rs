use super::RoomId;

/// コマンド：部屋を登録する
///
/// 境界層から渡される未検証の入力。
#[derive(Debug, Clone, PartialEq)]
pub struct AddRoom {
    pub description: String,
    pub price: f64,
}

/// コマンド：予約を登録する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBooking {
    pub room_id: RoomId,
    pub start: String,
    pub end: String,
}
