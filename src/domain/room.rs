use chrono::{DateTime, Utc};

use super::{Price, RoomId};

/// 検証済みの新規部屋（ID未採番）
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub description: String,
    pub price: Price,
}

/// 永続化済みの部屋
///
/// `id`と`created_at`はストレージが採番・記録する。
/// 作成後に変更されることはない。
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
    pub price: Price,
    /// 一覧の並び替えにのみ使用される
    pub created_at: DateTime<Utc>,
}
