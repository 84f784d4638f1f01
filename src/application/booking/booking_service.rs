use crate::domain::{
    Booking, BookingDate, BookingId, NewBooking, RoomId, commands::AddBooking, errors::Result,
};
use crate::ports::BookingRepository;
use std::sync::Arc;

/// 予約サービス
///
/// 部屋サービスとは独立したハンドルで、予約リポジトリのみに依存する。
#[derive(Clone)]
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// 予約を登録する
    ///
    /// ビジネスルール：
    /// - 開始日・終了日がそれぞれ `YYYY-MM-DD` 形式であること
    ///
    /// 日付が不正な場合はリポジトリを呼び出さない。
    /// 開始日と終了日の前後関係、同じ部屋の予約期間の重複は検証しない。
    ///
    /// # エラー
    /// - DateInvalid: 日付の形式が不正
    /// - NoForeignKey: 部屋が存在しない（リポジトリから）
    pub async fn add(&self, cmd: AddBooking) -> Result<BookingId> {
        let booking = NewBooking {
            start: BookingDate::parse(&cmd.start)?,
            end: BookingDate::parse(&cmd.end)?,
        };

        let id = self.repository.add(cmd.room_id, &booking).await?;
        tracing::debug!(booking_id = %id, room_id = %cmd.room_id, "booking added");

        Ok(id)
    }

    /// 部屋の予約を開始日の昇順で取得する
    pub async fn get(&self, room_id: RoomId) -> Result<Vec<Booking>> {
        self.repository.get(room_id).await
    }

    /// 予約を削除する
    pub async fn delete(&self, id: BookingId) -> Result<()> {
        self.repository.delete(id).await
    }
}
