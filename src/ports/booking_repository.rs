use crate::domain::{Booking, BookingId, NewBooking, RoomId};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub use crate::domain::errors::Result;

/// 予約リポジトリポート
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// 予約を保存し、採番されたIDを返す
    ///
    /// 部屋が存在しない場合は`NoForeignKey`を返す。
    async fn add(&self, room_id: RoomId, booking: &NewBooking) -> Result<BookingId>;

    /// 予約を削除する
    ///
    /// 該当行がない場合は`NotFound`、それ以外の障害は`FailedDelete`。
    async fn delete(&self, id: BookingId) -> Result<()>;

    /// 部屋の予約を開始日の昇順で取得する
    ///
    /// 部屋が存在して予約が0件なら空のVec、部屋自体が存在しなければ`NotFound`。
    async fn get(&self, room_id: RoomId) -> Result<Vec<Booking>>;
}
