use crate::domain::{NewRoom, Room, RoomId};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub use crate::domain::errors::Result;

/// 部屋リポジトリポート
///
/// ストレージ技術に依存しない部屋の永続化契約。
/// ストレージ障害はアダプター側で`RegistryError`に分類してから返すこと。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 部屋を保存し、採番されたIDを返す
    ///
    /// 成功時は必ずIDを返し、失敗時は行を残さない。
    /// 行は書けたがIDが読めない場合も失敗（`FailedSave`）として扱う。
    async fn add(&self, room: &NewRoom) -> Result<RoomId>;

    /// 部屋を削除する
    ///
    /// 該当行がない場合は`NotFound`、それ以外の障害は`FailedDelete`。
    async fn delete(&self, id: RoomId) -> Result<()>;

    /// 作成日時の昇順で全件取得
    async fn get_by_date(&self) -> Result<Vec<Room>>;

    /// 作成日時の降順で全件取得
    async fn get_by_date_desc(&self) -> Result<Vec<Room>>;

    /// 価格の昇順で全件取得
    async fn get_by_price(&self) -> Result<Vec<Room>>;

    /// 価格の降順で全件取得
    async fn get_by_price_desc(&self) -> Result<Vec<Room>>;
}
