use thiserror::Error;

/// 予約台帳のエラー
///
/// ドメイン層・ストレージアダプターが返す閉じたエラー分類。
/// 呼び出し側はバリアントで直接マッチする（ラップや文脈付与は行わない）。
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 価格が負数、または数値として不正
    #[error("incorrect price entry")]
    PriceInvalid,

    /// 日付が `YYYY-MM-DD` 形式でない
    #[error("date is incorrect")]
    DateInvalid,

    /// 境界で受け取ったIDが整数として不正
    #[error("incorrect id entry")]
    IdInvalid,

    /// 対象のIDが存在しない
    #[error("id not found")]
    NotFound,

    /// 参照先の部屋が存在しない（外部キー制約違反）
    #[error("room does not exist")]
    NoForeignKey,

    /// 読み取りに失敗
    #[error("failed to get data")]
    FailedGet,

    /// 保存に失敗
    #[error("failed to save data")]
    FailedSave,

    /// 削除に失敗
    #[error("failed to delete data")]
    FailedDelete,

    /// 分類できなかったストレージ障害
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// ドメイン層の Result型
pub type Result<T> = std::result::Result<T, RegistryError>;
