use crate::domain::{NewRoom, Price, Room, RoomId, RoomOrdering, commands::AddRoom, errors::Result};
use crate::ports::RoomRepository;
use std::sync::Arc;

/// 部屋サービス
///
/// 状態を持たず、すべての可変状態はリポジトリの先にある。
/// 複数のリクエストから並行に呼び出してよい。
#[derive(Clone)]
pub struct RoomService {
    repository: Arc<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 部屋を登録する
    ///
    /// ビジネスルール：
    /// - 価格は0以上であること
    ///
    /// 価格が不正な場合はリポジトリを呼び出さない。
    ///
    /// # 戻り値
    /// ストレージが採番した部屋ID
    pub async fn add(&self, cmd: AddRoom) -> Result<RoomId> {
        let price = Price::new(cmd.price)?;

        let room = NewRoom {
            description: cmd.description,
            price,
        };

        let id = self.repository.add(&room).await?;
        tracing::debug!(room_id = %id, "room added");

        Ok(id)
    }

    /// 部屋を削除する
    pub async fn delete(&self, id: RoomId) -> Result<()> {
        self.repository.delete(id).await
    }

    /// 部屋の一覧を取得する
    ///
    /// `sort`は自由形式のトークン。認識できない値（空文字を含む）は
    /// エラーにせず作成日時の降順になる。
    pub async fn get(&self, sort: &str) -> Result<Vec<Room>> {
        let ordering = RoomOrdering::from_token(sort);
        tracing::debug!(?ordering, sort, "listing rooms");

        match ordering {
            RoomOrdering::DateAscending => self.repository.get_by_date().await,
            RoomOrdering::PriceAscending => self.repository.get_by_price().await,
            RoomOrdering::PriceDescending => self.repository.get_by_price_desc().await,
            RoomOrdering::DateDescending => self.repository.get_by_date_desc().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegistryError;
    use crate::ports::MockRoomRepository;
    use chrono::Utc;

    fn room(id: i64, price: f64) -> Room {
        Room {
            id: RoomId::new(id),
            description: format!("room {id}"),
            price: Price::new(price).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn service(repo: MockRoomRepository) -> RoomService {
        RoomService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_add_returns_assigned_id() {
        let mut repo = MockRoomRepository::new();
        repo.expect_add()
            .withf(|room| room.description == "Good room" && room.price.value() == 5.41)
            .times(1)
            .returning(|_| Ok(RoomId::new(1)));

        let id = service(repo)
            .add(AddRoom {
                description: "Good room".to_string(),
                price: 5.41,
            })
            .await
            .unwrap();

        assert_eq!(id, RoomId::new(1));
    }

    #[tokio::test]
    async fn test_add_rejects_negative_price_without_storage_call() {
        let mut repo = MockRoomRepository::new();
        repo.expect_add().never();

        let result = service(repo)
            .add(AddRoom {
                description: String::new(),
                price: -1.0,
            })
            .await;

        assert!(matches!(result, Err(RegistryError::PriceInvalid)));
    }

    #[tokio::test]
    async fn test_add_accepts_zero_price_and_empty_description() {
        let mut repo = MockRoomRepository::new();
        repo.expect_add()
            .withf(|room| room.description.is_empty() && room.price.value() == 0.0)
            .times(1)
            .returning(|_| Ok(RoomId::new(7)));

        let id = service(repo)
            .add(AddRoom {
                description: String::new(),
                price: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(id.value(), 7);
    }

    #[tokio::test]
    async fn test_add_propagates_failed_save() {
        let mut repo = MockRoomRepository::new();
        repo.expect_add()
            .times(1)
            .returning(|_| Err(RegistryError::FailedSave));

        let result = service(repo)
            .add(AddRoom {
                description: "room".to_string(),
                price: 10.0,
            })
            .await;

        assert!(matches!(result, Err(RegistryError::FailedSave)));
    }

    #[tokio::test]
    async fn test_delete_delegates() {
        let mut repo = MockRoomRepository::new();
        repo.expect_delete()
            .withf(|id| *id == RoomId::new(12))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete(RoomId::new(12)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found_and_failed_delete() {
        let mut repo = MockRoomRepository::new();
        repo.expect_delete()
            .withf(|id| id.value() == 1)
            .returning(|_| Err(RegistryError::NotFound));
        repo.expect_delete()
            .withf(|id| id.value() == 2)
            .returning(|_| Err(RegistryError::FailedDelete));
        let service = service(repo);

        assert!(matches!(
            service.delete(RoomId::new(1)).await,
            Err(RegistryError::NotFound)
        ));
        assert!(matches!(
            service.delete(RoomId::new(2)).await,
            Err(RegistryError::FailedDelete)
        ));
    }

    #[tokio::test]
    async fn test_get_dispatches_recognized_tokens() {
        let mut repo = MockRoomRepository::new();
        repo.expect_get_by_date()
            .times(1)
            .returning(|| Ok(vec![room(1, 1.0)]));
        repo.expect_get_by_price()
            .times(1)
            .returning(|| Ok(vec![room(2, 2.0)]));
        repo.expect_get_by_price_desc()
            .times(1)
            .returning(|| Ok(vec![room(3, 3.0)]));
        repo.expect_get_by_date_desc().never();
        let service = service(repo);

        assert_eq!(service.get("date").await.unwrap()[0].id.value(), 1);
        assert_eq!(service.get("price").await.unwrap()[0].id.value(), 2);
        assert_eq!(service.get("price_desc").await.unwrap()[0].id.value(), 3);
    }

    #[tokio::test]
    async fn test_get_unrecognized_token_defaults_to_date_descending() {
        let mut repo = MockRoomRepository::new();
        repo.expect_get_by_date_desc()
            .times(3)
            .returning(|| Ok(vec![room(9, 9.0)]));
        repo.expect_get_by_date().never();
        repo.expect_get_by_price().never();
        repo.expect_get_by_price_desc().never();
        let service = service(repo);

        for token in ["", "PRICE", "sorting"] {
            let rooms = service.get(token).await.unwrap();
            assert_eq!(rooms.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_get_propagates_storage_error() {
        let mut repo = MockRoomRepository::new();
        repo.expect_get_by_price()
            .returning(|| Err(RegistryError::FailedGet));

        let result = service(repo).get("price").await;
        assert!(matches!(result, Err(RegistryError::FailedGet)));
    }
}
