use crate::domain::{NewRoom, Price, RegistryError, Room, RoomId};
use crate::ports::room_repository::{Result, RoomRepository as RoomRepositoryTrait};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをRoomに変換する
///
/// 保存済みの価格が不変条件を満たさない場合も読み取り失敗として扱う。
fn map_row_to_room(row: &PgRow) -> Result<Room> {
    let id: i64 = row.try_get("id").map_err(|_| RegistryError::FailedGet)?;
    let description: String = row
        .try_get("description")
        .map_err(|_| RegistryError::FailedGet)?;
    let price: f64 = row.try_get("price").map_err(|_| RegistryError::FailedGet)?;
    let created_at: DateTime<Utc> = row.try_get("date").map_err(|_| RegistryError::FailedGet)?;

    Ok(Room {
        id: RoomId::new(id),
        description,
        price: Price::new(price).map_err(|_| RegistryError::FailedGet)?,
        created_at,
    })
}

/// RoomRepositoryのPostgreSQL実装
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// PostgreSQLコネクションプールから新しいRoomRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 並び順を指定して全件取得する
    ///
    /// `order_by`はこのモジュール内の固定文字列のみ。
    async fn fetch_ordered(&self, order_by: &'static str) -> Result<Vec<Room>> {
        let query = format!(
            "SELECT id, description, price, date FROM room ORDER BY {}",
            order_by
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query rooms: {}", e);
                RegistryError::FailedGet
            })?;

        rows.iter().map(map_row_to_room).collect()
    }
}

#[async_trait]
impl RoomRepositoryTrait for RoomRepository {
    /// 部屋を保存する
    ///
    /// 作成日時はサーバー時刻（`now()`）で記録される。
    async fn add(&self, room: &NewRoom) -> Result<RoomId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO room (description, price, date)
            VALUES ($1, $2, now())
            RETURNING id
            "#,
        )
        .bind(&room.description)
        .bind(room.price.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert room: {}", e);
            RegistryError::FailedSave
        })?;

        Ok(RoomId::new(id))
    }

    async fn delete(&self, id: RoomId) -> Result<()> {
        let result = sqlx::query("DELETE FROM room WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete room {}: {}", id, e);
                RegistryError::FailedDelete
            })?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound);
        }

        Ok(())
    }

    async fn get_by_date(&self) -> Result<Vec<Room>> {
        self.fetch_ordered("date ASC, id ASC").await
    }

    async fn get_by_date_desc(&self) -> Result<Vec<Room>> {
        self.fetch_ordered("date DESC, id DESC").await
    }

    async fn get_by_price(&self) -> Result<Vec<Room>> {
        self.fetch_ordered("price ASC, id ASC").await
    }

    async fn get_by_price_desc(&self) -> Result<Vec<Room>> {
        self.fetch_ordered("price DESC, id DESC").await
    }
}
