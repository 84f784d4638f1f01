use crate::domain::{Booking, BookingDate, BookingId, NewBooking, RegistryError, RoomId};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookingに変換する
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let id: i64 = row.try_get("id").map_err(|_| RegistryError::FailedGet)?;
    let room_id: i64 = row.try_get("room_id").map_err(|_| RegistryError::FailedGet)?;
    let start: NaiveDate = row
        .try_get("date_start")
        .map_err(|_| RegistryError::FailedGet)?;
    let end: NaiveDate = row
        .try_get("date_end")
        .map_err(|_| RegistryError::FailedGet)?;

    Ok(Booking {
        id: BookingId::new(id),
        room_id: RoomId::new(room_id),
        start: BookingDate::from_naive(start),
        end: BookingDate::from_naive(end),
    })
}

/// INSERT時のドライバーエラーを分類する
///
/// 外部キー制約違反はエラーメッセージではなく、
/// ドライバーが返す制約違反の種別で判定する。
fn classify_insert_error(err: sqlx::Error) -> RegistryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return RegistryError::NoForeignKey;
        }
    }

    tracing::error!("Failed to insert booking: {}", err);
    RegistryError::Storage(Box::new(err))
}

/// BookingRepositoryのPostgreSQL実装
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// PostgreSQLコネクションプールから新しいBookingRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn room_exists(&self, room_id: RoomId) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM room WHERE id = $1)")
            .bind(room_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check room {}: {}", room_id, e);
                RegistryError::FailedGet
            })
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    async fn add(&self, room_id: RoomId, booking: &NewBooking) -> Result<BookingId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO bookings (room_id, date_start, date_end)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(room_id.value())
        .bind(booking.start.value())
        .bind(booking.end.value())
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        Ok(BookingId::new(id))
    }

    async fn delete(&self, id: BookingId) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete booking {}: {}", id, e);
                RegistryError::FailedDelete
            })?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound);
        }

        Ok(())
    }

    /// 部屋の予約を開始日順に取得
    ///
    /// 0件の場合のみ部屋の存在を確認し、
    /// 「予約なし」と「部屋なし」を区別する。
    async fn get(&self, room_id: RoomId) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT id, room_id, date_start, date_end
            FROM bookings
            WHERE room_id = $1
            ORDER BY date_start ASC, id ASC
            "#,
        )
        .bind(room_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query bookings for room {}: {}", room_id, e);
            RegistryError::FailedGet
        })?;

        if rows.is_empty() && !self.room_exists(room_id).await? {
            return Err(RegistryError::NotFound);
        }

        rows.iter().map(map_row_to_booking).collect()
    }
}
