use crate::domain::{NewRoom, RegistryError, Room, RoomId};
use crate::ports::room_repository::{Result, RoomRepository as RoomRepositoryTrait};
use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;

use super::database::InMemoryDatabase;

/// RoomRepositoryのインメモリ実装
pub struct RoomRepository {
    db: InMemoryDatabase,
}

impl RoomRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }

    /// 全件を指定した比較関数で並べて返す
    fn sorted_by(&self, compare: impl Fn(&Room, &Room) -> Ordering) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.db.lock().rooms.values().cloned().collect();
        rooms.sort_by(|a, b| compare(a, b));
        rooms
    }
}

fn by_date(a: &Room, b: &Room) -> Ordering {
    a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))
}

fn by_price(a: &Room, b: &Room) -> Ordering {
    a.price
        .value()
        .total_cmp(&b.price.value())
        .then(a.id.cmp(&b.id))
}

#[async_trait]
impl RoomRepositoryTrait for RoomRepository {
    async fn add(&self, room: &NewRoom) -> Result<RoomId> {
        let mut tables = self.db.lock();
        let id = RoomId::new(tables.next_room_id());

        tables.rooms.insert(
            id.value(),
            Room {
                id,
                description: room.description.clone(),
                price: room.price,
                created_at: Utc::now(),
            },
        );

        Ok(id)
    }

    /// 部屋を削除し、その部屋の予約もカスケード削除する
    async fn delete(&self, id: RoomId) -> Result<()> {
        let mut tables = self.db.lock();
        if tables.rooms.remove(&id.value()).is_none() {
            return Err(RegistryError::NotFound);
        }
        tables.bookings.retain(|_, booking| booking.room_id != id);

        Ok(())
    }

    async fn get_by_date(&self) -> Result<Vec<Room>> {
        Ok(self.sorted_by(by_date))
    }

    async fn get_by_date_desc(&self) -> Result<Vec<Room>> {
        Ok(self.sorted_by(|a, b| by_date(b, a)))
    }

    async fn get_by_price(&self) -> Result<Vec<Room>> {
        Ok(self.sorted_by(by_price))
    }

    async fn get_by_price_desc(&self) -> Result<Vec<Room>> {
        Ok(self.sorted_by(|a, b| by_price(b, a)))
    }
}
