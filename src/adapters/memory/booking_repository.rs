use crate::domain::{Booking, BookingId, NewBooking, RegistryError, RoomId};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;

use super::database::InMemoryDatabase;

/// BookingRepositoryのインメモリ実装
pub struct BookingRepository {
    db: InMemoryDatabase,
}

impl BookingRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    /// 部屋が存在しない場合は外部キー制約違反として扱う
    async fn add(&self, room_id: RoomId, booking: &NewBooking) -> Result<BookingId> {
        let mut tables = self.db.lock();
        if !tables.rooms.contains_key(&room_id.value()) {
            return Err(RegistryError::NoForeignKey);
        }

        let id = BookingId::new(tables.next_booking_id());
        tables.bookings.insert(
            id.value(),
            Booking {
                id,
                room_id,
                start: booking.start,
                end: booking.end,
            },
        );

        Ok(id)
    }

    async fn delete(&self, id: BookingId) -> Result<()> {
        match self.db.lock().bookings.remove(&id.value()) {
            Some(_) => Ok(()),
            None => Err(RegistryError::NotFound),
        }
    }

    async fn get(&self, room_id: RoomId) -> Result<Vec<Booking>> {
        let tables = self.db.lock();
        let mut bookings: Vec<Booking> = tables
            .bookings
            .values()
            .filter(|booking| booking.room_id == room_id)
            .copied()
            .collect();

        if bookings.is_empty() && !tables.rooms.contains_key(&room_id.value()) {
            return Err(RegistryError::NotFound);
        }

        bookings.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));
        Ok(bookings)
    }
}
