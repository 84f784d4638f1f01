use crate::domain::{Booking, Room};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// インメモリデータベースの中身
///
/// `room`と`bookings`の2テーブルに相当する。IDは1から連番で採番する。
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub rooms: BTreeMap<i64, Room>,
    pub bookings: BTreeMap<i64, Booking>,
    last_room_id: i64,
    last_booking_id: i64,
}

impl Tables {
    pub fn next_room_id(&mut self) -> i64 {
        self.last_room_id += 1;
        self.last_room_id
    }

    pub fn next_booking_id(&mut self) -> i64 {
        self.last_booking_id += 1;
        self.last_booking_id
    }
}

/// 部屋・予約アダプター間で共有されるインメモリデータベース
///
/// PostgreSQLと同様に、予約は部屋への外部キーを持ち、
/// 部屋の削除は予約へカスケードする。
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
