use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::RegistryError;

/// 予約日付の書式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 部屋ID - ストレージが採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(i64);

impl RoomId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for RoomId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| RegistryError::IdInvalid)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 予約ID - ストレージが採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(i64);

impl BookingId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for BookingId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| RegistryError::IdInvalid)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 価格
///
/// 不変条件：0以上の有限値
/// 検証済みのコンストラクタ経由でしか作成できない。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// # エラー
    /// 負数・NaN・無限大の場合は`RegistryError::PriceInvalid`を返す
    pub fn new(value: f64) -> Result<Self, RegistryError> {
        if !value.is_finite() || value < 0.0 {
            return Err(RegistryError::PriceInvalid);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// 予約日付（`YYYY-MM-DD`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// 厳密な `YYYY-MM-DD` 形式のみを受け付ける
    ///
    /// 年は4桁、月と日は2桁のゼロ埋めが必須。
    pub fn parse(s: &str) -> Result<Self, RegistryError> {
        let is_fixed_width = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !is_fixed_width {
            return Err(RegistryError::DateInvalid);
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| RegistryError::DateInvalid)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// 部屋一覧の並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomOrdering {
    /// 作成日時の昇順
    DateAscending,
    /// 作成日時の降順
    DateDescending,
    /// 価格の昇順
    PriceAscending,
    /// 価格の降順
    PriceDescending,
}

impl RoomOrdering {
    /// 認識できないトークン（空文字を含む）に使われる並び順
    pub const DEFAULT: RoomOrdering = RoomOrdering::DateDescending;

    /// ソートトークンを並び順に変換する
    ///
    /// 未知のトークンはエラーにせず、常に`DEFAULT`（作成日時の降順）になる。
    pub fn from_token(token: &str) -> Self {
        match token {
            "date" => RoomOrdering::DateAscending,
            "date_desc" => RoomOrdering::DateDescending,
            "price" => RoomOrdering::PriceAscending,
            "price_desc" => RoomOrdering::PriceDescending,
            _unrecognized => Self::DEFAULT,
        }
    }
}
