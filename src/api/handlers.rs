use crate::application::{BookingService, RoomService};
use crate::domain::{
    BookingId, RegistryError, RoomId,
    commands::{AddBooking, AddRoom},
};
use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::{HeaderMap, StatusCode},
};
use std::borrow::Cow;

use super::{
    error::ApiError,
    types::{BookingCreatedResponse, BookingResponse, RoomCreatedResponse, RoomResponse},
};

// ============================================================================
// State
// ============================================================================

/// ルーターに渡されるアプリケーション状態
///
/// 各ハンドラーは`FromRef`で自分が必要とするサービスだけを取り出す。
#[derive(Clone, FromRef)]
pub struct AppState {
    pub rooms: RoomService,
    pub bookings: BookingService,
}

/// ヘッダー値を文字列として取得する
///
/// 存在しない場合は空文字。非ASCIIのUTF-8はそのまま保持し、
/// 不正なバイト列は置換文字に変換する。
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Cow<'a, str> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .unwrap_or_default()
}

/// クエリパラメータの値を取得する
///
/// 同じキーが複数ある場合は最初の値を使う。存在しない場合は空文字。
fn query_param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

// ============================================================================
// Room handlers
// ============================================================================

/// POST /room/add - 部屋を登録
///
/// 使用するヘッダー: `description`, `price`
pub async fn add_room(
    State(rooms): State<RoomService>,
    headers: HeaderMap,
) -> Result<Json<RoomCreatedResponse>, ApiError> {
    let price = header_str(&headers, "price")
        .parse::<f64>()
        .map_err(|_| RegistryError::PriceInvalid)?;

    let cmd = AddRoom {
        description: header_str(&headers, "description").into_owned(),
        price,
    };

    let id = rooms.add(cmd).await?;

    Ok(Json(RoomCreatedResponse::from(id)))
}

/// GET /room/list?sorting=... - 部屋一覧を取得
///
/// 並び順: `date`（作成日時の昇順）, `price`（価格の昇順）, `price_desc`（価格の降順）。
/// 指定なし・その他の値は作成日時の降順。
pub async fn list_rooms(
    State(rooms): State<RoomService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let sort = query_param(&params, "sorting");

    let rooms = rooms.get(sort).await?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// DELETE /room/delete?room_id=... - 部屋を削除
pub async fn delete_room(
    State(rooms): State<RoomService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let id: RoomId = query_param(&params, "room_id").parse()?;

    rooms.delete(id).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Booking handlers
// ============================================================================

/// POST /bookings/create - 予約を登録
///
/// 使用するヘッダー: `room_id`, `date_start`, `date_end`（日付は `YYYY-MM-DD`）
pub async fn create_booking(
    State(bookings): State<BookingService>,
    headers: HeaderMap,
) -> Result<Json<BookingCreatedResponse>, ApiError> {
    let room_id: RoomId = header_str(&headers, "room_id").parse()?;

    let cmd = AddBooking {
        room_id,
        start: header_str(&headers, "date_start").into_owned(),
        end: header_str(&headers, "date_end").into_owned(),
    };

    let id = bookings.add(cmd).await?;

    Ok(Json(BookingCreatedResponse::from(id)))
}

/// GET /bookings/list?room_id=... - 部屋の予約一覧を開始日順に取得
pub async fn list_bookings(
    State(bookings): State<BookingService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let room_id: RoomId = query_param(&params, "room_id").parse()?;

    let bookings = bookings.get(room_id).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// DELETE /bookings/delete?booking_id=... - 予約を削除
pub async fn delete_booking(
    State(bookings): State<BookingService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let id: BookingId = query_param(&params, "booking_id").parse()?;

    bookings.delete(id).await?;

    Ok(StatusCode::OK)
}
