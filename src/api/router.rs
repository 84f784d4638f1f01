use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_room, create_booking, delete_booking, delete_room, list_bookings, list_rooms,
};

/// Creates the API router with the room and booking endpoints
///
/// Room endpoints:
/// - POST /room/add - Add a room (headers: description, price)
/// - GET /room/list - List rooms (query: sorting)
/// - DELETE /room/delete - Delete a room (query: room_id)
///
/// Booking endpoints:
/// - POST /bookings/create - Book a room (headers: room_id, date_start, date_end)
/// - GET /bookings/list - List a room's bookings by start date (query: room_id)
/// - DELETE /bookings/delete - Delete a booking (query: booking_id)
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Room endpoints
        .route("/room/add", post(add_room))
        .route("/room/list", get(list_rooms))
        .route("/room/delete", delete(delete_room))
        // Booking endpoints
        .route("/bookings/create", post(create_booking))
        .route("/bookings/list", get(list_bookings))
        .route("/bookings/delete", delete(delete_booking))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
