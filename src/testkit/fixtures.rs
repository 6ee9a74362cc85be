//! Factories for wire types and enveloped JSON bodies.
//!
//! JSON builders produce the exact shapes the backend serves, so mock
//! server tests stay readable.

use serde_json::{json, Value};

use crate::api::types::{AdminUser, User};

/// Wrap a payload in the standard response envelope.
pub fn envelope(data: Value) -> Value {
    json!({
        "success": true,
        "message": "OK",
        "statusCode": 200,
        "timestamp": "2024-06-01T12:00:00.000Z",
        "data": data
    })
}

/// Pagination block with `recordsPerPage` fixed at 20.
pub fn pagination(current_page: u32, total_pages: u32, total_records: u64) -> Value {
    json!({
        "currentPage": current_page,
        "totalPages": total_pages,
        "totalRecords": total_records,
        "recordsPerPage": 20,
        "hasNextPage": current_page < total_pages,
        "hasPrevPage": current_page > 1
    })
}

/// User document as the list route serves it.
pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "_id": id,
        "id": id,
        "email": email,
        "firstName": "Test",
        "lastName": "User",
        "fullName": "Test User",
        "country": "GB",
        "status": "active",
        "kycStatus": "verified",
        "walletBalance": { "$numberDecimal": "1000.00" },
        "createdAt": "2024-01-15T10:30:00.000Z"
    })
}

/// Users list payload: `{ users, metadata: { pagination } }`.
pub fn users_page_json(users: Vec<Value>, total_pages: u32, total_records: u64) -> Value {
    json!({
        "users": users,
        "metadata": { "pagination": pagination(1, total_pages, total_records) }
    })
}

/// Login payload matching the auth route.
pub fn login_payload_json(email: &str) -> Value {
    json!({
        "user": {
            "id": "admin-1",
            "email": email,
            "role": "admin",
            "status": "active",
            "twoFactorEnabled": false
        },
        "tokens": {
            "accessToken": "access-token-1",
            "refreshToken": "refresh-token-1",
            "expiresIn": "15m"
        },
        "sessionId": "session-1"
    })
}

/// Typed admin profile.
pub fn admin() -> AdminUser {
    AdminUser {
        id: "admin-1".into(),
        email: "ops@example.com".into(),
        role: "admin".into(),
        status: Some("active".into()),
        two_factor_enabled: false,
    }
}

/// Typed user with the fields the tables render.
pub fn user(id: &str, email: &str) -> User {
    serde_json::from_value(user_json(id, email)).expect("fixture user deserializes")
}
