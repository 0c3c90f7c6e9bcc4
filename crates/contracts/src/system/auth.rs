use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Profile of the signed-in store staff member.
///
/// Page controllers pass `name` and the location ids into the shipment core
/// explicitly; nothing below the UI reads session state on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub store_name: String,
    /// Location the user's store receives shipments under (primary query key).
    pub location_id: String,
    /// Warehouse the store's deliveries are routed through (alternate key).
    pub warehouse_id: String,
}
