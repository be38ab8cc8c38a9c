use serde::Deserialize;

/// The only user fields accepted on creation; anything else in the body is dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "role")]
    pub role_id: Option<i32>,
    pub position: Option<String>,
}
