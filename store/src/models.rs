//! Data models shared across the workspace.

use serde::{Deserialize, Serialize};

/// The signed-in account as the remote API reports it.
///
/// Owned by the session store; everything else reads it through session
/// accessors. Timestamps stay as the wire strings; the client only displays
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_uses_wire_field_names() {
        let raw = r#"{
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "isEmailVerified": true,
            "createdAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert!(user.is_email_verified);
        assert_eq!(user.created_at, "2024-01-01T00:00:00.000Z");

        let back = serde_json::to_value(&user).unwrap();
        assert!(back.get("isEmailVerified").is_some());
        assert!(back.get("is_email_verified").is_none());
    }
}
