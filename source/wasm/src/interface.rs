use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    User,
}

fn de_role<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Role>, D::Error> {
    let raw = <Option<String>>::deserialize(d)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.as_str() {
        "admin" => return Ok(Some(Role::Admin)),
        "manager" => return Ok(Some(Role::Manager)),
        "user" => return Ok(Some(Role::User)),
        // Unknown role identifiers get the default treatment downstream
        // rather than failing the whole parse
        _ => return Ok(None),
    }
}

/// Current-user record as returned by the server. Read-only render input;
/// fetched once per page load.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "de_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_superadmin: bool,
}

/// Body of `GET /api/user/me`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct MeResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_response_full() {
        let body =
            serde_json::from_str::<MeResponse>(
                "{\"user\":{\"username\":\"ivan\",\"first_name\":\"Иван\",\"last_name\":\"Петров\",\"photo_url\":\"https://example.com/a.png\",\"role\":\"manager\",\"is_superadmin\":true}}",
            ).unwrap();
        assert_eq!(body.user.username, "ivan");
        assert_eq!(body.user.role, Some(Role::Manager));
        assert!(body.user.is_superadmin);
    }

    #[test]
    fn test_me_response_minimal() {
        let body = serde_json::from_str::<MeResponse>("{\"user\":{\"username\":\"ivan\"}}").unwrap();
        assert_eq!(body.user.first_name, None);
        assert_eq!(body.user.last_name, None);
        assert_eq!(body.user.photo_url, None);
        assert_eq!(body.user.role, None);
        assert!(!body.user.is_superadmin);
    }

    #[test]
    fn test_unknown_role_tolerated() {
        let body =
            serde_json::from_str::<MeResponse>(
                "{\"user\":{\"username\":\"ivan\",\"role\":\"auditor\"}}",
            ).unwrap();
        assert_eq!(body.user.role, None);
    }

    #[test]
    fn test_null_role_tolerated() {
        let body =
            serde_json::from_str::<MeResponse>("{\"user\":{\"username\":\"ivan\",\"role\":null}}").unwrap();
        assert_eq!(body.user.role, None);
    }
}
