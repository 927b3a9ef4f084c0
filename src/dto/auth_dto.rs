use serde::{Deserialize, Serialize};

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub agency_id: Option<String>,
    pub agency_name: Option<String>,
}

impl LoginResponse {
    pub fn success(token: String, agency_id: String, agency_name: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            agency_id: Some(agency_id),
            agency_name: Some(agency_name),
        }
    }

}
