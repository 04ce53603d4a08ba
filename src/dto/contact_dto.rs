use serde::Serialize;

/// Success body for `POST /contact`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    pub notification_sent: bool,
    pub confirmation_sent: bool,
}
