use serde::Serialize;

/// A raw file part extracted from the multipart request.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub size: usize,
}

/// Metadata record produced for an accepted attachment. The storage path is
/// synthesized; durable upload is handled by an external collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub content_type: String,
    pub storage_path: String,
}

/// Success body for `POST /quote`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub message: String,
    pub quote_id: String,
    pub notification_sent: bool,
    pub confirmation_sent: bool,
}
