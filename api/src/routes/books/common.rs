use serde::Deserialize;

/// Body shared by the add-copy and retire-copy endpoints; the copy itself is
/// addressed by the path.
#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub condition: String,
    pub comment: Option<String>,
    pub handled_by: Option<String>,
}
