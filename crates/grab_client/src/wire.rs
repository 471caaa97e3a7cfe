use serde::Deserialize;

/// Body of `GET /progress`. The server reports every field on every poll;
/// absent fields decode as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressWire {
    pub status: WireStatus,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireStatus {
    Idle,
    Downloading,
    Complete,
    Error,
}

/// 2xx body of `POST /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct SubmitWire {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Non-2xx body of `POST /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ErrorWire {
    #[serde(default)]
    pub error: Option<String>,
}
