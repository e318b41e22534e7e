#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}' (expected positive, neutral or negative)")]
pub struct ParseMoodError(pub String);
