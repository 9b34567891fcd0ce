use std::path::PathBuf;

pub type ArtifactResult<T> = Result<T, ArtifactError>;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Failed to parse artifact {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("Artifact {path} has no creation bytecode.")]
    MissingBytecode { path: PathBuf },
    #[error("Artifact {path} has malformed bytecode: {source}")]
    InvalidBytecode { path: PathBuf, source: hex::FromHexError },
}
