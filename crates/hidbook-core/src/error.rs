use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read curation file {path}: {source}")]
    CurationFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse curation file: {0}")]
    CurationFileParse(#[from] serde_yaml::Error),

    #[error("curation validation failed: {0}")]
    Validation(String),

    #[error("unknown mood \"{0}\"; expected one of deep, calm, wide, rise")]
    UnknownMood(String),
}
