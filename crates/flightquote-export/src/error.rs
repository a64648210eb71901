use thiserror::Error;

/// Failures that abort a document. Nothing here is recoverable mid-render.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Image asset failures. Widgets swap in a text fallback; these never
/// propagate past the drawing call that hit them.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {reason}")]
    Decode { path: String, reason: String },
}
