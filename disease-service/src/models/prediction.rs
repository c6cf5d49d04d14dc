use axum::body::Bytes;

/// Outcome of classifying one crop image.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub crop: String,
    pub disease: String,
    /// Probability-like score in `[0, 1]`.
    pub confidence: f64,
    /// Identifier into an external remedy catalog; never resolved here.
    pub remedy_key: String,
}

/// An uploaded image, fully buffered. Content is opaque: nothing checks that
/// it decodes or that `content_type` is truthful.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ImageUpload {
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
