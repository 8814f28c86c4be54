use thiserror::Error;

pub type TemplateResult<T> = Result<T, TemplateError>;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template '{id}' not found")]
    NotFound { id: String },

    #[error("Template title must not be empty")]
    EmptyTitle,

    #[error("Only image files are allowed (jpg, jpeg, png, gif): '{filename}'")]
    UnsupportedImageType { filename: String },

    #[error("Image is {size} bytes, exceeding the {max_bytes} byte limit")]
    ImageTooLarge { size: usize, max_bytes: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
