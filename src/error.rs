use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpriteoscopeError>;

#[derive(Debug, Error)]
pub enum SpriteoscopeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot create a {rows}x{cols} grid")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("viewport {width}x{height} is too small to draw the grid")]
    ViewportTooSmall { width: f32, height: f32 },
}
