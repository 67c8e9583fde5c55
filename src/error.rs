use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallTintError {
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("No wall region selected: select a wall region first")]
    NoRegionSelected,

    #[error("Invalid channel count: {0} (expected 3 or 4)")]
    InvalidChannelCount(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WallTintError>;

// Serialize as the display string so a UI layer can show the message as-is
impl serde::Serialize for WallTintError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message() {
        let json = serde_json::to_string(&WallTintError::NoRegionSelected).unwrap();
        assert_eq!(json, "\"No wall region selected: select a wall region first\"");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = WallTintError::OutOfBounds { x: 9, y: 2, width: 4, height: 4 };
        assert_eq!(err.to_string(), "Coordinate (9, 2) is outside the 4x4 buffer");
    }
}
