use resvg::usvg;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for the sprite-sheet pipeline
#[derive(Debug)]
pub enum Error {
    /// Source directory does not exist
    DirectoryNotFound(PathBuf),
    /// No input survived conversion; there is nothing to pack
    NoSprites,
    /// The rasterizer could not allocate a canvas for this document
    Canvas(String),
    /// SVG parse error
    Svg(usvg::Error),
    /// Raster encode/decode error
    Image(image::ImageError),
    /// File I/O error
    Io(io::Error),
    /// Metadata serialization error
    Json(serde_json::Error),
}

impl From<usvg::Error> for Error {
    fn from(err: usvg::Error) -> Self {
        Error::Svg(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryNotFound(dir) => {
                write!(f, "Directory {} does not exist", dir.display())
            }
            Error::NoSprites => write!(f, "No valid PNG files generated"),
            Error::Canvas(what) => write!(f, "Could not allocate canvas for {}", what),
            Error::Svg(e) => write!(f, "SVG parse error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
