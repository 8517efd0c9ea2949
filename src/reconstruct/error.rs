use std::fmt;

use crate::sketch::SketchContent;

/// Error returned when reconstructing a reaction from a sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// The sketch contains no reaction arrow.
    NoArrow,
    /// The sketch's declared content is not one of the reaction shapes.
    UnsupportedContent { content: SketchContent },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArrow => write!(f, "no arrow in the reaction"),
            Self::UnsupportedContent { content } => {
                write!(f, "cannot reconstruct a reaction from {content:?} content")
            }
        }
    }
}

impl std::error::Error for ReconstructError {}
