//! Shared types and enums used across grayfilter.
//! Includes `ConcatDirection`, `Scaling` and `FilterKind`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConcatDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl std::fmt::Display for ConcatDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConcatDirection::Horizontal => write!(f, "horizontal"),
            ConcatDirection::Vertical => write!(f, "vertical"),
        }
    }
}

/// How floating-point samples are mapped to 8-bit on encode.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// Stretch [min, max] onto [0, 255]
    #[default]
    MinMax,
    /// Round and clamp to [0, 255]
    Clamp,
}

impl std::fmt::Display for Scaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scaling::MinMax => write!(f, "min_max"),
            Scaling::Clamp => write!(f, "clamp"),
        }
    }
}

/// Filter names accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Blur,
    Contour,
    Rotate,
    SaltNPepper,
    Concat,
    Segment,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FilterKind::Blur => "blur",
            FilterKind::Contour => "contour",
            FilterKind::Rotate => "rotate",
            FilterKind::SaltNPepper => "salt_n_pepper",
            FilterKind::Concat => "concat",
            FilterKind::Segment => "segment",
        };
        write!(f, "{}", s)
    }
}
