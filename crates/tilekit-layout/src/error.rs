#![forbid(unsafe_code)]

//! Composer configuration errors.

/// A configuration error detected while composing a layout.
///
/// Composition never partially succeeds: either a full
/// [`Composition`](crate::Composition) is produced or one of these is
/// returned naming the offending definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A dock layout has no panel left to absorb the remaining space.
    MissingFill,
    /// A dock layout has more than one panel claiming the remaining space.
    DuplicateFill {
        first: usize,
        first_name: String,
        second: usize,
        second_name: String,
    },
    /// A priority split was asked to compose an empty definition list.
    MissingPrimary,
    /// A priority split's primary panel is not docked to an edge, so no
    /// split axis can be derived.
    PrimaryNotDocked { index: usize, name: String },
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFill => {
                write!(f, "dock layout has no fill panel (Position::None or Center)")
            }
            Self::DuplicateFill {
                first,
                first_name,
                second,
                second_name,
            } => write!(
                f,
                "dock layout has multiple fill panels: {first_name:?} (index {first}) and {second_name:?} (index {second})"
            ),
            Self::MissingPrimary => {
                write!(f, "priority split requires at least one definition")
            }
            Self::PrimaryNotDocked { index, name } => write!(
                f,
                "priority split primary {name:?} (index {index}) must be docked to an edge"
            ),
        }
    }
}

impl std::error::Error for ComposeError {}
