use derive_more::Display;
use std::error;

/// Errors that can come out of grid operations. Every error is terminal to
/// the call that produced it; there is nothing transient to retry.
///
/// Numeric trouble (NaN or infinite input, a degenerate cell size) is **not**
/// reported here. It flows through the float math and comes out the other
/// side as NaN/∞, the same way it would anywhere else.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum GridError {
    /// A snapping bitmask contained bits outside the supported layout. See
    /// [SnappingMode::from_bits](crate::SnappingMode::from_bits).
    #[display(fmt = "Invalid snapping mode {:#06x}", bits)]
    InvalidSnappingMode { bits: u32 },

    /// Snapping was requested with a subdivision resolution of zero
    #[display(fmt = "Snapping resolution must be at least 1")]
    InvalidResolution,

    /// Asked for the final waypoint of a path that has no waypoints
    #[display(fmt = "Path contains no waypoints")]
    EmptyPath,
}

impl error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GridError::InvalidSnappingMode { bits: 0x4 }.to_string(),
            "Invalid snapping mode 0x0004"
        );
        assert_eq!(
            GridError::EmptyPath.to_string(),
            "Path contains no waypoints"
        );
    }

    #[test]
    fn test_into_anyhow() {
        // Callers mostly bubble these up through anyhow, make sure they can
        // come back out
        let err: anyhow::Error = GridError::InvalidResolution.into();
        assert_eq!(
            err.downcast::<GridError>().unwrap(),
            GridError::InvalidResolution
        );
    }
}
