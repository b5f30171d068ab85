//! Describe where a submenu opens relative to its trigger.
//!
//! The menu logic never positions anything; it hands a [`Placement`] to the
//! positioning collaborator, which handles the actual geometry and collisions.
use crate::LayoutDirection;

use std::fmt;

/// The requested side a submenu opens toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The leading edge of the trigger.
    Start,
    /// The trailing edge of the trigger.
    #[default]
    End,
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// The physical left side.
    Left,
    /// The physical right side.
    Right,
}

impl Direction {
    fn is_horizontal(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Left | Self::Right)
    }
}

/// How a submenu lines up with its trigger along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Align with the start of the trigger.
    #[default]
    Start,
    /// Align with the end of the trigger.
    End,
}

/// The cross-axis edge of a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top-aligned.
    Top,
    /// Bottom-aligned.
    Bottom,
    /// Start-aligned.
    Start,
    /// End-aligned.
    End,
}

/// A concrete placement descriptor, like `end top` or `bottom start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The side of the trigger the submenu opens toward.
    pub side: Direction,
    /// The edge the submenu is aligned to.
    pub edge: Edge,
}

impl Placement {
    /// Maps a requested direction and alignment into a [`Placement`].
    ///
    /// Sideways directions align to the top or bottom of the trigger;
    /// vertical directions align to its start or end.
    pub fn compute(direction: Direction, align: Align) -> Self {
        let edge = if direction.is_horizontal() {
            match align {
                Align::Start => Edge::Top,
                Align::End => Edge::Bottom,
            }
        } else {
            match align {
                Align::Start => Edge::Start,
                Align::End => Edge::End,
            }
        };

        Self {
            side: direction,
            edge,
        }
    }

    /// Resolves the logical sides of the [`Placement`] into physical ones.
    pub fn resolve_in(self, direction: LayoutDirection) -> Self {
        let (start, end) = direction.physical(Direction::Left, Direction::Right);

        let side = match self.side {
            Direction::Start => start,
            Direction::End => end,
            other => other,
        };

        Self { side, ..self }
    }

    /// Resolves the logical sides using the global layout direction.
    pub fn resolve(self) -> Self {
        self.resolve_in(crate::layout_direction())
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::compute(Direction::default(), Align::default())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Direction::Start => "start",
            Direction::End => "end",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        };

        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Start => "start",
            Edge::End => "end",
        };

        write!(f, "{side} {edge}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opens_toward_the_end() {
        assert_eq!(Placement::default().to_string(), "end top");
    }

    #[test]
    fn sideways_directions_align_vertically() {
        assert_eq!(
            Placement::compute(Direction::Start, Align::End).to_string(),
            "start bottom"
        );
        assert_eq!(
            Placement::compute(Direction::Right, Align::Start).to_string(),
            "right top"
        );
    }

    #[test]
    fn vertical_directions_keep_alignment() {
        assert_eq!(
            Placement::compute(Direction::Bottom, Align::Start).to_string(),
            "bottom start"
        );
        assert_eq!(
            Placement::compute(Direction::Top, Align::End).to_string(),
            "top end"
        );
    }

    #[test]
    fn logical_sides_flip_in_rtl() {
        let placement = Placement::default();

        assert_eq!(placement.resolve_in(LayoutDirection::Ltr).side, Direction::Right);
        assert_eq!(placement.resolve_in(LayoutDirection::Rtl).side, Direction::Left);

        let above = Placement::compute(Direction::Top, Align::Start);
        assert_eq!(above.resolve_in(LayoutDirection::Rtl), above);
    }
}
