// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Flow axes for each writing direction

use crate::model::Direction;
use serde::Serialize;

/// A screen axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Whether positions grow with or against the screen axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Rightwards or downwards
    Positive,
    /// Leftwards or upwards
    Negative,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// How lines stack and how characters advance within a line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAxes {
    /// Axis successive lines are stacked along
    pub line_axis: Axis,
    pub line_sign: Sign,
    /// Axis characters advance along
    pub char_axis: Axis,
    pub char_sign: Sign,
}

impl FlowAxes {
    const fn new(line_axis: Axis, line_sign: Sign, char_axis: Axis, char_sign: Sign) -> Self {
        Self {
            line_axis,
            line_sign,
            char_axis,
            char_sign,
        }
    }
}

use Axis::{Horizontal, Vertical};
use Sign::{Negative, Positive};

const LTR: FlowAxes = FlowAxes::new(Vertical, Positive, Horizontal, Positive);
const RTL: FlowAxes = FlowAxes::new(Vertical, Positive, Horizontal, Negative);
const TTB_RTL: FlowAxes = FlowAxes::new(Horizontal, Negative, Vertical, Positive);
const TTB_LTR: FlowAxes = FlowAxes::new(Horizontal, Positive, Vertical, Positive);

impl Direction {
    /// The flow axes this direction lays text out along
    pub fn axes(self) -> FlowAxes {
        match self {
            Direction::LeftToRight => LTR,
            Direction::RightToLeft => RTL,
            Direction::TopToBottomRtl => TTB_RTL,
            Direction::TopToBottomLtr => TTB_LTR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_directions_stack_lines_downwards() {
        for direction in [Direction::LeftToRight, Direction::RightToLeft] {
            let axes = direction.axes();
            assert_eq!(axes.line_axis, Vertical);
            assert_eq!(axes.line_sign, Positive);
            assert_eq!(axes.char_axis, Horizontal);
        }
        assert!(Direction::RightToLeft.axes().char_sign.is_negative());
        assert!(!Direction::LeftToRight.axes().char_sign.is_negative());
    }

    #[test]
    fn vertical_directions_differ_only_in_column_order() {
        let rtl = Direction::TopToBottomRtl.axes();
        let ltr = Direction::TopToBottomLtr.axes();
        assert_eq!(rtl.char_axis, Vertical);
        assert_eq!(rtl.char_sign, ltr.char_sign);
        assert_eq!(rtl.line_sign, Negative);
        assert_eq!(ltr.line_sign, Positive);
    }
}
