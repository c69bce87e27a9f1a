use std::fmt;

use crate::{bounds::edge::EdgeRule, foundation::core::Rect};

/// Direction an edge moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x axis (left, right).
    Horizontal,
    /// y axis (top, bottom).
    Vertical,
}

/// One side of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Edge {
    /// Every edge, in rule-set field order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Axis this edge moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Reads this edge's coordinate from `rect`.
    pub fn of(self, rect: Rect) -> i32 {
        match self {
            Self::Top => rect.top,
            Self::Bottom => rect.bottom,
            Self::Left => rect.left,
            Self::Right => rect.right,
        }
    }

    /// Whether the edge sits at the far end of its axis (bottom, right).
    pub fn is_far(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }

    /// Lowercase edge name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-edge rules for deriving a child rectangle from its parent. All edges start unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoundsRuleSet {
    /// Rule for the top edge.
    pub top: EdgeRule,
    /// Rule for the bottom edge.
    pub bottom: EdgeRule,
    /// Rule for the left edge.
    pub left: EdgeRule,
    /// Rule for the right edge.
    pub right: EdgeRule,
}

impl BoundsRuleSet {
    /// A rule set with every edge unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule for `edge`.
    pub fn edge(&self, edge: Edge) -> &EdgeRule {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    /// Mutable rule for `edge`.
    pub fn edge_mut(&mut self, edge: Edge) -> &mut EdgeRule {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    /// Replace the rule for `edge`.
    pub fn with(mut self, edge: Edge, rule: EdgeRule) -> Self {
        *self.edge_mut(edge) = rule;
        self
    }

    /// True when all four edges inherit the parent.
    pub fn is_unset(&self) -> bool {
        Edge::ALL.iter().all(|&e| self.edge(e).is_unset())
    }

    /// Resolves against `parent`. See [`crate::resolve`].
    pub fn resolve(&self, parent: Rect) -> Rect {
        crate::bounds::resolver::resolve(parent, self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/rule_set.rs"]
mod tests;
