use crate::{
    bounds::edge::{EdgeRule, RuleValue},
    bounds::rule_set::{Axis, BoundsRuleSet, Edge},
    foundation::core::Rect,
    foundation::math::scale_span,
};

/// Computes a child rectangle from `parent` and per-edge `rules`.
///
/// Each edge is resolved independently:
///
/// - unset edges copy the parent's edge,
/// - absolute edges use their value verbatim (same coordinate space as `parent`),
/// - fractional edges are `origin + round(fraction * span) + adjustment` along the edge's
///   axis, where `origin` is the parent's top or left.
///
/// Nothing is validated: inverted or zero-size parents and fractions outside `[0, 1]` are
/// honored literally. Arithmetic saturates at the `i32` range.
pub fn resolve(parent: Rect, rules: &BoundsRuleSet) -> Rect {
    Rect {
        left: resolve_edge(parent, Edge::Left, &rules.left),
        top: resolve_edge(parent, Edge::Top, &rules.top),
        right: resolve_edge(parent, Edge::Right, &rules.right),
        bottom: resolve_edge(parent, Edge::Bottom, &rules.bottom),
    }
}

/// Resolves a single edge of the child rectangle.
pub fn resolve_edge(parent: Rect, edge: Edge, rule: &EdgeRule) -> i32 {
    match rule.value() {
        RuleValue::Unset => edge.of(parent),
        RuleValue::Absolute(v) => v,
        RuleValue::Fractional {
            fraction,
            adjustment,
        } => {
            let (origin, span) = match edge.axis() {
                Axis::Vertical => (parent.top, parent.height()),
                Axis::Horizontal => (parent.left, parent.width()),
            };
            origin
                .saturating_add(scale_span(fraction, span))
                .saturating_add(adjustment)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/resolver.rs"]
mod tests;
