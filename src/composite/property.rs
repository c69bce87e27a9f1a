use std::fmt;
use std::str::FromStr;

use crate::{
    bounds::rule_set::{BoundsRuleSet, Edge},
    foundation::core::Rect,
    foundation::error::{BoundsError, BoundsResult},
    foundation::math::round_half_up,
};

/// Which stored representation of an edge rule a property addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Absolute coordinate, in pixels.
    Absolute,
    /// Fraction of the parent span.
    Fraction,
    /// Pixel adjustment of the fractional form.
    Adjustment,
}

/// A value read from or written to an [`EdgeProperty`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    /// Pixel value (absolute, adjustment).
    Int(i32),
    /// Fraction value.
    Float(f32),
}

impl PropertyValue {
    /// Numeric value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => f64::from(v),
            Self::Float(v) => f64::from(v),
        }
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

/// Named accessor for one representation of one edge rule.
///
/// These are the handles an animation layer binds to: reads report sensible defaults for
/// unset edges (the parent edge for absolute, `0`/`1` for near/far fractions) and writes
/// only mutate the rule set. Recomputing the child's bounds is left to the caller, see
/// [`crate::CompositeLayer::set_property`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeProperty {
    /// `absoluteTop`.
    #[serde(rename = "absoluteTop")]
    AbsoluteTop,
    /// `absoluteBottom`.
    #[serde(rename = "absoluteBottom")]
    AbsoluteBottom,
    /// `absoluteLeft`.
    #[serde(rename = "absoluteLeft")]
    AbsoluteLeft,
    /// `absoluteRight`.
    #[serde(rename = "absoluteRight")]
    AbsoluteRight,
    /// `fractionTop`.
    #[serde(rename = "fractionTop")]
    FractionTop,
    /// `fractionBottom`.
    #[serde(rename = "fractionBottom")]
    FractionBottom,
    /// `fractionLeft`.
    #[serde(rename = "fractionLeft")]
    FractionLeft,
    /// `fractionRight`.
    #[serde(rename = "fractionRight")]
    FractionRight,
    /// `adjustmentTop`.
    #[serde(rename = "adjustmentTop")]
    AdjustmentTop,
    /// `adjustmentBottom`.
    #[serde(rename = "adjustmentBottom")]
    AdjustmentBottom,
    /// `adjustmentLeft`.
    #[serde(rename = "adjustmentLeft")]
    AdjustmentLeft,
    /// `adjustmentRight`.
    #[serde(rename = "adjustmentRight")]
    AdjustmentRight,
}

impl EdgeProperty {
    /// Every property.
    pub const ALL: [Self; 12] = [
        Self::AbsoluteTop,
        Self::AbsoluteBottom,
        Self::AbsoluteLeft,
        Self::AbsoluteRight,
        Self::FractionTop,
        Self::FractionBottom,
        Self::FractionLeft,
        Self::FractionRight,
        Self::AdjustmentTop,
        Self::AdjustmentBottom,
        Self::AdjustmentLeft,
        Self::AdjustmentRight,
    ];

    /// Property addressing `kind` on `edge`.
    pub fn new(edge: Edge, kind: PropertyKind) -> Self {
        match (kind, edge) {
            (PropertyKind::Absolute, Edge::Top) => Self::AbsoluteTop,
            (PropertyKind::Absolute, Edge::Bottom) => Self::AbsoluteBottom,
            (PropertyKind::Absolute, Edge::Left) => Self::AbsoluteLeft,
            (PropertyKind::Absolute, Edge::Right) => Self::AbsoluteRight,
            (PropertyKind::Fraction, Edge::Top) => Self::FractionTop,
            (PropertyKind::Fraction, Edge::Bottom) => Self::FractionBottom,
            (PropertyKind::Fraction, Edge::Left) => Self::FractionLeft,
            (PropertyKind::Fraction, Edge::Right) => Self::FractionRight,
            (PropertyKind::Adjustment, Edge::Top) => Self::AdjustmentTop,
            (PropertyKind::Adjustment, Edge::Bottom) => Self::AdjustmentBottom,
            (PropertyKind::Adjustment, Edge::Left) => Self::AdjustmentLeft,
            (PropertyKind::Adjustment, Edge::Right) => Self::AdjustmentRight,
        }
    }

    /// Edge this property addresses.
    pub fn edge(self) -> Edge {
        match self {
            Self::AbsoluteTop | Self::FractionTop | Self::AdjustmentTop => Edge::Top,
            Self::AbsoluteBottom | Self::FractionBottom | Self::AdjustmentBottom => Edge::Bottom,
            Self::AbsoluteLeft | Self::FractionLeft | Self::AdjustmentLeft => Edge::Left,
            Self::AbsoluteRight | Self::FractionRight | Self::AdjustmentRight => Edge::Right,
        }
    }

    /// Representation this property addresses.
    pub fn kind(self) -> PropertyKind {
        match self {
            Self::AbsoluteTop | Self::AbsoluteBottom | Self::AbsoluteLeft | Self::AbsoluteRight => {
                PropertyKind::Absolute
            }
            Self::FractionTop | Self::FractionBottom | Self::FractionLeft | Self::FractionRight => {
                PropertyKind::Fraction
            }
            Self::AdjustmentTop
            | Self::AdjustmentBottom
            | Self::AdjustmentLeft
            | Self::AdjustmentRight => PropertyKind::Adjustment,
        }
    }

    /// Property name as used in documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::AbsoluteTop => "absoluteTop",
            Self::AbsoluteBottom => "absoluteBottom",
            Self::AbsoluteLeft => "absoluteLeft",
            Self::AbsoluteRight => "absoluteRight",
            Self::FractionTop => "fractionTop",
            Self::FractionBottom => "fractionBottom",
            Self::FractionLeft => "fractionLeft",
            Self::FractionRight => "fractionRight",
            Self::AdjustmentTop => "adjustmentTop",
            Self::AdjustmentBottom => "adjustmentBottom",
            Self::AdjustmentLeft => "adjustmentLeft",
            Self::AdjustmentRight => "adjustmentRight",
        }
    }

    /// Read the property, using parent-derived defaults for an unset edge.
    pub fn get(self, rules: &BoundsRuleSet, parent: Rect) -> PropertyValue {
        let edge = self.edge();
        let rule = rules.edge(edge);
        match self.kind() {
            PropertyKind::Absolute if rule.is_unset() => PropertyValue::Int(edge.of(parent)),
            PropertyKind::Absolute => PropertyValue::Int(rule.absolute_value()),
            PropertyKind::Fraction if rule.is_unset() => {
                PropertyValue::Float(if edge.is_far() { 1.0 } else { 0.0 })
            }
            PropertyKind::Fraction => PropertyValue::Float(rule.fraction()),
            PropertyKind::Adjustment if rule.is_unset() => PropertyValue::Int(0),
            PropertyKind::Adjustment => PropertyValue::Int(rule.adjustment()),
        }
    }

    /// Writes `value` into the addressed representation, activating it.
    ///
    /// An adjustment written to an unset edge first anchors the fraction at that edge's
    /// unset default (0 near, 1 far), so the edge moves by the adjustment alone. This
    /// overwrites any fraction kept from before [`crate::EdgeRule::clear`].
    pub fn set(self, rules: &mut BoundsRuleSet, value: PropertyValue) -> BoundsResult<()> {
        match (self.kind(), value) {
            (PropertyKind::Absolute, PropertyValue::Int(v)) => {
                rules.edge_mut(self.edge()).set_absolute_value(v);
            }
            (PropertyKind::Fraction, PropertyValue::Float(v)) => {
                rules.edge_mut(self.edge()).set_fraction(v);
            }
            (PropertyKind::Adjustment, PropertyValue::Int(v)) => self.write_adjustment(rules, v),
            (_, value) => {
                return Err(BoundsError::property(format!(
                    "'{self}' does not accept {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Writes a numeric sample, rounding half-up for pixel-valued properties.
    ///
    /// Adjustments anchor an unset edge the same way as [`EdgeProperty::set`].
    pub fn set_sampled(self, rules: &mut BoundsRuleSet, sample: f64) {
        match self.kind() {
            PropertyKind::Absolute => rules
                .edge_mut(self.edge())
                .set_absolute_value(round_half_up(sample)),
            PropertyKind::Fraction => rules.edge_mut(self.edge()).set_fraction(sample as f32),
            PropertyKind::Adjustment => self.write_adjustment(rules, round_half_up(sample)),
        }
    }

    fn write_adjustment(self, rules: &mut BoundsRuleSet, adjustment: i32) {
        let edge = self.edge();
        let rule = rules.edge_mut(edge);
        if rule.is_unset() {
            rule.set_fraction(if edge.is_far() { 1.0 } else { 0.0 });
        }
        rule.set_adjustment(adjustment);
    }
}

impl fmt::Display for EdgeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeProperty {
    type Err = BoundsError;

    fn from_str(s: &str) -> BoundsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| BoundsError::property(format!("unknown edge property '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/property.rs"]
mod tests;
