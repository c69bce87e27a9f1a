/// Which representation of an [`EdgeRule`] is currently active.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Inherit the parent's edge unchanged.
    #[default]
    Unset,
    /// A literal coordinate in the parent's coordinate space.
    Absolute,
    /// A fraction of the parent's span plus a pixel adjustment.
    Fractional,
}

/// Snapshot of the active representation of an [`EdgeRule`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleValue {
    /// Inherit the parent edge.
    Unset,
    /// Literal coordinate.
    Absolute(i32),
    /// Fraction of the parent span plus a pixel adjustment.
    Fractional {
        /// Position along the parent span; not clamped.
        fraction: f32,
        /// Pixels added after scaling.
        adjustment: i32,
    },
}

/// How a single edge of a child rectangle is derived from its parent.
///
/// Every representation keeps its last written value independently of the active mode, so a
/// caller (typically an animation timeline) can flip between absolute and fractional
/// positioning without losing either value. Writing a representation activates it; the
/// `use_*` methods and [`EdgeRule::clear`] switch the mode without touching stored values.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgeRule {
    mode: EdgeMode,
    absolute: i32,
    fraction: f32,
    adjustment: i32,
}

impl EdgeRule {
    /// A rule that inherits the parent edge.
    pub const UNSET: Self = Self {
        mode: EdgeMode::Unset,
        absolute: 0,
        fraction: 0.0,
        adjustment: 0,
    };

    /// Pin the edge to a literal coordinate.
    pub const fn absolute(value: i32) -> Self {
        Self {
            mode: EdgeMode::Absolute,
            absolute: value,
            fraction: 0.0,
            adjustment: 0,
        }
    }

    /// Place the edge at `fraction` of the parent span.
    pub const fn fractional(fraction: f32) -> Self {
        Self::fractional_with_adjustment(fraction, 0)
    }

    /// Place the edge at `fraction` of the parent span, shifted by `adjustment` pixels.
    pub const fn fractional_with_adjustment(fraction: f32, adjustment: i32) -> Self {
        Self {
            mode: EdgeMode::Fractional,
            absolute: 0,
            fraction,
            adjustment,
        }
    }

    /// Active representation.
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// True when the edge inherits the parent.
    pub fn is_unset(&self) -> bool {
        self.mode == EdgeMode::Unset
    }

    /// Active representation with its values.
    pub fn value(&self) -> RuleValue {
        match self.mode {
            EdgeMode::Unset => RuleValue::Unset,
            EdgeMode::Absolute => RuleValue::Absolute(self.absolute),
            EdgeMode::Fractional => RuleValue::Fractional {
                fraction: self.fraction,
                adjustment: self.adjustment,
            },
        }
    }

    /// Stored absolute coordinate, whether or not it is the active representation.
    pub fn absolute_value(&self) -> i32 {
        self.absolute
    }

    /// Store an absolute coordinate and activate [`EdgeMode::Absolute`].
    pub fn set_absolute_value(&mut self, value: i32) {
        self.absolute = value;
        self.mode = EdgeMode::Absolute;
    }

    /// Stored fraction, whether or not it is the active representation.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Store a fraction and activate [`EdgeMode::Fractional`]. The adjustment is kept.
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction;
        self.mode = EdgeMode::Fractional;
    }

    /// Stored pixel adjustment of the fractional representation.
    pub fn adjustment(&self) -> i32 {
        self.adjustment
    }

    /// Store an adjustment and activate [`EdgeMode::Fractional`]. The fraction is kept.
    pub fn set_adjustment(&mut self, adjustment: i32) {
        self.adjustment = adjustment;
        self.mode = EdgeMode::Fractional;
    }

    /// Reactivates the stored absolute value. It is not reset by intervening fractional writes.
    pub fn use_absolute(&mut self) {
        self.mode = EdgeMode::Absolute;
    }

    /// Reactivates the stored fraction and adjustment.
    pub fn use_fractional(&mut self) {
        self.mode = EdgeMode::Fractional;
    }

    /// Falls back to inheriting the parent edge. Stored values are kept.
    pub fn clear(&mut self) {
        self.mode = EdgeMode::Unset;
    }
}

impl From<RuleValue> for EdgeRule {
    fn from(value: RuleValue) -> Self {
        match value {
            RuleValue::Unset => Self::UNSET,
            RuleValue::Absolute(v) => Self::absolute(v),
            RuleValue::Fractional {
                fraction,
                adjustment,
            } => Self::fractional_with_adjustment(fraction, adjustment),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/edge.rs"]
mod tests;
