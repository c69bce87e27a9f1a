//! Rule-based bounds resolution for composite (layered) drawables.
//!
//! A child's rectangle is derived from its parent's rectangle through four independent edge
//! rules. Each edge is either inherited from the parent, pinned to an absolute coordinate, or
//! placed at a fraction of the parent's span plus a pixel adjustment.
//!
//! # Pieces
//!
//! 1. **Resolve**: [`resolve`] turns `parent + BoundsRuleSet` into a child [`Rect`]. It is a
//!    pure O(1) transform with no validation and no errors.
//! 2. **Layer**: [`CompositeLayer`] keeps ordered children with their rules and re-resolves
//!    them when the parent bounds change.
//! 3. **Properties**: [`EdgeProperty`] names the twelve per-edge accessors an animation system
//!    drives (`absoluteTop`, `fractionLeft`, `adjustmentBottom`, ...).
//! 4. **Timeline**: [`Timeline`] samples keyframed property tracks at a time in milliseconds
//!    and applies them to a layer.
//! 5. **Documents**: [`LayerDocument`] is the JSON form of a layer and its timeline.
//!
//! ```
//! use composite_bounds::{BoundsRuleSet, EdgeRule, Rect, resolve};
//!
//! let rules = BoundsRuleSet {
//!     top: EdgeRule::fractional(0.25),
//!     bottom: EdgeRule::fractional(0.75),
//!     left: EdgeRule::absolute(10),
//!     right: EdgeRule::UNSET,
//! };
//! assert_eq!(resolve(Rect::new(0, 0, 100, 200), &rules), Rect::new(10, 50, 100, 150));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod bounds;
mod composite;
mod document;
mod foundation;

pub use animation::ease::Ease;
pub use animation::timeline::{Keyframe, PropertyTrack, Timeline};
pub use bounds::edge::{EdgeMode, EdgeRule, RuleValue};
pub use bounds::resolver::{resolve, resolve_edge};
pub use bounds::rule_set::{Axis, BoundsRuleSet, Edge};
pub use composite::layer::{ChildLayer, CompositeLayer};
pub use composite::property::{EdgeProperty, PropertyKind, PropertyValue};
pub use document::layer_doc::{ChildSpec, LayerDocument};
pub use foundation::core::Rect;
pub use foundation::error::{BoundsError, BoundsResult};
