use crate::{
    bounds::resolver::resolve,
    bounds::rule_set::BoundsRuleSet,
    composite::property::{EdgeProperty, PropertyValue},
    foundation::core::Rect,
    foundation::error::{BoundsError, BoundsResult},
};

/// A child of a [`CompositeLayer`]: host content plus the rules placing it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildLayer<T> {
    content: T,
    rules: BoundsRuleSet,
    bounds: Rect,
}

impl<T> ChildLayer<T> {
    /// Host content.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mutable host content.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Rules placing this child.
    pub fn rules(&self) -> &BoundsRuleSet {
        &self.rules
    }

    /// Edits take effect on the next [`CompositeLayer::recompute_bounds`] or
    /// [`CompositeLayer::set_bounds`].
    pub fn rules_mut(&mut self) -> &mut BoundsRuleSet {
        &mut self.rules
    }

    /// Bounds as of the last recompute.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn recompute(&mut self, parent: Rect) {
        self.bounds = resolve(parent, &self.rules);
    }
}

/// Ordered stack of children sharing one parent rectangle.
///
/// `T` is whatever handle the host uses for a child's content (a drawable, a view id, a
/// name). Children are kept in insertion order, which is also their drawing order.
/// Cloning a layer deep-copies every child's rules.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeLayer<T> {
    bounds: Rect,
    children: Vec<ChildLayer<T>>,
}

impl<T> Default for CompositeLayer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CompositeLayer<T> {
    /// Empty layer at [`Rect::ZERO`].
    pub fn new() -> Self {
        Self::with_bounds(Rect::ZERO)
    }

    /// Empty layer with the given parent rectangle.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            children: Vec::new(),
        }
    }

    /// Current parent rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Stores the new parent rectangle and re-resolves every child against it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        tracing::debug!(%bounds, children = self.children.len(), "composite bounds changed");
        self.bounds = bounds;
        for child in &mut self.children {
            child.recompute(bounds);
        }
    }

    /// Appends a child with unset rules. Returns its index.
    pub fn add_child(&mut self, content: T) -> usize {
        self.add_child_with_rules(content, BoundsRuleSet::default())
    }

    /// Appends a child and resolves it against the current bounds. Returns its index.
    pub fn add_child_with_rules(&mut self, content: T, rules: BoundsRuleSet) -> usize {
        let mut child = ChildLayer {
            content,
            rules,
            bounds: Rect::ZERO,
        };
        child.recompute(self.bounds);
        self.children.push(child);
        self.children.len() - 1
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the layer has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child at `index`.
    pub fn child(&self, index: usize) -> Option<&ChildLayer<T>> {
        self.children.get(index)
    }

    /// Mutable child at `index`.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut ChildLayer<T>> {
        self.children.get_mut(index)
    }

    /// Content of the child at `index`.
    pub fn content(&self, index: usize) -> Option<&T> {
        self.children.get(index).map(ChildLayer::content)
    }

    /// Children in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &ChildLayer<T>> {
        self.children.iter()
    }

    /// Removes the child at `index` and returns its content.
    pub fn remove_child(&mut self, index: usize) -> Option<T> {
        if index >= self.children.len() {
            return None;
        }
        Some(self.children.remove(index).content)
    }

    /// Removes the first child whose content equals `content`.
    pub fn remove_content(&mut self, content: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.children.iter().position(|c| &c.content == content)?;
        self.remove_child(index)
    }

    /// Re-resolves one child after its rules were edited in place.
    pub fn recompute_bounds(&mut self, index: usize) -> BoundsResult<Rect> {
        let parent = self.bounds;
        let child = self.child_mut_checked(index)?;
        child.recompute(parent);
        Ok(child.bounds)
    }

    /// Reads one edge property of a child.
    pub fn property(&self, index: usize, property: EdgeProperty) -> BoundsResult<PropertyValue> {
        let child = self
            .children
            .get(index)
            .ok_or_else(|| missing_child(index, self.children.len()))?;
        Ok(property.get(&child.rules, self.bounds))
    }

    /// Writes one edge property of a child, then recomputes that child.
    pub fn set_property(
        &mut self,
        index: usize,
        property: EdgeProperty,
        value: PropertyValue,
    ) -> BoundsResult<Rect> {
        let parent = self.bounds;
        let child = self.child_mut_checked(index)?;
        property.set(&mut child.rules, value)?;
        child.recompute(parent);
        Ok(child.bounds)
    }

    fn child_mut_checked(&mut self, index: usize) -> BoundsResult<&mut ChildLayer<T>> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or_else(|| missing_child(index, len))
    }
}

fn missing_child(index: usize, len: usize) -> BoundsError {
    BoundsError::validation(format!(
        "child index {index} out of range (layer has {len} children)"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/composite/layer.rs"]
mod tests;
