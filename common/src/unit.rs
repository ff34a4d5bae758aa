//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity being added to a collection.
#[derive(Clone, Copy, Debug)]
pub struct Addition;

/// Marker type describing a scheduled on-site visit.
#[derive(Clone, Copy, Debug)]
pub struct Visit;
