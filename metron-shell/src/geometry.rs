//! Geometric value types.
//!
//! These carry no unit tag: the unit a value is expressed in is implied by the conversion scope
//! that produced it.

/// A scalar length.
pub type Dimension = f64;

pub type Size = euclid::default::Size2D<Dimension>;
pub type Point = euclid::default::Point2D<Dimension>;
/// A 2D vector, also used for displacements.
pub type Vector = euclid::default::Vector2D<Dimension>;
pub type Rect = euclid::default::Rect<Dimension>;
/// Left, top, right and bottom insets.
pub type Margins = euclid::default::SideOffsets2D<Dimension>;

/// Builds margins from their sides in left, top, right, bottom order.
///
/// `euclid::SideOffsets2D::new` takes them clockwise starting from the top, which is easy to get
/// wrong at call sites.
pub fn margins(left: Dimension, top: Dimension, right: Dimension, bottom: Dimension) -> Margins {
    Margins::new(top, right, bottom, left)
}
