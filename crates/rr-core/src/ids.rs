//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are `Copy + Ord + Hash` so they work as map keys and give the router a
//! stable ordering for tie-breaking.  The inner integer is `pub` so loaders
//! can build ids straight from a CSV column.

use std::fmt;

/// Newtype over an integer id, convertible from a `usize` position.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position of this id in an id-indexed `Vec`.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a station: the sole vertex key of the routing graph.
    ///
    /// Assigned by the station directory; the router never creates one.
    pub struct StationId(u32);
}

typed_id! {
    /// Identity of one directed segment.  A bidirectional track is two
    /// segments with distinct ids.
    pub struct SegmentId(u32);
}
