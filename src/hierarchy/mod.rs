//! Reduction and grouping of hierarchical dependency names.
//!
//! Lock manifests list a pod together with every subspec that was resolved,
//! e.g. `A`, `A/Core` and `A/Core/Detail`. Declaring the deepest name implies
//! its ancestors, so consumers only need the leaves:
//!
//! ```
//! use podlock_tools::hierarchy::{group, reduce};
//!
//! let names = ["A", "A/Core", "A/Net", "B"];
//! let leaves = reduce(&names);
//! assert_eq!(leaves, ["A/Core", "A/Net", "B"]);
//! assert_eq!(group("A", &leaves), ["A/Core", "A/Net"]);
//! ```

mod group;
mod reduce;

pub use group::group;
pub use reduce::reduce;
