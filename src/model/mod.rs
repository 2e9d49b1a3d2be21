//! Data model for lock manifests.
//!
//! A [`LockManifest`] holds the raw lines of the `PODS:` section; each line
//! normalizes into a [`DependencyEntry`] such as `"Firebase/Core"`.

mod entry;
mod manifest;

pub use entry::{DependencyEntry, HIERARCHY_SEPARATOR};
pub use manifest::LockManifest;
