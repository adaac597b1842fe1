//! Platform-exclusive source bundling for Veld.
//!
//! A universal app keeps one source tree; bundling mirrors that tree into
//! an output directory once per build target. UI component sources may
//! mark regions as exclusive to certain platforms with `<EXCLUSIVE
//! OF="...">` delimiters: regions whose platform list accepts the target
//! tag are kept (delimiters dropped), the rest are stripped. Every other
//! file is copied verbatim. After the walk, the platform descriptor
//! module in the output tree is stamped with the target's identity so the
//! bundled app self-reports the platform it was built for.

pub mod bundle;
pub mod directive;
pub mod error;
pub mod stamp;

pub use bundle::{bundle, BundlePlan, BundleReport};
pub use directive::{filter_source, is_component_file};
pub use error::{BundleError, Result};
pub use stamp::{stamp_descriptor_file, stamp_source};
