//! Platform tag model, normalization, and build descriptor for Veld.
//!
//! The public surface is small and pure: the closed hierarchical
//! [`PlatformTag`] enumeration, the total [`PlatformTag::normalize`]
//! function turning a free-form platform name into a canonical tag, and
//! the [`PLATFORM`] descriptor identifying the current build. Nothing in
//! this crate performs I/O or holds mutable state.

pub mod descriptor;
pub mod error;
pub mod tag;

pub use descriptor::{BuildDescriptor, PlatformDescriptor, PLATFORM};
pub use error::TagParseError;
pub use tag::PlatformTag;
