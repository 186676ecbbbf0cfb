#![deny(unsafe_code)]

//! Reference-position end clipping for SAM/BAM CIGAR alignments.
//!
//! This crate provides:
//! - A CIGAR operation model over the full SAM alphabet (`MIDNSHP=X`):
//!   per-kind consumption semantics and a container that merges same-kind
//!   neighbors at insertion time
//! - A reference-position clipper that rewrites everything at or beyond a
//!   target reference coordinate into a single terminal soft clip
//! - A record-level adapter that applies the clip to a `noodles` alignment
//!   record buffer in place

pub mod cigar;
pub mod clip;
pub mod errors;
pub mod record;

// Re-export submodule contents at crate root for convenience
pub use cigar::{Cigar, consumes_read, consumes_reference, kind_from_char, kind_to_char};
pub use clip::clip_end_by_ref_pos;
pub use errors::{CigarClipError, Result};
pub use record::soft_clip_end_by_ref_pos;
