//! PATH-value decomposition and bin/sbin reordering.
//!
//! This module handles:
//! - Parsing one colon-delimited PATH segment into its slash components
//! - The single-pass swap that moves each bin directory before its sbin
//!   sibling

pub mod rearrange;
pub mod segment;

pub use rearrange::rearrange_bin_sbin;
pub use segment::Segment;
