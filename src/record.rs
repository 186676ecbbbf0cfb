//! Record-level application of reference-position end clipping.
//!
//! Applies [`clip_end_by_ref_pos`] to a whole alignment record: the anchor
//! is derived from the record's alignment start and the rewritten CIGAR is
//! stored back on the record. Sequence and quality scores are untouched:
//! a soft clip keeps those bases in storage.

use log::debug;
use noodles::sam::alignment::RecordBuf;
use noodles::sam::alignment::record_buf::Cigar as CigarBuf;

use crate::cigar::Cigar;
use crate::clip::clip_end_by_ref_pos;

/// Soft-clips the end of a record's alignment at a reference position.
///
/// Reads the record's alignment start and CIGAR, runs the clip, and on
/// success rewrites the record's CIGAR in place.
///
/// # Arguments
///
/// * `record` - The alignment record to clip
/// * `target_ref_pos` - 0-based reference position to clip from (inclusive)
///
/// # Returns
///
/// The 0-based read position at which the clip begins, or `None` when the
/// record is unmapped, has no CIGAR, or the target lies outside its mapped
/// reference span. The record is left unmodified in the `None` case.
pub fn soft_clip_end_by_ref_pos(record: &mut RecordBuf, target_ref_pos: usize) -> Option<usize> {
    let Some(alignment_start) = record.alignment_start() else {
        debug!("not clipping an unmapped record");
        return None;
    };
    // Position is 1-based; the clipper works in 0-based reference space
    let anchor = usize::from(alignment_start) - 1;

    let cigar: Cigar = record.cigar().as_ref().iter().copied().collect();
    if cigar.is_empty() {
        debug!("not clipping a record with no CIGAR");
        return None;
    }

    let mut clipped = Cigar::new();
    let read_pos = clip_end_by_ref_pos(&cigar, anchor, target_ref_pos, &mut clipped)?;

    *record.cigar_mut() = CigarBuf::from(clipped.into_vec());

    Some(read_pos)
}
