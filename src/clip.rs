//! Reference-position end clipping for CIGAR alignments.
//!
//! This module provides the core transformation: given a CIGAR, its 0-based
//! alignment anchor, and a target reference position, rewrite the CIGAR so
//! that everything from the target onward becomes a single terminal soft
//! clip, and report the read position where the clip begins.

use noodles::sam::alignment::record::cigar::op::Kind;

use crate::cigar::{Cigar, consumes_read, consumes_reference};

/// Where the forward scan decided to cut.
struct CutPoint {
    /// Index of the operation the target landed in
    index: usize,
    /// Read bases of that operation retained before the cut (match-like only)
    retained: usize,
    /// Read position at which the soft clip begins
    read_pos: usize,
}

/// Soft-clips the end of an alignment at a target reference position.
///
/// Scans the operations once, left to right, tracking a reference cursor
/// (starting at `anchor`) and a read cursor (starting at 0). The first
/// reference-consuming operation whose span contains `target_ref_pos`
/// decides the cut:
///
/// - a match-like operation (`M`/`=`/`X`) is split, keeping the bases that
///   precede the target;
/// - a deletion-like operation (`D`/`N`) offers no read bases, so the cut
///   lands at the read position already reached and the operation itself is
///   discarded.
///
/// Operations retained before the cut that consume no read bases (deletion,
/// skip, pad) and would sit directly against the new soft clip are dropped.
/// A trailing hard clip on the input is re-attached after the soft clip.
///
/// # Arguments
///
/// * `cigar` - The alignment's current CIGAR
/// * `anchor` - 0-based reference position of the first aligned base
/// * `target_ref_pos` - 0-based reference position to clip from (inclusive)
/// * `out` - Builder receiving the rewritten operations
///
/// # Returns
///
/// The 0-based read position at which the clip begins, or `None` when
/// `target_ref_pos` lies outside the alignment's mapped reference span
/// (below `anchor`, or at/after one past the last aligned base). In the
/// `None` case `out` is left untouched.
///
/// # Examples
///
/// ```
/// use cigar_clip::{Cigar, clip_end_by_ref_pos};
///
/// let cigar: Cigar = "3M3D3I3M".parse().unwrap();
/// let mut clipped = Cigar::new();
///
/// assert_eq!(clip_end_by_ref_pos(&cigar, 10, 16, &mut clipped), Some(6));
/// assert_eq!(clipped.to_string(), "3M3D3I3S");
/// ```
#[must_use]
pub fn clip_end_by_ref_pos(
    cigar: &Cigar,
    anchor: usize,
    target_ref_pos: usize,
    out: &mut Cigar,
) -> Option<usize> {
    if target_ref_pos < anchor {
        return None;
    }

    let ops = cigar.as_slice();
    let mut ref_cursor = anchor;
    let mut read_cursor = 0;
    let mut cut = None;

    for (index, op) in ops.iter().enumerate() {
        let kind = op.kind();
        let len = op.len();

        if consumes_reference(kind) {
            let op_end = ref_cursor + len;

            if target_ref_pos >= op_end {
                // Whole operation precedes the cut
                ref_cursor = op_end;
                if consumes_read(kind) {
                    read_cursor += len;
                }
                continue;
            }

            cut = if consumes_read(kind) {
                let retained = target_ref_pos.saturating_sub(ref_cursor);
                Some(CutPoint { index, retained, read_pos: read_cursor + retained })
            } else {
                Some(CutPoint { index, retained: 0, read_pos: read_cursor })
            };
            break;
        }

        if consumes_read(kind) {
            read_cursor += len;
        }
    }

    // The target lay at or beyond one past the last aligned base
    let cut = cut?;

    // Retained prefix, trimmed of operations that would sit orphaned
    // against the new soft clip. A split match-like operation guards the
    // prefix, so trimming only applies when nothing of the deciding
    // operation was kept.
    let mut end = cut.index;
    if cut.retained == 0 {
        while end > 0 && matches!(ops[end - 1].kind(), Kind::Deletion | Kind::Skip | Kind::Pad) {
            end -= 1;
        }
    }

    for op in &ops[..end] {
        out.push(*op);
    }
    if cut.retained > 0 {
        out.append(ops[cut.index].kind(), cut.retained);
    }

    // Everything from the cut onward becomes one soft clip; append absorbs
    // the zero-length case where the cut lands at the end of the read.
    out.append(Kind::SoftClip, cigar.read_len() - cut.read_pos);

    if let Some(last) = ops.last() {
        if last.kind() == Kind::HardClip {
            out.append(Kind::HardClip, last.len());
        }
    }

    Some(cut.read_pos)
}
