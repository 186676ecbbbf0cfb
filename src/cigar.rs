//! CIGAR operation model.
//!
//! Defines per-kind consumption semantics over the SAM operation alphabet
//! (`MIDNSHP=X`) and [`Cigar`], an ordered operation container that merges
//! same-kind neighbors at insertion time so it is always normalized.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use noodles::sam::alignment::record::cigar::{Op, op::Kind};

use crate::errors::{CigarClipError, Result};

/// Returns `true` if the operation kind consumes reference bases.
#[must_use]
pub const fn consumes_reference(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Match | Kind::Deletion | Kind::Skip | Kind::SequenceMatch | Kind::SequenceMismatch
    )
}

/// Returns `true` if the operation kind consumes read bases.
#[must_use]
pub const fn consumes_read(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Match
            | Kind::Insertion
            | Kind::SoftClip
            | Kind::SequenceMatch
            | Kind::SequenceMismatch
    )
}

/// Maps a CIGAR operation character to its kind.
///
/// # Errors
///
/// Returns [`CigarClipError::InvalidOperation`] if the character is not one
/// of `MIDNSHP=X`.
pub fn kind_from_char(ch: char) -> Result<Kind> {
    match ch {
        'M' => Ok(Kind::Match),
        'I' => Ok(Kind::Insertion),
        'D' => Ok(Kind::Deletion),
        'N' => Ok(Kind::Skip),
        'S' => Ok(Kind::SoftClip),
        'H' => Ok(Kind::HardClip),
        'P' => Ok(Kind::Pad),
        '=' => Ok(Kind::SequenceMatch),
        'X' => Ok(Kind::SequenceMismatch),
        _ => Err(CigarClipError::InvalidOperation { op: ch }),
    }
}

/// Maps an operation kind to its CIGAR character.
#[must_use]
pub const fn kind_to_char(kind: Kind) -> char {
    match kind {
        Kind::Match => 'M',
        Kind::Insertion => 'I',
        Kind::Deletion => 'D',
        Kind::Skip => 'N',
        Kind::SoftClip => 'S',
        Kind::HardClip => 'H',
        Kind::Pad => 'P',
        Kind::SequenceMatch => '=',
        Kind::SequenceMismatch => 'X',
    }
}

/// An ordered CIGAR operation sequence.
///
/// The container upholds two invariants at insertion time: no zero-length
/// operation is ever stored, and adjacent operations of the same kind are
/// merged into one. Output produced through [`Cigar::append`] therefore
/// never needs a cleanup pass.
///
/// # Examples
///
/// ```
/// use cigar_clip::Cigar;
/// use noodles::sam::alignment::record::cigar::op::Kind;
///
/// let mut cigar = Cigar::new();
/// cigar.append(Kind::Match, 3);
/// cigar.append(Kind::Match, 2); // merged with the previous op
/// cigar.append(Kind::SoftClip, 4);
/// assert_eq!(cigar.to_string(), "5M4S");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cigar {
    ops: Vec<Op>,
}

impl Cigar {
    /// Creates an empty CIGAR.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Appends an operation, upholding the container invariants.
    ///
    /// A zero `len` is silently absorbed. If the last stored operation has
    /// the same kind, its length is extended instead of pushing a new entry.
    pub fn append(&mut self, kind: Kind, len: usize) {
        if len == 0 {
            return;
        }

        if let Some(last) = self.ops.last_mut() {
            if last.kind() == kind {
                *last = Op::new(kind, last.len() + len);
                return;
            }
        }

        self.ops.push(Op::new(kind, len));
    }

    /// Appends an operation, see [`Cigar::append`].
    pub fn push(&mut self, op: Op) {
        self.append(op.kind(), op.len());
    }

    /// Returns the operations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Op] {
        &self.ops
    }

    /// Returns an iterator over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Returns the number of stored operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no operations are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Consumes the container, returning the underlying operations.
    #[must_use]
    pub fn into_vec(self) -> Vec<Op> {
        self.ops
    }

    /// Total read bases covered by the operations.
    ///
    /// Sums the read-consuming operations (match, insertion, soft clip);
    /// hard clips mark bases absent from storage and never count.
    #[must_use]
    pub fn read_len(&self) -> usize {
        self.ops.iter().filter(|op| consumes_read(op.kind())).map(|op| op.len()).sum()
    }

    /// Total reference bases covered by the operations.
    #[must_use]
    pub fn reference_len(&self) -> usize {
        self.ops.iter().filter(|op| consumes_reference(op.kind())).map(|op| op.len()).sum()
    }

    /// Per-operation half-open reference spans, anchored at `anchor`.
    ///
    /// Non-reference-consuming operations yield `None` and do not advance
    /// the reference cursor.
    #[must_use]
    pub fn reference_spans(&self, anchor: usize) -> Vec<Option<Range<usize>>> {
        let mut ref_cursor = anchor;
        self.ops
            .iter()
            .map(|op| {
                if consumes_reference(op.kind()) {
                    let start = ref_cursor;
                    ref_cursor += op.len();
                    Some(start..ref_cursor)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Per-operation half-open read spans, starting at read position 0.
    ///
    /// Non-read-consuming operations yield `None` and do not advance the
    /// read cursor.
    #[must_use]
    pub fn read_spans(&self) -> Vec<Option<Range<usize>>> {
        let mut read_cursor = 0;
        self.ops
            .iter()
            .map(|op| {
                if consumes_read(op.kind()) {
                    let start = read_cursor;
                    read_cursor += op.len();
                    Some(start..read_cursor)
                } else {
                    None
                }
            })
            .collect()
    }
}

impl AsRef<[Op]> for Cigar {
    fn as_ref(&self) -> &[Op] {
        &self.ops
    }
}

impl FromIterator<Op> for Cigar {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        let mut cigar = Self::new();
        for op in iter {
            cigar.push(op);
        }
        cigar
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for Cigar {
    /// Formats as `<length><letter>` groups, or `*` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("*");
        }

        for op in &self.ops {
            write!(f, "{}{}", op.len(), kind_to_char(op.kind()))?;
        }

        Ok(())
    }
}

impl FromStr for Cigar {
    type Err = CigarClipError;

    /// Parses the textual form: a digit run followed by a kind letter, per
    /// operation. `""` and `"*"` parse as the empty CIGAR; zero-length
    /// groups are absorbed by [`Cigar::append`].
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "*" {
            return Ok(Self::new());
        }

        let mut cigar = Self::new();
        let mut pending_len: Option<usize> = None;

        for ch in s.chars() {
            if let Some(digit) = ch.to_digit(10) {
                let next = pending_len
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit as usize))
                    .ok_or_else(|| CigarClipError::InvalidCigar {
                        cigar: s.to_string(),
                        reason: "operation length out of range".to_string(),
                    })?;
                pending_len = Some(next);
            } else {
                let kind = kind_from_char(ch)?;
                let len = pending_len.take().ok_or_else(|| CigarClipError::InvalidCigar {
                    cigar: s.to_string(),
                    reason: format!("operation '{ch}' with no length"),
                })?;
                cigar.append(kind, len);
            }
        }

        if pending_len.is_some() {
            return Err(CigarClipError::InvalidCigar {
                cigar: s.to_string(),
                reason: "length with no operation".to_string(),
            });
        }

        Ok(cigar)
    }
}
