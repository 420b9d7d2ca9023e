use crate::error::{Result, WindowError};
use crate::window::WindowSpec;

/// Sliding windows centred every `step_size` columns.
///
/// Each window spans `floor(w / 2)` columns left of its centre and
/// `ceil(w / 2)` columns from the centre onwards, so an even window size
/// covers `[c - w/2, c + w/2)`. Windows are truncated at both alignment ends.
#[derive(Debug, Clone)]
pub struct RegularWindows {
    left: usize,
    right: usize,
    step_size: usize,
    alignment_length: usize,
    next_center: usize,
    next_index: usize,
}

impl RegularWindows {
    /// Create a generator over an alignment of `alignment_length` columns.
    pub fn new(window_size: usize, step_size: usize, alignment_length: usize) -> Result<Self> {
        validate_parameters(window_size, step_size)?;
        Ok(Self {
            left: window_size / 2,
            right: window_size.div_ceil(2),
            step_size,
            alignment_length,
            next_center: 0,
            next_index: 0,
        })
    }

    /// Columns included left of the centre.
    pub fn left_flank(&self) -> usize {
        self.left
    }

    /// Columns included from the centre onwards (centre inclusive).
    pub fn right_flank(&self) -> usize {
        self.right
    }

    fn remaining(&self) -> usize {
        if self.next_center >= self.alignment_length {
            0
        } else {
            (self.alignment_length - self.next_center).div_ceil(self.step_size)
        }
    }
}

/// Reject window or step sizes below one.
pub(crate) fn validate_parameters(window_size: usize, step_size: usize) -> Result<()> {
    if window_size < 1 {
        return Err(WindowError::InvalidWindowParameter {
            parameter: "window size",
            value: window_size,
        });
    }
    if step_size < 1 {
        return Err(WindowError::InvalidWindowParameter {
            parameter: "step size",
            value: step_size,
        });
    }
    Ok(())
}

impl Iterator for RegularWindows {
    type Item = WindowSpec;

    fn next(&mut self) -> Option<WindowSpec> {
        let center = self.next_center;
        if center >= self.alignment_length {
            return None;
        }

        let start = center.saturating_sub(self.left);
        let end = center.saturating_add(self.right).min(self.alignment_length);
        let window = WindowSpec::new(self.next_index, start, end, center, None);

        self.next_index += 1;
        self.next_center = center
            .checked_add(self.step_size)
            .unwrap_or(self.alignment_length);
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegularWindows {}
