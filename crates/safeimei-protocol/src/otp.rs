//! Six-cell one-time-code input
//!
//! Focus movement is a typing convenience; the code itself is never checked
//! on this side.

/// Number of cells in the code
pub const OTP_LENGTH: usize = 6;

/// A key press inside one of the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKey {
    /// A character typed into the cell
    Digit(char),
    /// Backspace
    Backspace,
    /// Anything else
    Other,
}

/// The six single-character cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpCode {
    cells: [Option<char>; OTP_LENGTH],
}

impl OtpCode {
    /// All cells empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `key` to the cell at `index` and return the cell to focus next
    ///
    /// A digit fills the cell and moves forward; backspace clears the cell
    /// and moves back. Out-of-range indices are ignored.
    pub fn handle_key(&mut self, index: usize, key: OtpKey) -> Option<usize> {
        let cell = self.cells.get_mut(index)?;
        match key {
            OtpKey::Digit(c) if c.is_ascii_digit() => {
                *cell = Some(c);
                (index + 1 < OTP_LENGTH).then_some(index + 1)
            }
            OtpKey::Backspace => {
                *cell = None;
                index.checked_sub(1)
            }
            OtpKey::Digit(_) | OtpKey::Other => None,
        }
    }

    /// Character in cell `index`, if filled
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Filled cells concatenated in order
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }
}
