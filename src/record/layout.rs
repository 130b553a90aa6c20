//! Token layouts of profiling lines, chosen by token count.
//!
//! Read/write (11 tokens):
//! 10-12 14:03:05.123 1234 1234 D <SOOT_PROFILING>: com.app.Foo read counter = 7
//!
//! Function call (12 tokens, one extra word before the count):
//! 10-12 14:03:05.123 1234 1234 D <SOOT_PROFILING>: com.app.Foo.bar function call counter = 3

/// Index of the `H:M:S` time token.
pub const TIME_TOKEN: usize = 1;
/// Index of the entity name token.
pub const NAME_TOKEN: usize = 6;
/// Index of the operation kind token.
pub const OPERATION_TOKEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    ReadWrite,
    FunctionCall,
}

impl RecordLayout {
    /// Resolve the layout from the number of whitespace-separated tokens.
    pub fn from_token_count(count: usize) -> Option<Self> {
        match count {
            11 => Some(RecordLayout::ReadWrite),
            12 => Some(RecordLayout::FunctionCall),
            _ => None,
        }
    }

    pub fn count_token(self) -> usize {
        match self {
            RecordLayout::ReadWrite => 10,
            RecordLayout::FunctionCall => 11,
        }
    }
}
