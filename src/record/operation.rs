//! Operation kind carried in token 7 of a profiling line.
//!
//! Example: `com.app.Foo read counter = 7`  =>  Operation::Read

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Write,
    Function,
    /// Anything else. Kept so the accumulator can report and skip it.
    Unknown(String),
}

impl Operation {
    pub fn from_token(token: &str) -> Self {
        match token {
            "read" => Operation::Read,
            "write" => Operation::Write,
            "function" => Operation::Function,
            other => Operation::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Operation::Read => "read",
            Operation::Write => "write",
            Operation::Function => "function",
            Operation::Unknown(s) => s,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
