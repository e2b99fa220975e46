//! RollResult - The outcome of one dice roll
//!
//! RollResult is a Value Object (no identity).
//! Two results showing the same face are the same result.
//!
//! IMPORTANT: A RollResult outside [1, 6] cannot be constructed.
//! Every code path that holds one can rely on the range.

/// Errors raised when building a RollResult from untrusted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    /// Value is not a face of a six-sided die
    OutOfRange { value: u8 },
}

impl core::fmt::Display for RollError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RollError::OutOfRange { value } => {
                write!(
                    f,
                    "Roll value {} is out of range ({}..={})",
                    value,
                    RollResult::MIN,
                    RollResult::MAX
                )
            }
        }
    }
}

impl std::error::Error for RollError {}

/// The face shown by a six-sided die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollResult(u8);

impl RollResult {
    /// Lowest face
    pub const MIN: u8 = 1;
    /// Highest face
    pub const MAX: u8 = 6;
    /// Number of faces
    pub const FACES: usize = 6;

    /// Create a RollResult, rejecting anything outside [1, 6]
    pub fn new(value: u8) -> Result<Self, RollError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RollError::OutOfRange { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// All six faces, lowest first
    pub fn all() -> impl Iterator<Item = RollResult> {
        (Self::MIN..=Self::MAX).map(RollResult)
    }
}

impl Default for RollResult {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for RollResult {
    type Error = RollError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RollResult> for u8 {
    fn from(result: RollResult) -> Self {
        result.0
    }
}

impl core::fmt::Display for RollResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
