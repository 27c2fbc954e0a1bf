use thiserror::Error;

/// Canonical result for every pull and terminal operator.
pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A count or index argument outside its legal range. Raised at first pull
    /// for deferred generators, at the call for terminal operators.
    #[error("argument '{param}' is out of range: {value}")]
    OutOfRange { param: &'static str, value: i64 },

    #[error("sequence contains no elements")]
    Empty,

    #[error("sequence contains no matching element")]
    NoMatch,

    #[error("sequence contains more than one element")]
    MoreThanOne,

    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,

    /// Checked accumulation left the representable range of the named type.
    #[error("arithmetic operation resulted in an overflow ({0})")]
    Overflow(&'static str),

    /// `index` is the zero-based source position of the element whose key collided.
    #[error("an element with the same key has already been added (source index {index})")]
    DuplicateKey { index: usize },

    #[error("unable to cast element to type {0}")]
    InvalidCast(&'static str),

    #[error("buffer cap of {cap} elements exceeded in operator '{op}'")]
    BufferCapExceeded { op: &'static str, cap: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SeqError {
    /// True for the "nothing qualified" class that the `*_or_default` and
    /// `*_or_none` variants convert into a value.
    pub fn is_empty_condition(&self) -> bool {
        matches!(self, SeqError::Empty | SeqError::NoMatch)
    }

    /// True when more than one element qualified for a single-value extraction.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, SeqError::MoreThanOne | SeqError::MoreThanOneMatch)
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, SeqError::Overflow(_))
    }
}

impl From<serde_json::Error> for SeqError {
    fn from(e: serde_json::Error) -> Self {
        SeqError::Config(e.to_string())
    }
}
