use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An operator argument is none of the kinds the operator accepts.
    #[error("{operator} operator arg \"{argument}\" must be one of: {expected} (found {found})")]
    Validation {
        operator: &'static str,
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// An operation carries the wrong number of operands.
    #[error("{operator} operator takes {expected} operand(s) but {found} were given")]
    OperandCount {
        operator: &'static str,
        expected: usize,
        found: usize,
    },
    /// The keyword does not name a supported operator.
    #[error("unknown content stream operator \"{0}\"")]
    UnknownOperator(String),
    /// An Object has the wrong type, e.g. the Object is an Array where a Name would be expected.
    #[error("object has wrong type; expected type {expected} but found type {found}")]
    ObjectType {
        expected: &'static str,
        found: &'static str,
    },
    /// The text cannot be represented in the requested character encoding.
    #[error("invalid character encoding")]
    CharacterEncoding,
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}
