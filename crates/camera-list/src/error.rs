use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{count} camera slots requested, but names are only padded to two digits (at most {max} slots)")]
    PaddingOverflow { count: u32, max: u32 },
}
