#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Cut position {cut} is past the end of a sequence of length {len}.")]
    CutOutOfRange { cut: usize, len: usize },

    #[error("Element {index} cannot be represented in the target type.")]
    Conversion { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
