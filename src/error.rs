use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("bit width {0} out of range")]
    BitWidthOutOfRange(u32),
    #[error("bit field at offset {offset} with width {width} does not fit in 32 bits")]
    BitFieldOutOfRange { offset: u32, width: u32 },
}

pub type ArithResult<T> = Result<T, ArithError>;
