#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum IntWidth {
    Int32,
    Int64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::Int32 => 32,
            IntWidth::Int64 => 64,
        }
    }
}

/// How an operation reads the bit patterns it is handed.
/// `Agnostic` operations give the same bits under either reading.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum IntSign {
    Signed,
    Unsigned,
    Agnostic,
}

/// Reinterpret a sign-carrying sample as a 32-bit pattern.
pub fn bits32(x: i32) -> u32 {
    x as u32
}

pub fn signed32(x: u32) -> i32 {
    x as i32
}

pub fn bits64(x: i64) -> u64 {
    x as u64
}

pub fn signed64(x: u64) -> i64 {
    x as i64
}
