use std::fmt;

/// The SQL column types this crate has descriptors for. Both store a
/// variable-length byte sequence; they differ only in their declared
/// capacity and type code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SqlType {
    Varbinary,
    LongVarbinary,
}

impl SqlType {
    /// The JDBC type code, as drivers report it.
    pub fn code(&self) -> i32 {
        match *self {
            SqlType::Varbinary => -3,
            SqlType::LongVarbinary => -4,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SqlType::Varbinary => write!(f, "VARBINARY"),
            SqlType::LongVarbinary => write!(f, "LONGVARBINARY"),
        }
    }
}
