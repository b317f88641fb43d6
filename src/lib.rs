//! Binding (and extracting) SQL VARBINARY values in Rust.
//!
//! The type-descriptor slice of an ORM's type-mapping layer: a stateless
//! adapter that writes application values into binary statement parameters
//! and reads them back out of result rows, with the value-to-bytes
//! conversion delegated to a pluggable [`LogicalType`] strategy.
//!
//! ```
//! use varbind::{BytesType, Slot, MemRecord, WrapperOptions, VARBINARY};
//!
//! # fn main() -> varbind::Result<()> {
//! let options = WrapperOptions::default();
//! let binder = VARBINARY.binder(BytesType);
//! let extractor = VARBINARY.extractor(BytesType);
//!
//! let mut record = MemRecord::new();
//! binder.bind(&mut record, Some(&vec![0x01, 0x02, 0x03]), Slot::Positional(1), &options)?;
//! assert_eq!(
//!     extractor.extract(&record, Slot::Positional(1), &options)?,
//!     Some(vec![0x01, 0x02, 0x03]),
//! );
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate error_chain;

mod descriptor;
mod errors;
mod logical;
mod mem;
mod options;
mod slot;
mod types;
mod varbinary;

pub use crate::descriptor::{BindTarget, Binder, ExtractSource, Extractor, SqlTypeDescriptor};
pub use crate::errors::{Error, ErrorKind, Result, ResultExt};
pub use crate::logical::{BytesType, LogicalType, TextType};
pub use crate::mem::MemRecord;
pub use crate::options::WrapperOptions;
pub use crate::slot::Slot;
pub use crate::types::SqlType;
pub use crate::varbinary::{
    LongVarbinaryDescriptor, VarbinaryDescriptor, LONG_VARBINARY, VARBINARY,
};
