use std::collections::HashMap;

use bytes::Bytes;

use crate::descriptor::{BindTarget, ExtractSource};
use crate::errors::*;
use crate::slot::Slot;
use crate::types::SqlType;

/// An in-memory parameter block, addressable both positionally and by
/// name — the shape of a stored procedure's parameter set.
///
/// Anything bound can be read straight back out, which makes it the
/// fixture for exercising binders and extractors without a database.
/// A slot bound as SQL NULL reads back as `None`; a slot never bound at
/// all is an `UnknownSlot` error.
#[derive(Clone, Debug, Default)]
pub struct MemRecord {
    positional: HashMap<usize, Option<Bytes>>,
    named: HashMap<String, Option<Bytes>>,
}

impl MemRecord {
    pub fn new() -> MemRecord {
        MemRecord::default()
    }

    /// The number of bound slots, across both addressing forms.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    fn insert(&mut self, slot: Slot, bytes: Option<Bytes>) {
        match slot {
            Slot::Positional(index) => {
                self.positional.insert(index, bytes);
            }
            Slot::Named(name) => {
                self.named.insert(name.to_owned(), bytes);
            }
        }
    }
}

impl BindTarget for MemRecord {
    fn set_bytes(&mut self, slot: Slot, bytes: &[u8]) -> Result<()> {
        self.insert(slot, Some(Bytes::copy_from_slice(bytes)));
        Ok(())
    }

    fn set_null(&mut self, slot: Slot, _sql_type: SqlType) -> Result<()> {
        self.insert(slot, None);
        Ok(())
    }
}

impl ExtractSource for MemRecord {
    fn get_bytes(&self, slot: Slot) -> Result<Option<Bytes>> {
        let bytes = match slot {
            Slot::Positional(index) => self.positional.get(&index),
            Slot::Named(name) => self.named.get(name),
        };
        bytes
            .cloned()
            .ok_or_else(|| ErrorKind::UnknownSlot(slot.to_string()).into())
    }
}
