use bytes::Bytes;
use tracing::trace;

use crate::errors::*;
use crate::logical::LogicalType;
use crate::options::WrapperOptions;
use crate::slot::Slot;
use crate::types::SqlType;

/// Descriptor for a single SQL column type.
pub trait SqlTypeDescriptor {
    fn sql_type(&self) -> SqlType;

    /// Whether a dialect may substitute a related type for this one when
    /// resolving the column (e.g. VARBINARY to BLOB). Consumed by dialect
    /// resolution outside this crate.
    fn can_be_remapped(&self) -> bool {
        true
    }
}

/// A parameter-binding target: anything that accepts byte parameters at a
/// positional or named slot. Prepared statements and stored-procedure
/// parameter blocks both fit.
pub trait BindTarget {
    /// Write `bytes` to the parameter at `slot`.
    fn set_bytes(&mut self, slot: Slot, bytes: &[u8]) -> Result<()>;

    /// Write SQL NULL to the parameter at `slot`.
    fn set_null(&mut self, slot: Slot, sql_type: SqlType) -> Result<()>;
}

/// A source of column values: a result row, or the output parameters of a
/// stored procedure. `None` is SQL NULL.
pub trait ExtractSource {
    fn get_bytes(&self, slot: Slot) -> Result<Option<Bytes>>;
}

/// Writes logical values into statement parameters for one SQL type.
///
/// Stateless beyond the conversion strategy it carries; a single instance
/// may be shared across threads (it is `Send + Sync` whenever the strategy
/// is). Failures from the target propagate unchanged, chained with the
/// slot for context — retrying belongs to the transaction layer, not here.
pub struct Binder<J> {
    logical: J,
    sql_type: SqlType,
}

impl<J: LogicalType> Binder<J> {
    pub(crate) fn new(logical: J, sql_type: SqlType) -> Binder<J> {
        Binder { logical, sql_type }
    }

    pub fn bind<T: BindTarget>(
        &self,
        target: &mut T,
        value: Option<&J::Value>,
        slot: Slot,
        options: &WrapperOptions,
    ) -> Result<()> {
        match self.logical.unwrap(value, options)? {
            Some(bytes) => {
                if options.trace_values {
                    trace!(
                        "binding parameter {} as {} - {:?}",
                        slot,
                        self.sql_type,
                        &bytes[..]
                    );
                } else {
                    trace!("binding parameter {} as {}", slot, self.sql_type);
                }
                target
                    .set_bytes(slot, &bytes)
                    .chain_err(|| ErrorKind::Binding(slot.to_string()))
            }
            None => {
                trace!("binding parameter {} as {} - null", slot, self.sql_type);
                target
                    .set_null(slot, self.sql_type)
                    .chain_err(|| ErrorKind::Binding(slot.to_string()))
            }
        }
    }
}

/// Reads logical values back out of a row or parameter block for one SQL
/// type. Stateless and shareable, like `Binder`.
pub struct Extractor<J> {
    logical: J,
    sql_type: SqlType,
}

impl<J: LogicalType> Extractor<J> {
    pub(crate) fn new(logical: J, sql_type: SqlType) -> Extractor<J> {
        Extractor { logical, sql_type }
    }

    pub fn extract<S: ExtractSource>(
        &self,
        source: &S,
        slot: Slot,
        options: &WrapperOptions,
    ) -> Result<Option<J::Value>> {
        let bytes = source
            .get_bytes(slot)
            .chain_err(|| ErrorKind::Extraction(slot.to_string()))?;
        match bytes {
            Some(ref bytes) if options.trace_values => {
                trace!(
                    "extracted value {} as {} - {:?}",
                    slot,
                    self.sql_type,
                    &bytes[..]
                );
            }
            Some(_) => trace!("extracted value {} as {}", slot, self.sql_type),
            None => trace!("extracted value {} as {} - null", slot, self.sql_type),
        }
        self.logical.wrap(bytes, options)
    }
}
