use crate::descriptor::{Binder, Extractor, SqlTypeDescriptor};
use crate::logical::LogicalType;
use crate::types::SqlType;

/// Descriptor for VARBINARY handling.
///
/// Stateless; use the shared [`VARBINARY`] instance rather than
/// constructing one per call site.
#[derive(Copy, Clone, Debug, Default)]
pub struct VarbinaryDescriptor;

/// The shared VARBINARY descriptor.
pub const VARBINARY: VarbinaryDescriptor = VarbinaryDescriptor;

impl SqlTypeDescriptor for VarbinaryDescriptor {
    fn sql_type(&self) -> SqlType {
        SqlType::Varbinary
    }
}

impl VarbinaryDescriptor {
    /// Build a binder writing values of `logical`'s type into VARBINARY
    /// parameters.
    pub fn binder<J: LogicalType>(&self, logical: J) -> Binder<J> {
        Binder::new(logical, self.sql_type())
    }

    /// Build an extractor reading values of `logical`'s type back out of
    /// VARBINARY columns.
    pub fn extractor<J: LogicalType>(&self, logical: J) -> Extractor<J> {
        Extractor::new(logical, self.sql_type())
    }
}

/// Descriptor for LONGVARBINARY handling. Behaviourally identical to
/// [`VarbinaryDescriptor`]; only the type code differs.
#[derive(Copy, Clone, Debug, Default)]
pub struct LongVarbinaryDescriptor;

/// The shared LONGVARBINARY descriptor.
pub const LONG_VARBINARY: LongVarbinaryDescriptor = LongVarbinaryDescriptor;

impl SqlTypeDescriptor for LongVarbinaryDescriptor {
    fn sql_type(&self) -> SqlType {
        SqlType::LongVarbinary
    }
}

impl LongVarbinaryDescriptor {
    pub fn binder<J: LogicalType>(&self, logical: J) -> Binder<J> {
        Binder::new(logical, self.sql_type())
    }

    pub fn extractor<J: LogicalType>(&self, logical: J) -> Extractor<J> {
        Extractor::new(logical, self.sql_type())
    }
}
