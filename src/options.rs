/// Options threaded through every bind and extract call.
#[derive(Copy, Clone, Debug, Default)]
pub struct WrapperOptions {
    /// Include the raw bytes in the per-parameter trace events. Off by
    /// default: binary parameters can be large, and occasionally sensitive.
    pub trace_values: bool,
}
