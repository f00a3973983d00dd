/// A single DNS question to put on the wire.
///
/// Each worker builds one of these at startup and reuses it for every job
/// it processes, so a run produces at most `workers` distinct subjects.
/// The message is exclusively owned by its worker and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    /// 16-bit transaction id correlating the query with its reply.
    pub id: u16,
    /// Fully-qualified subject name, trailing dot included.
    pub name: String,
    pub recursion_desired: bool,
}

impl QueryMessage {
    /// A recursion-desired query, the only shape this tool sends.
    pub fn recursive(id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            recursion_desired: true,
        }
    }
}
