/// Summary of one decoded DNS reply, scoped to a single round trip.
#[derive(Debug, Clone)]
pub struct Answer {
    /// Number of records in the answer section.
    pub answer_count: usize,
    /// Zone-format rendering of the first answer record, if any.
    pub first_answer: Option<String>,
    /// Response code name (NOERROR, NXDOMAIN, ...).
    pub rcode: &'static str,
}

impl Answer {
    /// A reply that parsed fine but answered nothing. Reported as a
    /// success, distinct from any transport failure.
    pub fn is_empty(&self) -> bool {
        self.answer_count == 0
    }
}
