#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub limit: u64,
}

impl Limit {
    pub const fn new(limit: u64) -> Limit {
        Limit { limit }
    }
}
