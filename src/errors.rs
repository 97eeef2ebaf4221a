// ============================================================
// Error codes — every failed precondition reverts with one of these
// ============================================================

/// Ownership, permission or role check failed
pub const ERR_ACCESS_DENIED: &str = "ERR_ACCESS_DENIED";

/// Operation not valid from the record's current status
pub const ERR_INVALID_STATE: &str = "ERR_INVALID_STATE";

/// Deadline is not strictly in the future
pub const ERR_INVALID_DEADLINE: &str = "ERR_INVALID_DEADLINE";

/// Requested amount exceeds what the pool or bounty can cover
pub const ERR_INSUFFICIENT_FUNDS: &str = "ERR_INSUFFICIENT_FUNDS";

/// Unknown bounty, bid or member
pub const ERR_NOT_FOUND: &str = "ERR_NOT_FOUND";
