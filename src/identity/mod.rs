//! Identity core: token issuance and verification, the per-request
//! authorization context, and the role/ownership gates. Keep the public
//! surface thin and split implementation across sub-modules.

mod claims;
mod gates;
mod token;

pub use claims::{Claims, RequestContext};
pub use gates::{report_role, require_owner, require_role};
pub use token::TokenIssuer;
