//! Wire contract for Taiwan listed-company monthly revenue disclosures.
//!
//! This crate declares the shapes exchanged with the revenue disclosure
//! service and nothing else: [`PageList`] describes a paged query,
//! [`Rs`] is the envelope every response arrives in, and [`RevenueData`]
//! is one disclosed company-month row. A caller conventionally sends a
//! `PageList`, receives an `Rs<Vec<RevenueData>>`, and finds the paging
//! context it asked for echoed back on every row. None of those
//! conventions are enforced by the types; validation and interpretation
//! belong to the importing client or UI layer.

mod envelope;
pub use self::envelope::Rs;

mod page;
pub use self::page::PageList;

mod revenue;
pub use self::revenue::RevenueData;
