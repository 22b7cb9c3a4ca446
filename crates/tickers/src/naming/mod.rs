//! Company name normalization and search query generation.
//!
//! Used by the screening and news-gathering stages to turn raw listing names
//! such as "China Resources Beer (Holdings) Company Limited" into tight
//! search queries.

mod company_name;
mod search_query;

pub use company_name::normalize_company_name;
pub use search_query::generate_strict_search_query;
