//! Generation module - tokens, the country pool and rows.

mod countries;
mod entropy;
mod row;
mod token;

pub use countries::*;
pub use entropy::*;
pub use row::*;
pub use token::*;
