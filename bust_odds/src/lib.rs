pub mod calculation;
mod card;
mod cardcount;
pub mod valuation;

pub use calculation::{get_busting_probability, BustQuery, BustReport, QueryError};
pub use card::{Card, InvalidCard};
pub use cardcount::CardCount;
