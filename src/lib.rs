pub mod countries;
pub mod export;
pub mod fetch;
pub mod parse;
