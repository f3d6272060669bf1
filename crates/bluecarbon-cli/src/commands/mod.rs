pub mod ask;
pub mod calculate;
pub mod industries;
