pub mod aggregate;
pub mod filter;
pub mod lead;
pub mod logic;
pub mod parse;
pub mod stage;
