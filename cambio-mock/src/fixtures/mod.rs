pub mod index;
pub mod rates;
