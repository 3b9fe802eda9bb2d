pub mod arrangements;
pub mod dp_cache;
pub mod grid;
