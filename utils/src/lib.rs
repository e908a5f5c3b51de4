pub mod collections;
pub mod numeric;
pub mod text;
