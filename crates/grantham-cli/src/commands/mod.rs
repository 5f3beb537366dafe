pub mod codes;
pub mod env;
pub mod matrix;
pub mod score;
