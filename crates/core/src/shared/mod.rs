pub mod constants;
pub mod text;
