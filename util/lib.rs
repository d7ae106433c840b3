pub mod cookies;
pub mod id;
