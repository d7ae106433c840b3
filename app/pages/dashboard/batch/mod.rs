mod download;
mod get;
mod page;
mod post;

pub use self::{download::download, get::get, post::post};
