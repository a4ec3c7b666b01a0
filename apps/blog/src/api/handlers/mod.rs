pub mod blog;
pub mod pages;
