pub mod catalog;
pub mod debounce;
pub mod filter;
pub mod product;
pub mod search;
pub mod store;
pub mod view;
