pub mod catalog;
pub mod me;
pub mod profiles;
pub mod titles;
pub mod webhooks;
