pub mod columns;
pub mod companies;
pub mod contacts;
pub mod users;
