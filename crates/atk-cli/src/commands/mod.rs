pub mod auth;
pub mod create;
pub mod dispatch;
pub mod init;
pub mod list;
pub mod package;
pub mod rehash;
pub mod schema;
pub mod shared;
pub mod suggest;
pub mod sync;
pub mod types;
pub mod validate;
