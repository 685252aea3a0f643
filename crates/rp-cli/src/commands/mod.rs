pub mod check;
pub mod dispatch;
pub mod schema;
pub mod templates;
pub mod validate;
