pub mod books;
pub mod sqlite;

pub use books::{BookStore, SqliteBookStore};
pub use sqlite::create_pool;
