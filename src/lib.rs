pub mod contact;
pub mod contact_table;
pub mod error;
pub mod hash;
mod internal;

pub use contact::Contact;
pub use contact_table::{ContactTable, DEFAULT_CAPACITY};
pub use error::{Result, TableError};
pub use hash::{CharSumHash, Fnv1Hash, Hash};
