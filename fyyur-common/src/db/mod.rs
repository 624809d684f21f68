//! Entity store: SQLite-backed venues, artists and shows

pub mod artists;
pub mod init;
pub mod models;
pub mod seed;
pub mod shows;
pub mod venues;

pub use artists::*;
pub use init::*;
pub use models::*;
pub use seed::*;
pub use shows::*;
pub use venues::*;
