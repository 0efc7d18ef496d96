//! sea-orm entities for the Beachwatch API database.

pub mod beach_posts;
pub mod beaches;
pub mod inform2_submissions;
pub mod inform4_submissions;
pub mod users;
