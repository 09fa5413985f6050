//! Record types exchanged with the table store

mod row;
mod timestamp;
mod user;
mod workout;

pub use row::Row;
pub use timestamp::WorkoutTimestamp;
pub use user::NewUser;
pub use workout::NewWorkout;
