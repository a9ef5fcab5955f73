pub mod question;
pub mod quiz;
pub mod room_code;
pub use question::Question;
pub use quiz::{Quiz, QuizSummary};
pub use room_code::RoomCode;
