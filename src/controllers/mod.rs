pub mod countdown;
pub mod dataset;
pub mod identity;
pub mod interview_room;
pub mod job_board;
pub mod messaging;
pub mod timers;

pub use interview_room::InterviewRoom;
pub use job_board::JobBoard;
pub use messaging::Messaging;
