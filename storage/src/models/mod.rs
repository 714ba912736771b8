pub mod announcement;
pub mod chat;
pub mod event;
pub mod finance;
pub mod fixture;
pub mod invitation;
pub mod meeting;
pub mod notification;
pub mod team;
pub mod user;

pub use announcement::Announcement;
pub use chat::ChatMessage;
pub use event::Event;
pub use finance::{FinanceRequest, FinanceStatus};
pub use fixture::{Fixture, FixtureStatus};
pub use invitation::{Invitation, InvitationStatus};
pub use meeting::Meeting;
pub use notification::Notification;
pub use team::{PointsEntry, Team};
pub use user::{Domain, Role, User};
