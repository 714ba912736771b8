pub mod announcements;
pub mod chat;
pub mod events;
pub mod finance;
pub mod invitations;
pub mod meetings;
pub mod notifications;
pub mod sports;
pub mod users;
