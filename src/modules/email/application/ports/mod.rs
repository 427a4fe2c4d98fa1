pub mod outgoing;

pub use outgoing::{EmailSender, PasswordResetNotifier};
