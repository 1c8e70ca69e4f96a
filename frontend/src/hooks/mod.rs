pub mod use_shell;
pub mod use_submission;
