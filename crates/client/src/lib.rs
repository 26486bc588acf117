//! Employee profile client - Dioxus form application
//!
//! This crate contains the profile form controller, its submission and
//! notification collaborators, and the web/desktop UI that drives them.

pub mod logging;

pub mod config;
pub mod controller;
pub mod notify;
pub mod picture_source;
pub mod submission;

pub mod components;

pub use config::FormConfig;
pub use controller::{
    FinishOnDrop, PendingSubmission, PreviewTicket, ProfileFormController, SubmitOutcome, SubmitPhase,
    SubmitRejection,
};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use picture_source::{InMemoryPicture, PictureSource, SelectedPicture};
pub use submission::{ProfileSubmitter, SimulatedSubmitter};
