//! Subscription operation handlers.

mod cancel_subscription;
mod resume_subscription;

pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use resume_subscription::{
    ResumeSubscriptionCommand, ResumeSubscriptionHandler, ResumeSubscriptionResult,
};
