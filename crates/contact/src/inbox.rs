use crate::ContactSubmission;

/// Destination of accepted submissions.
#[async_trait::async_trait]
pub trait Inbox: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Acknowledges submissions without storing or forwarding them.
#[derive(Default, Clone, Copy, Debug)]
pub struct DiscardInbox;

#[async_trait::async_trait]
impl Inbox for DiscardInbox {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        tracing::info!(
            service = submission.practice_area().map(|area| area.label()),
            has_phone = submission.phone.as_deref().is_some_and(|p| !p.is_empty()),
            "Contact submission received"
        );

        Ok(())
    }
}
