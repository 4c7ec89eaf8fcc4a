use counsel_contact::{ContactSubmission, DiscardInbox, Inbox};

mod helpers;

#[tokio::test]
async fn test_discard_inbox_accepts_everything() -> anyhow::Result<()> {
    let submission = ContactSubmission::parse(&helpers::valid_input()).expect("valid input");

    DiscardInbox.deliver(&submission).await?;
    DiscardInbox.deliver(&submission).await?;

    Ok(())
}
