//! User-facing notification fan-out. Mutation services report every
//! outcome here; delivery failures are logged and never block the caller.

use tokio::sync::broadcast;

use crate::errors::ApiError;
use crate::validation::FieldIssue;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Field-level detail, populated for validation failures.
    pub issues: Vec<FieldIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    Create,
    Update,
    Delete,
}

impl CrudAction {
    fn verb(self) -> &'static str {
        match self {
            CrudAction::Create => "create",
            CrudAction::Update => "update",
            CrudAction::Delete => "delete",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            CrudAction::Create => "created",
            CrudAction::Update => "updated",
            CrudAction::Delete => "deleted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(Notification {
            kind: NotificationKind::Success,
            message: message.into(),
            issues: Vec::new(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Notification {
            kind: NotificationKind::Error,
            message: message.into(),
            issues: Vec::new(),
        });
    }

    /// "Live trade created successfully", or a caller-supplied message.
    pub fn mutation_success(&self, action: CrudAction, domain: &str, message: Option<String>) {
        let message = message
            .unwrap_or_else(|| format!("{} {} successfully", capitalize(domain), action.past_tense()));
        self.success(message);
    }

    /// Flat summary plus field-level issues when the failure is a
    /// validation error.
    pub fn mutation_error(&self, action: CrudAction, domain: &str, err: &ApiError) {
        let message = format!("Failed to {} {}: {}", action.verb(), domain, err.user_message());
        let issues = match err {
            ApiError::Validation(issues) => issues.clone(),
            _ => Vec::new(),
        };
        self.send(Notification {
            kind: NotificationKind::Error,
            message,
            issues,
        });
    }

    fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification dropped — no subscribers");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mutation_success_message() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.mutation_success(CrudAction::Create, "live trade", None);
        let n = rx.recv().await.unwrap();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Live trade created successfully");
    }

    #[tokio::test]
    async fn test_validation_error_carries_issues() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        let err = ApiError::Validation(vec![FieldIssue::new("scalePlans", "one entry plan is required")]);
        notifier.mutation_error(CrudAction::Create, "trade", &err);

        let n = rx.recv().await.unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(n.message.starts_with("Failed to create trade:"));
        assert_eq!(n.issues.len(), 1);
        assert_eq!(n.issues[0].path, "scalePlans");
    }

    #[test]
    fn test_send_without_subscribers_does_not_panic() {
        let notifier = Notifier::new();
        notifier.success("nobody listening");
    }
}
