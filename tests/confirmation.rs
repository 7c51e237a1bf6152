#[cfg(test)]
mod tests {
    use taskboard::libs::messages::Message;
    use taskboard::libs::modal::{ConfirmAction, Modal, ModalKind, Prompt};
    use taskboard::libs::task::Id;

    fn delete_prompt(id: i64) -> Prompt {
        Prompt::confirm(Message::ConfirmDeleteTask(format!("Task {}", id)), ConfirmAction::DeleteTask(Id::from(id)))
    }

    #[test]
    fn test_starts_hidden() {
        let modal = Modal::new();
        assert!(!modal.is_visible());
        assert!(modal.prompt().is_none());
    }

    #[test]
    fn test_confirm_prompt_defaults() {
        let prompt = delete_prompt(1);
        assert_eq!(prompt.kind, ModalKind::Info);
        assert_eq!(prompt.confirm_label, "Accept");
        assert!(prompt.show_cancel);
    }

    #[test]
    fn test_notice_prompt_defaults() {
        let prompt = Prompt::notice(ModalKind::Success, Message::TaskDeleted);
        assert_eq!(prompt.action, ConfirmAction::Dismiss);
        assert_eq!(prompt.confirm_label, "OK");
        assert!(!prompt.show_cancel);
    }

    #[test]
    fn test_close_never_runs_action() {
        let mut modal = Modal::new();
        modal.open(delete_prompt(3));
        modal.close();
        assert!(!modal.is_visible());
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_confirm_hides_and_returns_action() {
        let mut modal = Modal::new();
        modal.open(delete_prompt(3));
        assert_eq!(modal.confirm(), Some(ConfirmAction::DeleteTask(Id::from(3))));
        assert!(!modal.is_visible());
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_open_replaces_visible_prompt() {
        let mut modal = Modal::new();
        assert!(modal.open(delete_prompt(1)).is_none());

        let replaced = modal.open(delete_prompt(2)).expect("first prompt was visible");
        assert_eq!(replaced.action, ConfirmAction::DeleteTask(Id::from(1)));
        assert_eq!(modal.confirm(), Some(ConfirmAction::DeleteTask(Id::from(2))));
    }

    #[test]
    fn test_with_label() {
        let prompt = delete_prompt(1).with_label(Message::LabelDelete.to_string());
        assert_eq!(prompt.confirm_label, Message::LabelDelete.to_string());
        assert_eq!(prompt.kind, ModalKind::Info);
    }
}
