#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorCode, Result};
    use crate::models::{percentage, pluralize_votes, AuthMode, ContentKind, Poll};
    use crate::share::{note_url, poll_url, qr_image_url, results_url, QrOptions};
    use crate::storage::{KeyValueStore, MemoryStore, Repository, FREE_USAGE_KEY, SESSION_KEY, VOTED_POLLS_KEY};
    use crate::validation::*;
    use std::cell::Cell;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }

    fn logged_in_repo() -> Repository<MemoryStore> {
        let repo = repo();
        repo.log_in().unwrap();
        repo
    }

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> { self.0.get(key) }
        fn set(&self, _: &str, _: &str) -> Result<()> {
            Err(Error::new(ErrorCode::StorageUnavailable, "QuotaExceededError"))
        }
        fn remove(&self, key: &str) -> Result<()> { self.0.remove(key) }
    }

    /// Rejects writes to keys starting with the armed prefix.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_prefix: Cell<Option<&'static str>>,
    }

    impl FlakyStore {
        fn fail_on(&self, prefix: &'static str) {
            self.fail_prefix.set(Some(prefix));
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> { self.inner.get(key) }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            match self.fail_prefix.get() {
                Some(prefix) if key.starts_with(prefix) => {
                    Err(Error::new(ErrorCode::StorageUnavailable, "QuotaExceededError"))
                }
                _ => self.inner.set(key, value),
            }
        }
        fn remove(&self, key: &str) -> Result<()> { self.inner.remove(key) }
    }

    #[test]
    fn test_note_validation() {
        assert_eq!(validate_note(""), Err(ValidationError::EmptyNote));
        assert_eq!(validate_note("  \n\t"), Err(ValidationError::EmptyNote));
        assert_eq!(validate_note(&"x".repeat(MAX_NOTE_LENGTH + 1)), Err(ValidationError::NoteTooLong));
        assert!(validate_note(&"é".repeat(MAX_NOTE_LENGTH)).is_ok());
    }

    #[test]
    fn test_poll_validation() {
        assert_eq!(validate_poll(" ", &options(&["A", "B"])), Err(ValidationError::EmptyQuestion));
        assert_eq!(validate_poll("Q?", &options(&["A"])), Err(ValidationError::TooFewOptions));
        assert_eq!(validate_poll("Q?", &options(&["A", " "])), Err(ValidationError::EmptyOption));
        assert_eq!(
            validate_poll("Q?", &options(&["Yes", "No", " yes"])),
            Err(ValidationError::DuplicateOption("yes".into()))
        );

        let many: Vec<String> = (0..=MAX_OPTIONS).map(|i| format!("Option {i}")).collect();
        assert_eq!(validate_poll("Q?", &many), Err(ValidationError::TooManyOptions));
        assert!(validate_poll("Lunch?", &options(&["Pizza", "Sushi"])).is_ok());
    }

    #[test]
    fn test_credentials_validation() {
        assert_eq!(validate_credentials("", "secret"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("me@example.com", ""), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("example.com", "secret"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_credentials("a@b@c", "secret"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_credentials("@example.com", "secret"), Err(ValidationError::InvalidEmail));
        assert!(validate_credentials(" me@example.com ", "secret").is_ok());
    }

    #[test]
    fn test_id_format() {
        assert!(is_valid_id("a1b2c3d4"));
        assert!(!is_valid_id("A1B2C3D4"));
        assert!(!is_valid_id("a1b2c3"));
        assert!(!is_valid_id("a1b2c3d4e"));
        assert!(!is_valid_id("a1b2-3d4"));
    }

    #[test]
    fn test_percentages_round_like_the_browser() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize_votes(0), "0 votes");
        assert_eq!(pluralize_votes(1), "1 vote");
        assert_eq!(pluralize_votes(12), "12 votes");
    }

    #[test]
    fn test_tally_and_leaders() {
        let mut poll = Poll::new(" Best colour? ", &options(&[" Red", "Green ", "Blue"]));
        assert_eq!(poll.question, "Best colour?");
        assert_eq!(poll.options, options(&["Red", "Green", "Blue"]));
        assert!(poll.tally().leaders().is_empty());

        poll.record_vote(0).unwrap();
        poll.record_vote(2).unwrap();
        poll.record_vote(2).unwrap();
        let tally = poll.tally();
        assert_eq!(tally.total_votes, 3);
        assert_eq!(tally.options[2].percentage, 67);
        assert_eq!(tally.options[1].percentage, 0);
        assert_eq!(tally.leaders(), vec![2]);

        poll.record_vote(0).unwrap();
        assert_eq!(poll.tally().leaders(), vec![0, 2]);

        let err = poll.record_vote(3).unwrap_err();
        assert!(err.is(ErrorCode::InvalidInput));
    }

    #[test]
    fn test_reads_records_written_by_the_web_app() {
        let raw = r#"{"question":"Q","options":["a","b"],"votes":[1,2],"created":"2024-05-01T10:00:00.000Z"}"#;
        let repo = repo();
        repo.store().set("poll_abcd1234", raw).unwrap();

        let poll = repo.load_poll("abcd1234").unwrap();
        assert_eq!(poll.votes, vec![1, 2]);
        assert_eq!(poll.created.year(), 2024);

        let encoded: serde_json::Value = serde_json::from_str(&serde_json::to_string(&poll).unwrap()).unwrap();
        assert!(encoded.get("created").and_then(|v| v.as_str()).is_some());
        assert_eq!(encoded["options"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_note_round_trip_through_storage() {
        let repo = repo();
        let note = repo.create_note("  hello\nworld  ").unwrap();
        assert!(is_valid_id(&note.id));
        assert_eq!(
            repo.store().get(&format!("note_{}", note.id)).unwrap().as_deref(),
            Some("  hello\nworld  ")
        );
        assert_eq!(repo.load_note(&note.id).unwrap(), note);
    }

    #[test]
    fn test_missing_records() {
        let repo = repo();
        let err = repo.load_note("zzzzzzzz").unwrap_err();
        assert!(err.is(ErrorCode::NotFound));
        assert_eq!(err.message, "Note not found");

        let err = repo.load_poll("zzzzzzzz").unwrap_err();
        assert!(err.is(ErrorCode::NotFound));
        assert_eq!(err.message, "Poll not found");
    }

    #[test]
    fn test_free_tier_note_limit() {
        let repo = repo();
        for remaining in (1..=MAX_FREE_NOTES).rev() {
            assert_eq!(repo.remaining_free(ContentKind::Note).unwrap(), Some(remaining));
            repo.create_note("note").unwrap();
        }
        assert_eq!(repo.remaining_free(ContentKind::Note).unwrap(), Some(0));
        let err = repo.create_note("one too many").unwrap_err();
        assert!(err.is(ErrorCode::LimitReached));

        // Polls have their own allowance.
        assert!(repo.create_poll("Q?", &options(&["A", "B"])).is_ok());
        assert!(repo.create_poll("Q2?", &options(&["A", "B"])).unwrap_err().is(ErrorCode::LimitReached));
    }

    #[test]
    fn test_invalid_input_does_not_consume_quota() {
        let repo = repo();
        assert!(repo.create_poll("", &options(&["A", "B"])).unwrap_err().is(ErrorCode::InvalidInput));
        assert!(repo.create_note(" ").unwrap_err().is(ErrorCode::InvalidInput));
        assert_eq!(repo.free_usage().unwrap().polls, 0);
        assert_eq!(repo.free_usage().unwrap().notes, 0);
        assert!(repo.store().get(FREE_USAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_logged_in_users_are_unlimited() {
        let repo = logged_in_repo();
        assert_eq!(repo.remaining_free(ContentKind::Poll).unwrap(), None);
        for i in 0..5 {
            repo.create_poll(&format!("Question {i}"), &options(&["A", "B"])).unwrap();
            repo.create_note("note").unwrap();
        }
        assert!(repo.store().get(FREE_USAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_session_flag() {
        let repo = repo();
        assert!(!repo.is_logged_in().unwrap());
        repo.log_in().unwrap();
        assert_eq!(repo.store().get(SESSION_KEY).unwrap().as_deref(), Some("true"));
        assert!(repo.is_logged_in().unwrap());
        repo.log_out().unwrap();
        assert!(!repo.is_logged_in().unwrap());

        repo.store().set(SESSION_KEY, "false").unwrap();
        assert!(!repo.is_logged_in().unwrap());
    }

    #[test]
    fn test_voting() {
        let repo = logged_in_repo();
        let (id, poll) = repo.create_poll("Tabs or spaces?", &options(&["Tabs", "Spaces"])).unwrap();
        assert_eq!(poll.votes, vec![0, 0]);
        assert!(!repo.has_voted(&id).unwrap());

        let updated = repo.cast_vote(&id, 1).unwrap();
        assert_eq!(updated.votes, vec![0, 1]);
        assert_eq!(repo.load_poll(&id).unwrap().votes, vec![0, 1]);
        assert!(repo.has_voted(&id).unwrap());
        assert_eq!(repo.voted_polls().unwrap(), vec![id.clone()]);

        let err = repo.cast_vote(&id, 0).unwrap_err();
        assert!(err.is(ErrorCode::Conflict));
        assert_eq!(repo.load_poll(&id).unwrap().votes, vec![0, 1]);
    }

    #[test]
    fn test_invalid_vote_leaves_poll_untouched() {
        let repo = logged_in_repo();
        let (id, _) = repo.create_poll("Q?", &options(&["A", "B"])).unwrap();

        assert!(repo.cast_vote(&id, 2).unwrap_err().is(ErrorCode::InvalidInput));
        assert_eq!(repo.load_poll(&id).unwrap().votes, vec![0, 0]);
        assert!(!repo.has_voted(&id).unwrap());

        assert!(repo.cast_vote("nopenope", 0).unwrap_err().is(ErrorCode::NotFound));
        assert!(repo.voted_polls().unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_polls() {
        let repo = repo();
        repo.store().set("poll_broken01", "{not json").unwrap();
        assert!(repo.load_poll("broken01").unwrap_err().is(ErrorCode::Corrupted));

        let mismatched = r#"{"question":"Q","options":["a","b"],"votes":[1],"created":"2024-05-01T10:00:00Z"}"#;
        repo.store().set("poll_broken02", mismatched).unwrap();
        assert!(repo.load_poll("broken02").unwrap_err().is(ErrorCode::Corrupted));
    }

    #[test]
    fn test_malformed_bookkeeping_reads_as_empty() {
        let repo = repo();
        repo.store().set(VOTED_POLLS_KEY, "oops").unwrap();
        repo.store().set(FREE_USAGE_KEY, "[]").unwrap();
        assert!(repo.voted_polls().unwrap().is_empty());
        assert_eq!(repo.free_usage().unwrap().notes, 0);
        assert!(repo.create_note("still works").is_ok());
    }

    #[test]
    fn test_storage_failures_propagate() {
        let repo = Repository::new(ReadOnlyStore(MemoryStore::new()));
        let err = repo.create_note("hello").unwrap_err();
        assert!(err.is(ErrorCode::StorageUnavailable));
        assert!(repo.free_usage().unwrap().notes == 0);
        assert!(repo.log_in().unwrap_err().is(ErrorCode::StorageUnavailable));
    }

    #[test]
    fn test_failed_vote_bookkeeping_is_not_counted() {
        let repo = Repository::new(FlakyStore::default());
        repo.log_in().unwrap();
        let (id, _) = repo.create_poll("Q?", &options(&["A", "B"])).unwrap();

        repo.store().fail_on(VOTED_POLLS_KEY);
        assert!(repo.cast_vote(&id, 0).unwrap_err().is(ErrorCode::StorageUnavailable));
        assert!(repo.cast_vote(&id, 0).unwrap_err().is(ErrorCode::StorageUnavailable));
        assert_eq!(repo.load_poll(&id).unwrap().votes, vec![0, 0]);
    }

    #[test]
    fn test_failed_poll_write_unmarks_vote() {
        let repo = Repository::new(FlakyStore::default());
        repo.log_in().unwrap();
        let (first, _) = repo.create_poll("First?", &options(&["A", "B"])).unwrap();
        let (second, _) = repo.create_poll("Second?", &options(&["A", "B"])).unwrap();
        repo.cast_vote(&first, 1).unwrap();

        repo.store().fail_on("poll_");
        assert!(repo.cast_vote(&second, 0).unwrap_err().is(ErrorCode::StorageUnavailable));
        assert_eq!(repo.voted_polls().unwrap(), vec![first.clone()]);
        assert!(!repo.has_voted(&second).unwrap());
        assert_eq!(repo.load_poll(&second).unwrap().votes, vec![0, 0]);

        repo.store().fail_prefix.set(None);
        assert_eq!(repo.cast_vote(&second, 0).unwrap().votes, vec![1, 0]);
    }

    #[test]
    fn test_failed_usage_write_discards_content() {
        let repo = Repository::new(FlakyStore::default());
        repo.store().fail_on(FREE_USAGE_KEY);

        assert!(repo.create_note("hello").unwrap_err().is(ErrorCode::StorageUnavailable));
        assert!(repo.create_poll("Q?", &options(&["A", "B"])).unwrap_err().is(ErrorCode::StorageUnavailable));
        assert!(repo.store().inner.is_empty());
    }

    #[test]
    fn test_share_urls() {
        assert_eq!(note_url("https://qr.example/", "abc12345"), "https://qr.example/note/abc12345");
        assert_eq!(poll_url("https://qr.example", "abc12345"), "https://qr.example/poll/abc12345");
        assert_eq!(results_url("http://localhost:8080", "abc12345"), "http://localhost:8080/poll-results/abc12345");
    }

    #[test]
    fn test_qr_image_url() {
        assert_eq!(
            qr_image_url("https://x.io/note/abc", &QrOptions::default()),
            "https://chart.googleapis.com/chart?cht=qr&chl=https%3A%2F%2Fx.io%2Fnote%2Fabc&chs=200x200&chco=00E676&chf=bg,s,00000000"
        );
        assert!(qr_image_url("a b", &QrOptions::new().with_size(120)).contains("chl=a%20b&chs=120x120"));
    }

    #[test]
    fn test_auth_mode_copy() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled().submit_label(), "Login");
        assert_eq!(AuthMode::Signup.success_message(), "Account created successfully");
        assert_eq!(AuthMode::Login.toggle_prompt().1, "Sign up");
    }
}
