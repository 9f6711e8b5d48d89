use std::collections::HashSet;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 20;
pub const MAX_NOTE_LENGTH: usize = 5000;
pub const MAX_QUESTION_LENGTH: usize = 200;
pub const MAX_OPTION_LENGTH: usize = 100;
pub const MAX_FREE_NOTES: u32 = 3;
pub const MAX_FREE_POLLS: u32 = 1;
pub const ID_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a note")]
    EmptyNote,
    #[error("Note exceeds maximum length of {MAX_NOTE_LENGTH} characters")]
    NoteTooLong,
    #[error("Please enter a question")]
    EmptyQuestion,
    #[error("Question exceeds maximum length of {MAX_QUESTION_LENGTH} characters")]
    QuestionTooLong,
    #[error("All options must be filled")]
    EmptyOption,
    #[error("Option text exceeds maximum length of {MAX_OPTION_LENGTH} characters")]
    OptionTooLong,
    #[error("A poll must have at least {MIN_OPTIONS} options")]
    TooFewOptions,
    #[error("Too many options (maximum {MAX_OPTIONS})")]
    TooManyOptions,
    #[error("Duplicate option: {0}")]
    DuplicateOption(String),
    #[error("Please select an option")]
    NoOptionSelected,
    #[error("Please fill in all fields")]
    MissingCredentials,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn validate_note(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() { return Err(ValidationError::EmptyNote); }
    if text.chars().count() > MAX_NOTE_LENGTH { return Err(ValidationError::NoteTooLong); }
    Ok(())
}

pub fn validate_poll(question: &str, options: &[String]) -> Result<(), ValidationError> {
    if question.trim().is_empty() { return Err(ValidationError::EmptyQuestion); }
    if question.trim().chars().count() > MAX_QUESTION_LENGTH { return Err(ValidationError::QuestionTooLong); }
    if options.len() < MIN_OPTIONS { return Err(ValidationError::TooFewOptions); }
    if options.len() > MAX_OPTIONS { return Err(ValidationError::TooManyOptions); }
    if options.iter().any(|opt| opt.trim().is_empty()) { return Err(ValidationError::EmptyOption); }
    if options.iter().any(|opt| opt.trim().chars().count() > MAX_OPTION_LENGTH) {
        return Err(ValidationError::OptionTooLong);
    }

    let mut seen = HashSet::with_capacity(options.len());
    if let Some(duplicate) = options.iter().find(|opt| !seen.insert(opt.trim().to_lowercase())) {
        return Err(ValidationError::DuplicateOption(duplicate.trim().to_string()));
    }

    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}
