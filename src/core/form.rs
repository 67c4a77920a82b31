// src/core/form.rs
use std::time::Instant;

use thiserror::Error;

use crate::clipboard::{copy_to_clipboard, ClipboardSink, CopyNotice};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::history::RecentPasswords;
use crate::models::{GeneratedPassword, PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::storage::KeyValueStore;

pub const LENGTH_MESSAGE: &str = "Length should be at least 5";
pub const LENGTH_TOO_LONG_MESSAGE: &str = "Length should be at most 1024";
pub const EMPTY_ALPHABET_MESSAGE: &str = "Select at least one character type";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    Invalid(#[from] GeneratorError),

    #[error("Nothing to copy")]
    NothingToCopy,

    #[error("No previous password at position {0}")]
    UnknownPosition(usize),
}

pub type Result<T> = std::result::Result<T, FormError>;

/// State behind the generator form: inputs, output, recent list and copy feedback.
pub struct PasswordForm<S: KeyValueStore> {
    options: PasswordGenerationOptions,
    generator: PasswordGenerator,
    current: Option<GeneratedPassword>,
    recent: RecentPasswords<S>,
    notice: CopyNotice,
}

impl<S: KeyValueStore> PasswordForm<S> {
    pub fn new(options: PasswordGenerationOptions, store: S) -> Self {
        Self {
            options,
            generator: PasswordGenerator::new(),
            current: None,
            recent: RecentPasswords::load(store),
            notice: CopyNotice::default(),
        }
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn set_length(&mut self, length: usize) {
        self.options.length = length;
    }

    pub fn set_numbers(&mut self, include: bool) {
        self.options.include_numbers = include;
    }

    pub fn set_letters(&mut self, include: bool) {
        self.options.include_letters = include;
    }

    pub fn set_special(&mut self, include: bool) {
        self.options.include_special = include;
    }

    /// Inline message for the current inputs; stays until the inputs are fixed.
    pub fn validation_message(&self) -> Option<&'static str> {
        if self.options.length < MIN_PASSWORD_LENGTH {
            Some(LENGTH_MESSAGE)
        } else if self.options.length > MAX_PASSWORD_LENGTH {
            Some(LENGTH_TOO_LONG_MESSAGE)
        } else if !self.options.any_class_selected() {
            Some(EMPTY_ALPHABET_MESSAGE)
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    pub fn recent(&self) -> &[GeneratedPassword] {
        self.recent.entries()
    }

    pub fn recent_count(&self) -> usize {
        self.recent.len()
    }

    pub fn has_recent(&self) -> bool {
        !self.recent.is_empty()
    }

    /// Generate a password from the current inputs. Invalid inputs leave the
    /// output and the recent list untouched.
    pub fn generate(&mut self) -> Result<&GeneratedPassword> {
        let value = self.generator.generate_password(&self.options)?;
        Ok(self.accept(value))
    }

    #[cfg(test)]
    fn generate_with_rng<R: rand::Rng>(&mut self, rng: &mut R) -> Result<&GeneratedPassword> {
        let value = self.generator.generate_with_rng(&self.options, rng)?;
        Ok(self.accept(value))
    }

    fn accept(&mut self, value: String) -> &GeneratedPassword {
        let password = GeneratedPassword::new(value);

        if let Err(e) = self.recent.record(password.clone()) {
            log::warn!("Could not persist recent passwords: {}", e);
        }

        self.current.insert(password)
    }

    pub fn copy_generated<C: ClipboardSink + ?Sized>(&mut self, sink: &mut C) -> Result<bool> {
        let value = match &self.current {
            Some(password) => password.value.clone(),
            None => return Err(FormError::NothingToCopy),
        };
        Ok(self.copy(sink, &value))
    }

    /// Copy a previous password by 0-based position, 0 being the newest.
    pub fn copy_recent<C: ClipboardSink + ?Sized>(&mut self, sink: &mut C, position: usize) -> Result<bool> {
        let value = match self.recent.get(position) {
            Some(password) => password.value.clone(),
            None => return Err(FormError::UnknownPosition(position)),
        };
        Ok(self.copy(sink, &value))
    }

    pub fn notice_visible(&self, now: Instant) -> bool {
        self.notice.is_visible(now)
    }

    fn copy<C: ClipboardSink + ?Sized>(&mut self, sink: &mut C, value: &str) -> bool {
        let copied = copy_to_clipboard(sink, value);
        if copied {
            self.notice.raise(Instant::now());
        }
        copied
    }
}
