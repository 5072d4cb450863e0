//! Shortening form state machine.
//!
//! Models the submission cycle of the demo form: a batch of 1 to
//! [`MAX_INPUTS`] inputs that are edited in place, validated all-or-nothing,
//! and annotated with per-input error messages on failure. State is explicit
//! and owned by the caller; there are no module-level singletons.

use crate::domain::entities::ShortenInput;
use crate::utils::validation::validate_input;

/// Maximum number of inputs a batch can hold.
pub const MAX_INPUTS: usize = 5;

/// Editable batch of shortening inputs.
#[derive(Debug, Clone)]
pub struct ShortenForm {
    inputs: Vec<ShortenInput>,
}

impl ShortenForm {
    /// Creates a form with a single empty input.
    pub fn new() -> Self {
        Self {
            inputs: vec![ShortenInput::default()],
        }
    }

    pub fn inputs(&self) -> &[ShortenInput] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Appends an empty input.
    ///
    /// No-op at capacity; returns whether an input was added.
    pub fn add_input(&mut self) -> bool {
        if self.inputs.len() >= MAX_INPUTS {
            return false;
        }
        self.inputs.push(ShortenInput::default());
        true
    }

    /// Removes the input at `idx`.
    ///
    /// No-op when only one input remains or `idx` is out of range; returns
    /// whether an input was removed.
    pub fn remove_input(&mut self, idx: usize) -> bool {
        if self.inputs.len() <= 1 || idx >= self.inputs.len() {
            return false;
        }
        self.inputs.remove(idx);
        true
    }

    /// Sets the URL field of input `idx`, clearing its error annotation.
    pub fn set_url(&mut self, idx: usize, value: impl Into<String>) -> bool {
        self.edit(idx, |input| input.url = value.into())
    }

    /// Sets the validity field of input `idx`, clearing its error annotation.
    pub fn set_validity(&mut self, idx: usize, value: impl Into<String>) -> bool {
        self.edit(idx, |input| input.validity = value.into())
    }

    /// Sets the shortcode field of input `idx`, clearing its error annotation.
    pub fn set_shortcode(&mut self, idx: usize, value: impl Into<String>) -> bool {
        self.edit(idx, |input| input.shortcode = value.into())
    }

    fn edit(&mut self, idx: usize, apply: impl FnOnce(&mut ShortenInput)) -> bool {
        match self.inputs.get_mut(idx) {
            Some(input) => {
                apply(input);
                input.error.clear();
                true
            }
            None => false,
        }
    }

    /// Validates every input, annotating failures in place.
    ///
    /// Returns true only when the whole batch may proceed; a single failing
    /// input rejects the submission.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;

        for input in &mut self.inputs {
            match validate_input(input) {
                Ok(()) => input.error.clear(),
                Err(message) => {
                    input.error = message.to_string();
                    valid = false;
                }
            }
        }

        valid
    }
}

impl Default for ShortenForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{INVALID_URL, INVALID_VALIDITY};

    #[test]
    fn test_new_form_has_one_empty_input() {
        let form = ShortenForm::new();
        assert_eq!(form.len(), 1);
        assert!(form.inputs()[0].url.is_empty());
    }

    #[test]
    fn test_add_input_stops_at_capacity() {
        let mut form = ShortenForm::new();

        for _ in 1..MAX_INPUTS {
            assert!(form.add_input());
        }
        assert_eq!(form.len(), MAX_INPUTS);

        // The add operation is a no-op beyond capacity.
        assert!(!form.add_input());
        assert_eq!(form.len(), MAX_INPUTS);
    }

    #[test]
    fn test_remove_input_keeps_at_least_one() {
        let mut form = ShortenForm::new();
        form.add_input();
        assert!(form.remove_input(1));
        assert!(!form.remove_input(0));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_remove_input_out_of_range_is_noop() {
        let mut form = ShortenForm::new();
        form.add_input();
        assert!(!form.remove_input(5));
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn test_validate_annotates_each_failing_input() {
        let mut form = ShortenForm::new();
        form.add_input();
        form.set_url(0, "not a url");
        form.set_url(1, "https://example.com");
        form.set_validity(1, "0");

        assert!(!form.validate());
        assert_eq!(form.inputs()[0].error, INVALID_URL);
        assert_eq!(form.inputs()[1].error, INVALID_VALIDITY);
    }

    #[test]
    fn test_validate_passes_clean_batch() {
        let mut form = ShortenForm::new();
        form.set_url(0, "https://example.com");
        form.set_shortcode(0, "abc123");

        assert!(form.validate());
        assert!(!form.inputs()[0].has_error());
    }

    #[test]
    fn test_editing_clears_previous_error() {
        let mut form = ShortenForm::new();
        form.set_url(0, "nope");
        assert!(!form.validate());
        assert!(form.inputs()[0].has_error());

        form.set_url(0, "https://example.com");
        assert!(!form.inputs()[0].has_error());
        assert!(form.validate());
    }

    #[test]
    fn test_edit_out_of_range_returns_false() {
        let mut form = ShortenForm::new();
        assert!(!form.set_url(3, "https://example.com"));
    }
}
