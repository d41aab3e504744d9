//! Create/update form for a yoga session.

use super::rules::{FieldError, FormErrors, Rule};
use crate::net::types::{Session, SessionDraft};
use crate::util::date::date_input_value;

const NAME_RULES: &[Rule] = &[Rule::Required];
const DATE_RULES: &[Rule] = &[Rule::Required];
const DESCRIPTION_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(2000)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub name: String,
    /// `YYYY-MM-DD`, as a date input produces it.
    pub date: String,
    /// Unset until a teacher is picked.
    pub teacher_id: Option<u64>,
    pub description: String,
}

impl SessionForm {
    /// Prefill from an existing session. The date keeps only its calendar
    /// part so it fits a date input.
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: date_input_value(&session.date),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.field("name", &self.name, NAME_RULES).field("date", &self.date, DATE_RULES);
        if self.teacher_id.is_none() {
            errors.push("teacher_id", FieldError::Required);
        }
        errors.field("description", &self.description, DESCRIPTION_RULES);
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// # Errors
    ///
    /// Returns the form's [`FormErrors`] when any field is invalid.
    pub fn to_draft(&self) -> Result<SessionDraft, FormErrors> {
        let errors = self.validate();
        match self.teacher_id {
            Some(teacher_id) if errors.is_valid() => Ok(SessionDraft {
                name: self.name.clone(),
                date: self.date.clone(),
                teacher_id,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::types::test_helpers::yoga_session;

    #[test]
    fn empty_form_requires_every_field() {
        let errors = SessionForm::default().validate();
        for field in ["name", "date", "teacher_id", "description"] {
            assert!(errors.has_error(field, FieldError::Required), "{field} should be required");
        }
    }

    #[test]
    fn description_is_capped() {
        let form = SessionForm {
            name: "n".into(),
            date: "2025-08-01".into(),
            teacher_id: Some(1),
            description: "d".repeat(2001),
        };
        assert!(form.validate().has_error("description", FieldError::MaxLength(2000)));
    }

    #[test]
    fn from_session_prefills_calendar_date() {
        let mut session = yoga_session(1, 2, vec![]);
        session.name = "Session Test".into();
        session.date = "2025-06-27T00:00:00.000+00:00".into();
        let form = SessionForm::from_session(&session);
        assert_eq!(form.name, "Session Test");
        assert_eq!(form.date, "2025-06-27");
        assert_eq!(form.teacher_id, Some(2));
        assert!(form.is_valid());
    }

    #[test]
    fn to_draft_requires_teacher() {
        let form = SessionForm {
            name: "Nouvelles session".into(),
            date: "2025-08-01".into(),
            teacher_id: None,
            description: "Test sessions".into(),
        };
        let errors = form.to_draft().unwrap_err();
        assert_eq!(errors.errors("teacher_id"), &[FieldError::Required]);

        let draft = SessionForm { teacher_id: Some(2), ..form }.to_draft().unwrap();
        assert_eq!(draft.teacher_id, 2);
        assert_eq!(draft.date, "2025-08-01");
    }
}
