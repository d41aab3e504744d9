//! Field validation rules.
//!
//! DESIGN
//! ======
//! Rules behave like the browser form validators the studio UI was built
//! with: `Required` is the only rule that fires on an empty value, so an empty
//! field reports exactly one error. Length limits count characters, not bytes.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// A single validation failure on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::Email => f.write_str("must be a valid e-mail address"),
            Self::MinLength(min) => write!(f, "must be at least {min} characters"),
            Self::MaxLength(max) => write!(f, "must be at most {max} characters"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

/// Apply `rules` to `value`, returning every failure in rule order.
pub fn check(value: &str, rules: &[Rule]) -> Vec<FieldError> {
    let empty = value.is_empty();
    let len = value.chars().count();
    rules
        .iter()
        .filter_map(|rule| match *rule {
            Rule::Required if empty => Some(FieldError::Required),
            Rule::Email if !empty && !is_email(value) => Some(FieldError::Email),
            Rule::MinLength(min) if !empty && len < min => Some(FieldError::MinLength(min)),
            Rule::MaxLength(max) if len > max => Some(FieldError::MaxLength(max)),
            _ => None,
        })
        .collect()
}

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// E-mail shape check: dotted-atom local part, `@`, then one or more
/// hostname labels. A bare host (`user@localhost`) is accepted.
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c)))
}

fn is_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// =============================================================================
// FORM ERRORS
// =============================================================================

/// Validation outcome for a whole form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: Vec<(&'static str, Vec<FieldError>)>,
}

impl FormErrors {
    /// Validate one field and record its failures.
    pub fn field(&mut self, name: &'static str, value: &str, rules: &[Rule]) -> &mut Self {
        let errors = check(value, rules);
        if !errors.is_empty() {
            self.fields.push((name, errors));
        }
        self
    }

    /// Record a failure computed outside the string rules.
    pub fn push(&mut self, name: &'static str, error: FieldError) -> &mut Self {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, errors)) => errors.push(error),
            None => self.fields.push((name, vec![error])),
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Failures recorded for `name`, empty when the field is valid.
    pub fn errors(&self, name: &str) -> &[FieldError] {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, errors)| errors.as_slice())
            .unwrap_or_default()
    }

    pub fn has_error(&self, name: &str, error: FieldError) -> bool {
        self.errors(name).contains(&error)
    }

    /// `"email must be a valid e-mail address"`-style lines, one per failure.
    pub fn messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |error| format!("{field} {error}")))
            .collect()
    }
}
