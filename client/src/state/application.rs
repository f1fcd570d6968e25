//! Club membership application form: field state and validation.
//!
//! DESIGN
//! ======
//! Raw input stays as strings so the form can echo exactly what the user
//! typed; `validate` produces either a normalized request or one message per
//! offending field.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use std::collections::BTreeMap;

use session::Identity;

/// Minimum length of the motivation statement, in characters.
pub const MIN_MOTIVATION_CHARS: usize = 30;

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    StudentId,
    Department,
    Year,
    Email,
    Phone,
    Motivation,
}

/// Raw application form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub student_id: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
    pub motivation: String,
}

/// Validated, normalized application ready for submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRequest {
    pub full_name: String,
    pub student_id: String,
    pub department: String,
    pub year: u8,
    pub email: String,
    /// Local 11-digit form, `01XXXXXXXXX`.
    pub phone: String,
    pub motivation: String,
}

/// One message per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Submission lifecycle for the apply page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Submitted { reference: String },
    Failed(String),
}

impl ApplicationForm {
    /// Form with name and email taken from the signed-in user.
    pub fn prefilled(user: &Identity) -> Self {
        Self { full_name: user.name.clone(), email: user.email.clone(), ..Self::default() }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::StudentId => &mut self.student_id,
            Field::Department => &mut self.department,
            Field::Year => &mut self.year,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Motivation => &mut self.motivation,
        };
        *slot = value;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::StudentId => &self.student_id,
            Field::Department => &self.department,
            Field::Year => &self.year,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Motivation => &self.motivation,
        }
    }

    /// Check every field and normalize the input.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with one message for each invalid field.
    pub fn validate(&self) -> Result<ApplicationRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.insert(Field::FullName, "Enter your full name.");
        }
        let student_id = self.student_id.trim();
        if student_id.is_empty() {
            errors.insert(Field::StudentId, "Enter your student ID.");
        } else if !student_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            errors.insert(Field::StudentId, "Student ID may only contain letters, digits, and dashes.");
        }
        let department = self.department.trim();
        if department.is_empty() {
            errors.insert(Field::Department, "Enter your department.");
        }
        let year = match self.year.trim().parse::<u8>() {
            Ok(year @ 1..=5) => year,
            _ => {
                errors.insert(Field::Year, "Choose a year of study between 1 and 5.");
                0
            }
        };
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Enter your email address.");
        } else if !is_email(email) {
            errors.insert(Field::Email, "Enter a valid email address.");
        }
        let phone = normalize_phone(&self.phone);
        if phone.is_none() {
            errors.insert(Field::Phone, "Enter a Bangladeshi mobile number like 01712345678.");
        }
        let motivation = self.motivation.trim();
        if motivation.chars().count() < MIN_MOTIVATION_CHARS {
            errors.insert(Field::Motivation, "Tell the club a little more (at least 30 characters).");
        }

        match phone {
            Some(phone) if errors.is_empty() => Ok(ApplicationRequest {
                full_name: full_name.to_owned(),
                student_id: student_id.to_owned(),
                department: department.to_owned(),
                year,
                email: email.to_owned(),
                phone,
                motivation: motivation.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

fn is_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Normalize a Bangladeshi mobile number to `01XXXXXXXXX`.
///
/// Accepts spaces and dashes, and an optional `+88`/`88` country prefix. The
/// operator digit after `01` must be 3–9.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    let local = digits.strip_prefix("88").unwrap_or(digits);
    let bytes = local.as_bytes();
    let valid = bytes.len() == 11
        && bytes.iter().all(u8::is_ascii_digit)
        && local.starts_with("01")
        && matches!(bytes.get(2), Some(b'3'..=b'9'));
    valid.then(|| local.to_owned())
}
