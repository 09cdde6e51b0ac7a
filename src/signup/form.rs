//! Signup form state and validity rules.
//!
//! Fields are private and mutated through setters so the derived age is
//! recomputed on every date edit. Validity is computed from the fields on each
//! call and never cached.

use super::age::{self, derive_age, DerivedAge};
use crate::app::AppError;
use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Female, Self::Male, Self::PreferNotToSay];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "female" | "feminino" => Ok(Self::Female),
            "male" | "masculino" => Ok(Self::Male),
            "prefernottosay" | "naoinformar" => Ok(Self::PreferNotToSay),
            _ => Err(format!(
                "invalid gender '{value}', expected one of: female, male, prefer-not-to-say"
            )),
        }
    }
}

/// The `{email, password}` pair used to authenticate.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct SignupForm {
    name: String,
    date_of_birth: String,
    derived_age: DerivedAge,
    gender: Option<Gender>,
    email: String,
    password: SecretString,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: String::new(),
            derived_age: DerivedAge::Unknown,
            gender: None,
            email: String::new(),
            password: SecretString::default(),
        }
    }
}

impl SignupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the birth date and recomputes the age against the local date.
    pub fn set_date_of_birth(&mut self, date_of_birth: impl Into<String>) {
        self.set_date_of_birth_on(date_of_birth, age::today());
    }

    /// Sets the birth date and recomputes the age against an explicit date.
    pub fn set_date_of_birth_on(&mut self, date_of_birth: impl Into<String>, today: NaiveDate) {
        self.date_of_birth = date_of_birth.into();
        self.derived_age = derive_age(&self.date_of_birth, today);
    }

    /// Selects a gender; `None` is the placeholder option.
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    #[must_use]
    pub const fn derived_age(&self) -> DerivedAge {
        self.derived_age
    }

    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Text shown next to the date field.
    #[must_use]
    pub fn age_display(&self) -> String {
        self.derived_age.display()
    }

    /// Whether every field constraint holds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the field constraints in form order.
    ///
    /// # Errors
    /// Returns `AppError::Validation` describing the first unmet constraint.
    pub fn validate(&self) -> Result<(), AppError> {
        let failure = if self.name.trim().is_empty() {
            Some("Name is required.")
        } else if self.date_of_birth.is_empty() {
            Some("Date of birth is required.")
        } else if self.derived_age.years().is_none() {
            Some("Date of birth must be a valid date that is not in the future.")
        } else if self.gender.is_none() {
            Some("Please select a gender.")
        } else if self.email.trim().is_empty() {
            Some("Email is required.")
        } else if self.password.expose_secret().trim().is_empty() {
            Some("Password is required.")
        } else {
            None
        };

        failure.map_or(Ok(()), |message| {
            Err(AppError::Validation(message.to_string()))
        })
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
