use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid");
}

/// Form failures. The display text is what the blocking alert shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Câmpul „{0}” este obligatoriu.")]
    MissingField(&'static str),

    #[error("Adresa de email nu este validă.")]
    InvalidEmail,

    #[error("Parola trebuie să aibă cel puțin {min} caractere.")]
    PasswordTooShort { min: usize },

    #[error("Parolele nu coincid.")]
    PasswordMismatch,

    #[error("Trebuie să accepți termenii și condițiile.")]
    ConsentRequired,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
    pub newsletter: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub newsletter: bool,
    pub accepted_terms: bool,
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    require(email, "Email")?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    require(&form.first_name, "Prenume")?;
    require(&form.last_name, "Nume")?;
    check_email(&form.email)?;
    require(&form.password, "Parolă")?;
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !form.accepted_terms {
        return Err(ValidationError::ConsentRequired);
    }
    Ok(())
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    check_email(&form.email)?;
    require(&form.password, "Parolă")
}

pub fn validate_reset_email(email: &str) -> Result<(), ValidationError> {
    check_email(email)
}

pub fn validate_profile(form: &ProfileForm) -> Result<(), ValidationError> {
    require(&form.first_name, "Prenume")?;
    require(&form.last_name, "Nume")?;
    check_email(&form.email)?;
    if !form.accepted_terms {
        return Err(ValidationError::ConsentRequired);
    }
    Ok(())
}
