//! Pure field validation for raw submissions.
//!
//! Every rule is evaluated independently and every violation is collected
//! before returning, so the registrant sees all problems at once. Error
//! messages are ordered by field declaration order: name, email, program,
//! document, hobbies, goals, career aspirations, consent.

use std::sync::LazyLock;

use peer_match_registration_models::{NormalizedSubmission, Program, RawSubmission};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// Validates a raw submission, returning the trimmed and normalized field
/// values or the full ordered list of violations.
///
/// Never returns a partial result: either every rule passed and the
/// `NormalizedSubmission` is complete, or at least one message is
/// returned and nothing else happens with the submission.
///
/// # Errors
///
/// Returns one human-readable message per violated rule, in field
/// declaration order.
pub fn validate(raw: &RawSubmission) -> Result<NormalizedSubmission, Vec<String>> {
    let mut errors = Vec::new();

    let name = raw.name.trim();
    if name.is_empty() {
        errors.push("Please enter your name.".to_owned());
    } else if !is_valid_name(name) {
        errors.push("Please enter both your first name and last name.".to_owned());
    }

    let email = raw.email.trim().to_ascii_lowercase();
    if email.is_empty() {
        errors.push("Please enter your email address.".to_owned());
    } else if !is_valid_email(&email) {
        errors.push("Please enter a valid email address.".to_owned());
    }

    // An unknown label can only come from a tampered client; it gets the
    // same message as no selection at all.
    let program = raw
        .program
        .as_deref()
        .and_then(|label| label.parse::<Program>().ok());
    if program.is_none() {
        errors.push("Please select your program of study.".to_owned());
    }

    if raw.document.is_none() {
        errors.push("Please upload your LinkedIn profile PDF.".to_owned());
    }

    let hobbies = raw.hobbies.trim();
    if hobbies.is_empty() {
        errors.push("Please describe your hobbies and interests.".to_owned());
    }

    let goals = raw.goals.trim();
    if goals.is_empty() {
        errors.push("Please describe your goals for the upcoming academic year.".to_owned());
    }

    let career_aspirations = raw.career_aspirations.trim();
    if career_aspirations.is_empty() {
        errors.push("Please describe your career aspirations.".to_owned());
    }

    if !raw.consent {
        errors.push(
            "Please confirm that we may use and store your profile for matching.".to_owned(),
        );
    }

    match (program, &raw.document) {
        (Some(program), Some(document)) if errors.is_empty() => Ok(NormalizedSubmission {
            name: name.to_owned(),
            email,
            program,
            document: document.clone(),
            hobbies: hobbies.to_owned(),
            goals: goals.to_owned(),
            career_aspirations: career_aspirations.to_owned(),
        }),
        _ => Err(errors),
    }
}

/// A name is valid when it has at least two whitespace-separated tokens.
fn is_valid_name(name: &str) -> bool {
    name.split_whitespace().count() >= 2
}

/// An email is valid when it matches `local@domain.tld` (ASCII local part
/// of letters, digits, and `._%+-`; domain with at least one dot; TLD of
/// two or more letters) and the domain contains no empty labels.
fn is_valid_email(email: &str) -> bool {
    if !EMAIL_RE.is_match(email) {
        return false;
    }
    // The pattern alone admits consecutive dots in the domain
    // (`a@b..com`), which no mail host accepts.
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| !domain.contains(".."))
}
