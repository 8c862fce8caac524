//! Guest: a person who can hold reservations.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::cpf::Cpf;
use crate::error::ValidationErrors;
use crate::event::Collection;
use crate::id::GuestId;
use crate::record::{Record, merge};

pub const MIN_NAME_LENGTH: usize = 2;

/// A registered hotel guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub cpf: Cpf,
    pub email: String,
}

impl Guest {
    /// `first_name last_name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A validated guest that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    pub first_name: String,
    pub last_name: String,
    pub cpf: Cpf,
    pub email: String,
}

/// Fields to overwrite on an existing guest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub cpf: Option<Cpf>,
    pub email: Option<String>,
}

impl From<GuestDraft> for GuestPatch {
    fn from(draft: GuestDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            cpf: Some(draft.cpf),
            email: Some(draft.email),
        }
    }
}

impl Record for Guest {
    type Id = GuestId;
    type Draft = GuestDraft;
    type Patch = GuestPatch;

    const NAME: &'static str = "Guest";
    const COLLECTION: Collection = Collection::Guests;

    fn id(&self) -> GuestId {
        self.id
    }

    fn from_draft(id: GuestId, draft: GuestDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            cpf: draft.cpf,
            email: draft.email,
        }
    }

    fn apply(&mut self, patch: GuestPatch) {
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.cpf, patch.cpf);
        merge(&mut self.email, patch.email);
    }
}

/// Raw guest input as submitted by a form. The CPF may carry its mask.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestForm {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
}

impl GuestForm {
    /// Pre-fill the form from a stored guest.
    #[must_use]
    pub fn from_guest(guest: &Guest) -> Self {
        Self {
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            cpf: guest.cpf.to_string(),
            email: guest.email.clone(),
        }
    }

    /// Validate every field; the resulting draft holds the CPF digits only.
    ///
    /// # Errors
    ///
    /// Returns the message of each rejected field, keyed by its persisted name.
    pub fn validate(&self) -> Result<GuestDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = errors.check("firstName", parse_name(&self.first_name, "Nome"));
        let last_name = errors.check("lastName", parse_name(&self.last_name, "Sobrenome"));
        let cpf = errors.check("cpf", parse_cpf(&self.cpf));
        let email = errors.check("email", parse_email(&self.email));

        match (first_name, last_name, cpf, email) {
            (Some(first_name), Some(last_name), Some(cpf), Some(email)) => Ok(GuestDraft {
                first_name,
                last_name,
                cpf,
                email,
            }),
            _ => Err(errors),
        }
    }
}

/// Letters (Latin-1 accented ones included) and whitespace only.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || c.is_whitespace()
}

fn parse_name(raw: &str, label: &str) -> Result<String, String> {
    if raw.chars().count() < MIN_NAME_LENGTH {
        return Err(format!(
            "{label} deve ter pelo menos {MIN_NAME_LENGTH} caracteres"
        ));
    }
    if !raw.chars().all(is_name_char) {
        return Err(format!("{label} deve conter apenas letras"));
    }
    Ok(raw.to_string())
}

fn parse_cpf(raw: &str) -> Result<Cpf, String> {
    if raw.is_empty() {
        return Err("CPF é obrigatório".to_string());
    }
    Cpf::parse(raw).ok_or_else(|| "CPF inválido".to_string())
}

fn parse_email(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("E-mail é obrigatório".to_string());
    }
    if !is_valid_email(raw) {
        return Err("E-mail inválido".to_string());
    }
    Ok(raw.to_string())
}

/// RFC-shaped address whose domain also ends in a dotted alphabetic TLD.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    raw.validate_email()
        && raw
            .rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit_once('.'))
            .is_some_and(|(_, tld)| {
                tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
            })
}
