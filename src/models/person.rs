//! Personal identity models.
//!
//! This module defines the [`Address`], [`IdentityDocument`] and [`Person`]
//! types. A [`Person`] is never used on its own by the engine; it is embedded
//! in a [`Worker`](super::Worker) which only hands out shared references,
//! so identity data cannot change after hiring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Address;
///
/// let address = Address {
///     street: "Av. Arequipa 1234".to_string(),
///     reference: "N/A".to_string(),
///     district: "Lince".to_string(),
///     province: "Lima".to_string(),
///     department: "Lima".to_string(),
/// };
/// assert_eq!(address.to_string(), "Av. Arequipa 1234, Lince");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Free-text reference (nearby landmark).
    pub reference: String,
    /// District.
    pub district: String,
    /// Province.
    pub province: String,
    /// Department (region).
    pub department: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.district)
    }
}

/// The kind of identity document a person holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// National identity document.
    Dni,
    /// Residence card for foreign nationals.
    ForeignerCard,
    /// Passport.
    Passport,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentType::Dni => "DNI",
            DocumentType::ForeignerCard => "CE",
            DocumentType::Passport => "Passport",
        };
        f.write_str(label)
    }
}

/// An identity document: type plus number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// The document type.
    pub document_type: DocumentType,
    /// The document number.
    pub number: String,
}

/// A natural person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The person's identity document.
    pub document: IdentityDocument,
    /// Given name(s).
    pub given_name: String,
    /// First (paternal) surname.
    pub paternal_surname: String,
    /// Second (maternal) surname.
    pub maternal_surname: String,
    /// Home address.
    pub address: Address,
}

impl Person {
    /// Returns the given name followed by both surnames.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Address, DocumentType, IdentityDocument, Person};
    ///
    /// let person = Person {
    ///     document: IdentityDocument {
    ///         document_type: DocumentType::Dni,
    ///         number: "45678912".to_string(),
    ///     },
    ///     given_name: "Rosa".to_string(),
    ///     paternal_surname: "Quispe".to_string(),
    ///     maternal_surname: "Mamani".to_string(),
    ///     address: Address {
    ///         street: "Jr. Puno 455".to_string(),
    ///         reference: "N/A".to_string(),
    ///         district: "Cercado".to_string(),
    ///         province: "Lima".to_string(),
    ///         department: "Lima".to_string(),
    ///     },
    /// };
    /// assert_eq!(person.full_name(), "Rosa Quispe Mamani");
    /// ```
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.given_name, self.paternal_surname, self.maternal_surname
        )
    }

    /// Returns the identity document number.
    pub fn document_number(&self) -> &str {
        &self.document.number
    }
}
