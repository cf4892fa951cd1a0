//! Alma SIS `<user>` element tree.
//!
//! Only the elements a SIF record can populate are modelled. Elements with no
//! SIF source (job category, gender, preferred language, birth date, blocks,
//! statistics, resource-sharing libraries) are never written.

/// One `<user>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub primary_id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub expiry_date: String,
    pub purge_date: String,
    pub status: String,
    pub contact_info: ContactInfo,
    pub user_identifiers: Vec<UserIdentifier>,
    /// Written only when non-empty.
    pub user_notes: Vec<UserNote>,
}

/// `<contact_info>`: addresses, emails and phones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub addresses: Vec<UserAddress>,
    pub emails: Vec<UserEmail>,
    pub phones: Vec<UserPhone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAddress {
    pub preferred: bool,
    pub lines: [String; 5],
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub address_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEmail {
    pub preferred: bool,
    pub email_address: String,
    pub email_type: String,
}

/// Phone categories, one per SIF phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneType {
    Primary,
    Mobile,
    Fax,
    General,
}

impl PhoneType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Mobile => "mobile",
            Self::Fax => "fax",
            Self::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPhone {
    pub phone_number: String,
    pub phone_type: PhoneType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentifier {
    pub id_type: String,
    pub value: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserNote {
    pub note_type: String,
    pub note_text: String,
    pub user_viewable: bool,
}
