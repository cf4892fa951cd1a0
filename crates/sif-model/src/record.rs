//! Decoded patron records.

use std::collections::BTreeMap;

/// Field names the conversion reads from the base and address layouts.
pub mod fields {
    pub const PATRON_ID: &str = "patron_id";
    pub const FIRST_NAME: &str = "first_name";
    pub const MIDDLE_NAME: &str = "middle_name";
    pub const SURNAME: &str = "surname";
    pub const PATRON_EXPIRATION_DATE: &str = "patron_expiration_date";
    pub const PATRON_PURGE_DATE: &str = "patron_purge_date";
    pub const PATRON_BARCODE_1: &str = "patron_barcode_1";
    pub const PATRON_BARCODE_2: &str = "patron_barcode_2";
    pub const BARCODE_STATUS_1: &str = "barcode_status_1";
    pub const BARCODE_STATUS_2: &str = "barcode_status_2";

    pub const ADDRESS_TYPE: &str = "address_type";
    pub const ADDRESS_BEGIN_DATE: &str = "address_begin_date";
    pub const ADDRESS_END_DATE: &str = "address_end_date";
    pub const ADDRESS_LINE_1: &str = "address_line_1";
    pub const ADDRESS_LINE_2: &str = "address_line_2";
    pub const ADDRESS_LINE_3: &str = "address_line_3";
    pub const ADDRESS_LINE_4: &str = "address_line_4";
    pub const ADDRESS_LINE_5: &str = "address_line_5";
    pub const CITY: &str = "city";
    pub const STATE_CODE: &str = "state_code";
    pub const ZIPCODE: &str = "zipcode";
    pub const COUNTRY: &str = "country";
    pub const PHONE_PRIMARY: &str = "phone_primary";
    pub const PHONE_MOBILE: &str = "phone_mobile";
    pub const PHONE_FAX: &str = "phone_fax";
    pub const PHONE_OTHER: &str = "phone_other";

    /// Base fields the mapper reads.
    pub const REQUIRED_BASE: &[&str] = &[
        PATRON_ID,
        FIRST_NAME,
        MIDDLE_NAME,
        SURNAME,
        PATRON_EXPIRATION_DATE,
        PATRON_PURGE_DATE,
        PATRON_BARCODE_1,
        PATRON_BARCODE_2,
        BARCODE_STATUS_1,
        BARCODE_STATUS_2,
    ];

    /// Address fields the mapper reads.
    pub const REQUIRED_ADDRESS: &[&str] = &[
        ADDRESS_TYPE,
        ADDRESS_BEGIN_DATE,
        ADDRESS_END_DATE,
        ADDRESS_LINE_1,
        ADDRESS_LINE_2,
        ADDRESS_LINE_3,
        ADDRESS_LINE_4,
        ADDRESS_LINE_5,
        CITY,
        STATE_CODE,
        ZIPCODE,
        COUNTRY,
        PHONE_PRIMARY,
        PHONE_MOBILE,
        PHONE_FAX,
        PHONE_OTHER,
    ];
}

/// Decoded values of one fixed-width block keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value of `name`, or the empty string when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Address type code for a postal address.
pub const ADDRESS_TYPE_POSTAL: &str = "1";

/// Address type code for an e-mail address held in `address_line_1`.
pub const ADDRESS_TYPE_EMAIL: &str = "3";

/// One repeated address block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub fields: FieldValues,
}

impl Address {
    pub fn new(fields: FieldValues) -> Self {
        Self { fields }
    }

    pub fn address_type(&self) -> &str {
        self.fields.get(fields::ADDRESS_TYPE)
    }

    pub fn is_postal(&self) -> bool {
        self.address_type() == ADDRESS_TYPE_POSTAL
    }

    pub fn is_email(&self) -> bool {
        self.address_type() == ADDRESS_TYPE_EMAIL
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name)
    }
}

/// One decoded SIF line: base fields, address blocks and optional note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatronRecord {
    pub base: FieldValues,
    pub addresses: Vec<Address>,
    pub note: Option<String>,
}

impl PatronRecord {
    pub fn get(&self, name: &str) -> &str {
        self.base.get(name)
    }

    pub fn patron_id(&self) -> &str {
        self.base.get(fields::PATRON_ID)
    }

    /// Note text when present and non-empty.
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.is_empty())
    }
}
