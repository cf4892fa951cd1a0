//! Patron record → SIS user mapping.
//!
//! Pure functions of the record and the configuration; no I/O.

use sif_model::{Address, ConversionConfig, PatronRecord, fields};

use crate::user::{
    ContactInfo, PhoneType, User, UserAddress, UserEmail, UserIdentifier, UserNote, UserPhone,
};

/// Barcode slots mapped to user identifiers, with their status field.
static BARCODE_SLOTS: [(&str, &str); 2] = [
    (fields::PATRON_BARCODE_1, fields::BARCODE_STATUS_1),
    (fields::PATRON_BARCODE_2, fields::BARCODE_STATUS_2),
];

static PHONE_FIELDS: [(&str, PhoneType); 4] = [
    (fields::PHONE_PRIMARY, PhoneType::Primary),
    (fields::PHONE_MOBILE, PhoneType::Mobile),
    (fields::PHONE_FAX, PhoneType::Fax),
    (fields::PHONE_OTHER, PhoneType::General),
];

/// Convert a SIF date (`YYYY.MM.DD`) to the SIS form (`YYYY-MM-DDZ`).
///
/// Blank values take `default`. The `Z` suffix is appended as-is: SIF dates
/// carry no zone and are treated as UTC.
pub fn alma_date(value: &str, default: &str) -> String {
    let date = if value.is_empty() { default } else { value };
    format!("{}Z", date.replace('.', "-"))
}

/// Keep only ASCII digits, commas and periods.
pub fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect()
}

/// Map one patron record to a `<user>` element tree.
pub fn map_user(record: &PatronRecord, config: &ConversionConfig) -> User {
    User {
        primary_id: record.patron_id().to_string(),
        first_name: record.get(fields::FIRST_NAME).to_string(),
        middle_name: record.get(fields::MIDDLE_NAME).to_string(),
        last_name: record.get(fields::SURNAME).to_string(),
        expiry_date: alma_date(
            record.get(fields::PATRON_EXPIRATION_DATE),
            &config.defaults.patron_expiry,
        ),
        purge_date: alma_date(
            record.get(fields::PATRON_PURGE_DATE),
            &config.defaults.patron_purge,
        ),
        status: config.codes.user_status.clone(),
        contact_info: ContactInfo {
            addresses: map_addresses(&record.addresses, config),
            emails: map_emails(&record.addresses, config),
            phones: map_phones(&record.addresses),
        },
        user_identifiers: map_identifiers(record, config),
        user_notes: map_notes(record, config),
    }
}

fn map_addresses(addresses: &[Address], config: &ConversionConfig) -> Vec<UserAddress> {
    let (_, mapped) = addresses.iter().filter(|address| address.is_postal()).fold(
        (false, Vec::new()),
        |(preferred_set, mut mapped), address| {
            mapped.push(UserAddress {
                preferred: !preferred_set,
                lines: [
                    fields::ADDRESS_LINE_1,
                    fields::ADDRESS_LINE_2,
                    fields::ADDRESS_LINE_3,
                    fields::ADDRESS_LINE_4,
                    fields::ADDRESS_LINE_5,
                ]
                .map(|name| address.get(name).to_string()),
                city: address.get(fields::CITY).to_string(),
                state_province: address.get(fields::STATE_CODE).to_string(),
                postal_code: address.get(fields::ZIPCODE).to_string(),
                country: address.get(fields::COUNTRY).to_string(),
                start_date: alma_date(
                    address.get(fields::ADDRESS_BEGIN_DATE),
                    &config.defaults.address_begin,
                ),
                end_date: alma_date(
                    address.get(fields::ADDRESS_END_DATE),
                    &config.defaults.address_end,
                ),
                address_type: config
                    .tables
                    .address_type
                    .lookup(address.address_type())
                    .to_string(),
            });
            (true, mapped)
        },
    );
    mapped
}

fn map_emails(addresses: &[Address], config: &ConversionConfig) -> Vec<UserEmail> {
    let (_, mut emails) = addresses.iter().filter(|address| address.is_email()).fold(
        (false, Vec::new()),
        |(preferred_set, mut emails), address| {
            let email_type = if preferred_set {
                &config.codes.default_email_type
            } else {
                &config.codes.primary_email_type
            };
            emails.push(UserEmail {
                preferred: !preferred_set,
                email_address: address.get(fields::ADDRESS_LINE_1).to_string(),
                email_type: email_type.clone(),
            });
            (true, emails)
        },
    );
    // Every user needs at least one email entry.
    if emails.is_empty() {
        emails.push(UserEmail {
            preferred: false,
            email_address: String::new(),
            email_type: config.codes.default_email_type.clone(),
        });
    }
    emails
}

fn map_phones(addresses: &[Address]) -> Vec<UserPhone> {
    addresses
        .iter()
        .flat_map(|address| {
            PHONE_FIELDS.iter().filter_map(move |(name, phone_type)| {
                let number = clean_phone(address.get(name));
                (!number.is_empty()).then_some(UserPhone {
                    phone_number: number,
                    phone_type: *phone_type,
                })
            })
        })
        .collect()
}

fn map_identifiers(record: &PatronRecord, config: &ConversionConfig) -> Vec<UserIdentifier> {
    BARCODE_SLOTS
        .iter()
        .filter_map(|(barcode_field, status_field)| {
            let barcode = record.get(barcode_field);
            (!barcode.is_empty()).then(|| UserIdentifier {
                id_type: config.codes.identifier_type.clone(),
                value: barcode.to_string(),
                status: config
                    .tables
                    .barcode_status
                    .lookup(record.get(status_field))
                    .to_string(),
            })
        })
        .collect()
}

fn map_notes(record: &PatronRecord, config: &ConversionConfig) -> Vec<UserNote> {
    record
        .note_text()
        .map(|text| UserNote {
            note_type: config.codes.note_type.clone(),
            note_text: text.to_string(),
            user_viewable: false,
        })
        .into_iter()
        .collect()
}
