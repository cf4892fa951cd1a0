//! `<user>` serialization and preview formatting.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::user::{User, UserAddress, UserEmail, UserIdentifier, UserNote, UserPhone};

/// Root element of the SIS document.
pub const ROOT_ELEMENT: &str = "users";

/// Root attribute holding the number of `<user>` elements.
pub const RECORD_COUNT_ATTRIBUTE: &str = "total_record_count";

/// Serialize one user as a compact fragment without an XML declaration.
pub fn user_fragment(user: &User) -> Result<String> {
    let mut xml = Writer::new(Vec::new());
    write_user(&mut xml, user)?;
    Ok(String::from_utf8(xml.into_inner())?)
}

/// Serialize one user indented by two spaces per level, for display.
pub fn user_preview(user: &User) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_user(&mut xml, user)?;
    Ok(String::from_utf8(xml.into_inner())?)
}

/// Write one `<user>` element.
pub fn write_user<W: Write>(xml: &mut Writer<W>, user: &User) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("user")))?;
    text_element(xml, "primary_id", &user.primary_id)?;
    text_element(xml, "first_name", &user.first_name)?;
    text_element(xml, "middle_name", &user.middle_name)?;
    text_element(xml, "last_name", &user.last_name)?;
    text_element(xml, "expiry_date", &user.expiry_date)?;
    text_element(xml, "purge_date", &user.purge_date)?;
    text_element(xml, "status", &user.status)?;

    xml.write_event(Event::Start(BytesStart::new("contact_info")))?;
    write_list(xml, "addresses", &user.contact_info.addresses, write_address)?;
    write_list(xml, "emails", &user.contact_info.emails, write_email)?;
    write_list(xml, "phones", &user.contact_info.phones, write_phone)?;
    xml.write_event(Event::End(BytesEnd::new("contact_info")))?;

    write_list(
        xml,
        "user_identifiers",
        &user.user_identifiers,
        write_identifier,
    )?;
    if !user.user_notes.is_empty() {
        write_list(xml, "user_notes", &user.user_notes, write_note)?;
    }
    xml.write_event(Event::End(BytesEnd::new("user")))?;
    Ok(())
}

fn write_address<W: Write>(xml: &mut Writer<W>, address: &UserAddress) -> Result<()> {
    let mut start = BytesStart::new("address");
    if address.preferred {
        start.push_attribute(("preferred", "true"));
    }
    xml.write_event(Event::Start(start))?;
    for (name, line) in ["line1", "line2", "line3", "line4", "line5"]
        .iter()
        .zip(&address.lines)
    {
        text_element(xml, name, line)?;
    }
    text_element(xml, "city", &address.city)?;
    text_element(xml, "state_province", &address.state_province)?;
    text_element(xml, "postal_code", &address.postal_code)?;
    text_element(xml, "country", &address.country)?;
    text_element(xml, "start_date", &address.start_date)?;
    text_element(xml, "end_date", &address.end_date)?;
    xml.write_event(Event::Start(BytesStart::new("address_types")))?;
    text_element(xml, "address_type", &address.address_type)?;
    xml.write_event(Event::End(BytesEnd::new("address_types")))?;
    xml.write_event(Event::End(BytesEnd::new("address")))?;
    Ok(())
}

fn write_email<W: Write>(xml: &mut Writer<W>, email: &UserEmail) -> Result<()> {
    let mut start = BytesStart::new("email");
    if email.preferred {
        start.push_attribute(("preferred", "true"));
    }
    xml.write_event(Event::Start(start))?;
    text_element(xml, "email_address", &email.email_address)?;
    xml.write_event(Event::Start(BytesStart::new("email_types")))?;
    text_element(xml, "email_type", &email.email_type)?;
    xml.write_event(Event::End(BytesEnd::new("email_types")))?;
    xml.write_event(Event::End(BytesEnd::new("email")))?;
    Ok(())
}

fn write_phone<W: Write>(xml: &mut Writer<W>, phone: &UserPhone) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("phone")))?;
    text_element(xml, "phone_number", &phone.phone_number)?;
    xml.write_event(Event::Start(BytesStart::new("phone_types")))?;
    text_element(xml, "phone_type", phone.phone_type.as_str())?;
    xml.write_event(Event::End(BytesEnd::new("phone_types")))?;
    xml.write_event(Event::End(BytesEnd::new("phone")))?;
    Ok(())
}

fn write_identifier<W: Write>(xml: &mut Writer<W>, identifier: &UserIdentifier) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("user_identifier")))?;
    text_element(xml, "id_type", &identifier.id_type)?;
    text_element(xml, "value", &identifier.value)?;
    text_element(xml, "status", &identifier.status)?;
    xml.write_event(Event::End(BytesEnd::new("user_identifier")))?;
    Ok(())
}

fn write_note<W: Write>(xml: &mut Writer<W>, note: &UserNote) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("user_note")))?;
    text_element(xml, "note_type", &note.note_type)?;
    text_element(xml, "note_text", &note.note_text)?;
    text_element(
        xml,
        "user_viewable",
        if note.user_viewable { "true" } else { "false" },
    )?;
    xml.write_event(Event::End(BytesEnd::new("user_note")))?;
    Ok(())
}

/// Write a container element; an empty list is written as `<name/>`.
fn write_list<W, T, F>(xml: &mut Writer<W>, name: &str, items: &[T], mut write_item: F) -> Result<()>
where
    W: Write,
    F: FnMut(&mut Writer<W>, &T) -> Result<()>,
{
    if items.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    for item in items {
        write_item(xml, item)?;
    }
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name>value</name>`, or `<name/>` for an empty value.
///
/// Text is escaped here; callers pass raw values. Only `&`, `<` and `>`
/// are escaped, quotes are left as they are.
fn text_element<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(value))))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{ContactInfo, PhoneType};

    fn user() -> User {
        User {
            primary_id: "1001".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            expiry_date: "2099-12-31Z".to_string(),
            purge_date: "2099-12-31Z".to_string(),
            status: "ACTIVE".to_string(),
            contact_info: ContactInfo {
                addresses: vec![],
                emails: vec![UserEmail {
                    preferred: false,
                    email_address: String::new(),
                    email_type: "alternative".to_string(),
                }],
                phones: vec![UserPhone {
                    phone_number: "5551234567".to_string(),
                    phone_type: PhoneType::Primary,
                }],
            },
            ..User::default()
        }
    }

    #[test]
    fn fragment_has_no_declaration_and_empty_elements() {
        let xml = user_fragment(&user()).unwrap();
        assert!(xml.starts_with("<user><primary_id>1001</primary_id>"));
        assert!(xml.contains("<middle_name/>"));
        assert!(xml.contains("<addresses/>"));
        assert!(xml.contains(
            "<emails><email><email_address/><email_types><email_type>alternative</email_type></email_types></email></emails>"
        ));
        assert!(xml.contains(
            "<phones><phone><phone_number>5551234567</phone_number><phone_types><phone_type>primary</phone_type></phone_types></phone></phones>"
        ));
        assert!(xml.contains("<user_identifiers/>"));
        assert!(!xml.contains("user_notes"));
        assert!(!xml.contains("<?xml"));
        assert!(xml.ends_with("</user>"));
    }

    #[test]
    fn ampersands_are_escaped_once() {
        let mut user = user();
        user.contact_info.addresses.push(UserAddress {
            preferred: true,
            lines: [
                "Smith & Sons".to_string(),
                "R&amp;D wing".to_string(),
                String::new(),
                String::new(),
                String::new(),
            ],
            address_type: "home".to_string(),
            ..UserAddress::default()
        });
        let xml = user_fragment(&user).unwrap();
        assert!(xml.contains("<address preferred=\"true\"><line1>Smith &amp; Sons</line1>"));
        assert!(xml.contains("<line2>R&amp;amp;D wing</line2>"));
        assert!(xml.contains("<line3/>"));
    }

    #[test]
    fn quotes_are_not_escaped_in_text() {
        let mut user = user();
        user.last_name = "O'Brien \"x\" <jr>".to_string();
        let xml = user_fragment(&user).unwrap();
        assert!(xml.contains("<last_name>O'Brien \"x\" &lt;jr&gt;</last_name>"));
    }

    #[test]
    fn notes_written_when_present() {
        let mut user = user();
        user.user_notes.push(UserNote {
            note_type: "CIRCULATION".to_string(),
            note_text: "Prefers large print".to_string(),
            user_viewable: false,
        });
        let xml = user_fragment(&user).unwrap();
        assert!(xml.ends_with(
            "<user_notes><user_note><note_type>CIRCULATION</note_type><note_text>Prefers large print</note_text><user_viewable>false</user_viewable></user_note></user_notes></user>"
        ));
    }

    #[test]
    fn preview_is_indented() {
        let mut user = user();
        user.contact_info.addresses.push(UserAddress {
            preferred: true,
            lines: [
                "Smith & Sons".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            address_type: "home".to_string(),
            ..UserAddress::default()
        });
        insta::assert_snapshot!(user_preview(&user).unwrap(), @r#"
        <user>
          <primary_id>1001</primary_id>
          <first_name>Jane</first_name>
          <middle_name/>
          <last_name>Doe</last_name>
          <expiry_date>2099-12-31Z</expiry_date>
          <purge_date>2099-12-31Z</purge_date>
          <status>ACTIVE</status>
          <contact_info>
            <addresses>
              <address preferred="true">
                <line1>Smith &amp; Sons</line1>
                <line2/>
                <line3/>
                <line4/>
                <line5/>
                <city/>
                <state_province/>
                <postal_code/>
                <country/>
                <start_date/>
                <end_date/>
                <address_types>
                  <address_type>home</address_type>
                </address_types>
              </address>
            </addresses>
            <emails>
              <email>
                <email_address/>
                <email_types>
                  <email_type>alternative</email_type>
                </email_types>
              </email>
            </emails>
            <phones>
              <phone>
                <phone_number>5551234567</phone_number>
                <phone_types>
                  <phone_type>primary</phone_type>
                </phone_types>
              </phone>
            </phones>
          </contact_info>
          <user_identifiers/>
        </user>
        "#);
    }
}
