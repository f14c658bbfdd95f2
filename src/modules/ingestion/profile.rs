//! Profile pages: one raw record per page, driven by [`PROFILE_LOCATORS`].

use scraper::Html;

use super::locator::{ExtractError, Located, PROFILE_LOCATORS, ProfileField};
use crate::domain::{ListingStub, RawFacultyRecord};

/// Extract a raw record from one profile page.
///
/// Fields that are not on the page come back empty (biography: `None`).
/// An `Err` means the page as a whole could not be processed.
pub fn parse_profile_page(html: &str, stub: &ListingStub) -> Result<RawFacultyRecord, ExtractError> {
    let document = Html::parse_document(html);

    let mut record = RawFacultyRecord {
        name: String::new(),
        faculty_type: stub.faculty_type,
        education: String::new(),
        phone: String::new(),
        email: String::new(),
        address: String::new(),
        specialization: String::new(),
        profile_url: stub.profile_url.clone(),
        biography: None,
        publications: Vec::new(),
        teaching: Vec::new(),
        source_listing_url: stub.source_listing_url.clone(),
        scraped_at: chrono::Utc::now(),
    };

    for (field, locator) in PROFILE_LOCATORS {
        let located = locator.locate(&document)?;
        assign(&mut record, *field, located)?;
    }

    Ok(record)
}

fn assign(record: &mut RawFacultyRecord, field: ProfileField, located: Located) -> Result<(), ExtractError> {
    match (field, located) {
        (ProfileField::Name, Located::Text(text)) => record.name = text,
        (ProfileField::Education, Located::Text(text)) => record.education = text,
        (ProfileField::Phone, Located::Text(text)) => record.phone = text,
        (ProfileField::Email, Located::Text(text)) => record.email = text,
        (ProfileField::Address, Located::Text(text)) => record.address = text,
        (ProfileField::Specialization, Located::Text(text)) => record.specialization = text,
        (ProfileField::Biography, Located::Optional(text)) => record.biography = text,
        (ProfileField::Publications, Located::List(items)) => record.publications = items,
        (ProfileField::Teaching, Located::List(items)) => record.teaching = items,
        (field, _) => return Err(ExtractError::UnexpectedShape { field }),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FacultyType;

    fn stub() -> ListingStub {
        ListingStub {
            name: "Jane Doe".into(),
            profile_url: "https://www.example.edu/jane-doe".into(),
            faculty_type: FacultyType::Distinguished,
            source_listing_url: "https://www.example.edu/distinguished-professor".into(),
        }
    }

    const PROFILE: &str = r#"
        <html><body>
          <div class="field--name-field-faculty-names">Jane Doe</div>
          <div class="field--name-field-faculty-name">PhD (Computer Science), MIT</div>
          <div class="field--name-field-contact-no">079-6826 1234</div>
          <div class="field--name-field-email"><div class="field__label">Email</div>
            <div class="field__item">jane[at]example.edu</div></div>
          <div class="field--name-field-address"># 2104, Faculty Block 2</div>
          <div class="field--name-field-biography"><p>Jane works on <b>systems</b>.</p></div>
          <div class="field--name-field-teaching">
            <p>Operating Systems</p>
            <p>Distributed Computing</p>
          </div>
          <div class="row">
            <div class="specializationIcon"><h2>Specialization</h2></div>
            <div class="work-exp"><p>Distributed Systems, Cloud Computing</p></div>
          </div>
          <h2>Publications</h2>
          <ul class="bulletText">
            <li>J. Doe, Consensus at scale, 2021</li>
            <li>J. Doe, Gossip revisited, 2019</li>
          </ul>
        </body></html>"#;

    #[test]
    fn test_full_profile() {
        let record = parse_profile_page(PROFILE, &stub()).unwrap();

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.faculty_type, FacultyType::Distinguished);
        assert_eq!(record.education, "PhD (Computer Science), MIT");
        assert_eq!(record.phone, "079-6826 1234");
        assert_eq!(record.email, "jane[at]example.edu");
        assert_eq!(record.address, "# 2104, Faculty Block 2");
        assert_eq!(record.biography.as_deref(), Some("Jane works onsystems."));
        assert_eq!(record.specialization, "Distributed Systems, Cloud Computing");
        assert_eq!(
            record.teaching,
            vec!["Operating Systems".to_string(), "Distributed Computing".to_string()]
        );
        assert_eq!(record.publications.len(), 2);
        assert_eq!(record.publications[1], "J. Doe, Gossip revisited, 2019");
        assert_eq!(record.profile_url, "https://www.example.edu/jane-doe");
        assert_eq!(
            record.source_listing_url,
            "https://www.example.edu/distinguished-professor"
        );
    }

    #[test]
    fn test_empty_page_yields_empty_fields_and_absent_biography() {
        let record = parse_profile_page("<html><body></body></html>", &stub()).unwrap();

        assert_eq!(record.name, "");
        assert_eq!(record.education, "");
        assert_eq!(record.specialization, "");
        assert_eq!(record.biography, None);
        assert!(record.publications.is_empty());
        assert!(record.teaching.is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let mut record = parse_profile_page("", &stub()).unwrap();
        let err = assign(&mut record, ProfileField::Teaching, Located::Text("x".into())).unwrap_err();
        assert_eq!(err, ExtractError::UnexpectedShape { field: ProfileField::Teaching });
    }
}
