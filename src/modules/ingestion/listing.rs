//! Listing pages: one stub per faculty card.

use scraper::Html;
use url::Url;

use super::locator::{parse_selector, stripped_text, ExtractError};
use crate::domain::{FacultyType, ListingStub};

const CARD_SELECTOR: &str = "div.facultyInformation > ul > li";
const LINK_SELECTOR: &str = "h3 a";

/// Collect the faculty cards of one listing page.
///
/// Best-effort: cards without a link or href are skipped, and a parse failure
/// is logged and returns whatever was collected so far.
pub fn parse_listing_page(html: &str, listing_url: &str, faculty_type: FacultyType) -> Vec<ListingStub> {
    let mut stubs = Vec::new();
    if let Err(e) = collect_cards(html, listing_url, faculty_type, &mut stubs) {
        tracing::error!("Error parsing listing page {}: {}", listing_url, e);
    }
    stubs
}

fn collect_cards(
    html: &str,
    listing_url: &str,
    faculty_type: FacultyType,
    stubs: &mut Vec<ListingStub>,
) -> Result<(), ExtractError> {
    let document = Html::parse_document(html);
    let cards = parse_selector(CARD_SELECTOR)?;
    let link = parse_selector(LINK_SELECTOR)?;
    let base = Url::parse(listing_url).ok();

    for card in document.select(&cards) {
        let Some(anchor) = card.select(&link).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href").map(str::trim).filter(|h| !h.is_empty()) else {
            continue;
        };

        stubs.push(ListingStub {
            name: stripped_text(anchor),
            profile_url: absolute_url(base.as_ref(), href),
            faculty_type,
            source_listing_url: listing_url.to_string(),
        });
    }

    tracing::debug!("Found {} faculty cards on {}", stubs.len(), listing_url);
    Ok(())
}

/// Resolve `href` against the listing URL; keep it verbatim if that fails.
fn absolute_url(base: Option<&Url>, href: &str) -> String {
    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        _ => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "https://www.example.edu/faculty";

    #[test]
    fn test_card_without_href_is_skipped() {
        let html = r#"
            <div class="facultyInformation"><ul>
              <li><h3><a href="https://www.example.edu/jane-doe"> Jane Doe </a></h3></li>
              <li><h3><a>No Link</a></h3></li>
            </ul></div>"#;
        let stubs = parse_listing_page(html, LISTING, FacultyType::Core);
        assert_eq!(
            stubs,
            vec![ListingStub {
                name: "Jane Doe".into(),
                profile_url: "https://www.example.edu/jane-doe".into(),
                faculty_type: FacultyType::Core,
                source_listing_url: LISTING.into(),
            }]
        );
    }

    #[test]
    fn test_cards_without_links_and_outside_path_are_ignored() {
        let html = r#"
            <ul><li><h3><a href="/stray">Stray</a></h3></li></ul>
            <div class="facultyInformation"><ul>
              <li><h3>Nobody</h3></li>
              <li><h3><a href=" /people/b ">B</a></h3></li>
              <li><h3><a href="">Empty</a></h3></li>
              <li><h3><a href="https://other.example.org/c">C</a></h3></li>
            </ul></div>"#;
        let stubs = parse_listing_page(html, LISTING, FacultyType::Adjunct);
        let urls: Vec<_> = stubs.iter().map(|s| s.profile_url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://www.example.edu/people/b", "https://other.example.org/c"]
        );
        assert!(stubs.iter().all(|s| s.faculty_type == FacultyType::Adjunct));
    }

    #[test]
    fn test_garbage_markup_yields_nothing() {
        assert!(parse_listing_page("<<<not html", LISTING, FacultyType::Core).is_empty());
        assert!(parse_listing_page("", "not a url", FacultyType::Core).is_empty());
    }

    #[test]
    fn test_relative_href_kept_when_base_is_unusable() {
        let html = r#"<div class="facultyInformation"><ul>
            <li><h3><a href="/people/x">X</a></h3></li></ul></div>"#;
        let stubs = parse_listing_page(html, "listing", FacultyType::Practice);
        assert_eq!(stubs[0].profile_url, "/people/x");
    }

    #[test]
    fn test_whitespace_only_href_is_skipped() {
        let html = r#"<div class="facultyInformation"><ul>
            <li><h3><a href="   ">Blank</a></h3></li>
            <li><h3><a href="
            ">Newline</a></h3></li></ul></div>"#;
        assert!(parse_listing_page(html, LISTING, FacultyType::Core).is_empty());
    }
}
