//! Field locators for profile pages.
//!
//! Where each field lives on the page is data ([`PROFILE_LOCATORS`]); how a
//! locator strategy walks the DOM is [`Locator::locate`]. The two can be
//! tested separately, and a site redesign only touches the table.

use scraper::{ElementRef, Html, Selector};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    InvalidSelector { selector: String, reason: String },
    UnexpectedShape { field: ProfileField },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidSelector { selector, reason } => {
                write!(f, "invalid selector '{}': {}", selector, reason)
            }
            ExtractError::UnexpectedShape { field } => {
                write!(f, "locator for '{}' produced the wrong kind of value", field)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Fields read off a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Education,
    Phone,
    Email,
    Address,
    Biography,
    Specialization,
    Publications,
    Teaching,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileField::Name => "name",
            ProfileField::Education => "education",
            ProfileField::Phone => "phone",
            ProfileField::Email => "email",
            ProfileField::Address => "address",
            ProfileField::Biography => "biography",
            ProfileField::Specialization => "specialization",
            ProfileField::Publications => "publications",
            ProfileField::Teaching => "teaching",
        };
        f.write_str(name)
    }
}

/// How to find one field in a parsed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Stripped text of the first match, or "" when nothing matches
    Text(&'static str),
    /// Stripped text of the first match, or `None` when nothing matches
    OptionalText(&'static str),
    /// `h2` with this exact text → nearest ancestor `div.container` → its
    /// next sibling `div.section`; fragments joined with single spaces
    HeadingSection {
        heading: &'static str,
        container: &'static str,
        section: &'static str,
    },
    /// `h2` with this exact text → next `ul.list_class` in document order →
    /// stripped text of each direct `li`
    HeadingList {
        heading: &'static str,
        list_class: &'static str,
    },
    /// Every trimmed text fragment under the first match, one entry each
    Fragments(&'static str),
}

/// What a locator found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Text(String),
    Optional(Option<String>),
    List(Vec<String>),
}

pub const PROFILE_LOCATORS: &[(ProfileField, Locator)] = &[
    (ProfileField::Name, Locator::Text(".field--name-field-faculty-names")),
    (ProfileField::Education, Locator::Text(".field--name-field-faculty-name")),
    (ProfileField::Phone, Locator::Text(".field--name-field-contact-no")),
    (ProfileField::Email, Locator::Text(".field--name-field-email .field__item")),
    (ProfileField::Address, Locator::Text(".field--name-field-address")),
    (ProfileField::Biography, Locator::OptionalText(".field--name-field-biography")),
    (
        ProfileField::Specialization,
        Locator::HeadingSection {
            heading: "Specialization",
            container: "specializationIcon",
            section: "work-exp",
        },
    ),
    (
        ProfileField::Publications,
        Locator::HeadingList {
            heading: "Publications",
            list_class: "bulletText",
        },
    ),
    (ProfileField::Teaching, Locator::Fragments(".field--name-field-teaching")),
];

impl Locator {
    pub fn locate(&self, document: &Html) -> Result<Located, ExtractError> {
        match *self {
            Locator::Text(selector) => {
                let found = first_match(document, selector)?;
                Ok(Located::Text(found.map(stripped_text).unwrap_or_default()))
            }
            Locator::OptionalText(selector) => {
                let found = first_match(document, selector)?;
                Ok(Located::Optional(found.map(stripped_text)))
            }
            Locator::HeadingSection {
                heading,
                container,
                section,
            } => {
                let text = find_heading(document, heading)?
                    .and_then(|h2| {
                        h2.ancestors()
                            .filter_map(ElementRef::wrap)
                            .find(|el| is_tag_with_class(el, "div", container))
                    })
                    .and_then(|parent| {
                        parent
                            .next_siblings()
                            .filter_map(ElementRef::wrap)
                            .find(|el| is_tag_with_class(el, "div", section))
                    })
                    .map(|el| fragments(el).collect::<Vec<_>>().join(" "))
                    .unwrap_or_default();
                Ok(Located::Text(text))
            }
            Locator::HeadingList {
                heading,
                list_class,
            } => {
                let items = find_heading(document, heading)?
                    .and_then(|h2| {
                        next_in_document(document, h2, |el| is_tag_with_class(el, "ul", list_class))
                    })
                    .map(|ul| {
                        ul.children()
                            .filter_map(ElementRef::wrap)
                            .filter(|el| el.value().name() == "li")
                            .map(stripped_text)
                            .filter(|text| !text.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(Located::List(items))
            }
            Locator::Fragments(selector) => {
                let items = first_match(document, selector)?
                    .map(|el| fragments(el).map(str::to_string).collect())
                    .unwrap_or_default();
                Ok(Located::List(items))
            }
        }
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let selector = parse_selector(selector)?;
    Ok(document.select(&selector).next())
}

/// Non-empty trimmed text fragments in document order
pub(crate) fn fragments<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.text().map(str::trim).filter(|text| !text.is_empty())
}

/// Trimmed fragments concatenated without separators
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    fragments(element).collect()
}

fn is_tag_with_class(element: &ElementRef<'_>, tag: &str, class: &str) -> bool {
    element.value().name() == tag && element.value().classes().any(|c| c == class)
}

/// First `h2` whose stripped text equals `heading`
fn find_heading<'a>(document: &'a Html, heading: &str) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let h2 = parse_selector("h2")?;
    Ok(document.select(&h2).find(|el| stripped_text(*el) == heading))
}

/// First element after `anchor` in document order that satisfies `predicate`
fn next_in_document<'a, F>(document: &'a Html, anchor: ElementRef<'a>, predicate: F) -> Option<ElementRef<'a>>
where
    F: Fn(&ElementRef<'a>) -> bool,
{
    let anchor_id = (*anchor).id();
    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != anchor_id)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| predicate(el))
}
