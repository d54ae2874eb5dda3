use std::fmt;

use web_sys::window;

/// Short token naming the page being viewed, e.g. `about` for `/about.html`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const INDEX: &str = "index";

/// Page identifier for a location path. Recomputed on every call.
pub fn current_page(path: &str) -> PageId {
    PageId(page_token(path))
}

/// Page identifier for the window's current location, `index` when the
/// location can't be read.
pub fn current_page_from_window() -> PageId {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    current_page(&path)
}

fn page_token(reference: &str) -> String {
    let segment = reference.rsplit('/').next().unwrap_or_default();
    let segment = urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    let token = segment.strip_suffix(".html").unwrap_or(segment.as_str());
    if token.is_empty() {
        INDEX.to_string()
    } else {
        token.to_string()
    }
}

/// Whether a nav link target refers to `page`. `index.html` and the bare
/// root both resolve to `index`.
pub fn is_active(href: &str, page: &PageId) -> bool {
    href == page.as_str()
        || (page.as_str() == INDEX && href == "index.html")
        || page_token(href) == page.as_str()
}

/// Active flag for each link, in link order.
pub fn apply_highlight<'a>(hrefs: impl IntoIterator<Item = &'a str>, page: &PageId) -> Vec<bool> {
    hrefs.into_iter().map(|href| is_active(href, page)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_html_suffix_from_last_segment() {
        assert_eq!(current_page("/about.html").as_str(), "about");
        assert_eq!(current_page("/site/services.html").as_str(), "services");
        assert_eq!(current_page("contact").as_str(), "contact");
    }

    #[test]
    fn empty_segment_is_index() {
        assert_eq!(current_page("/").as_str(), "index");
        assert_eq!(current_page("").as_str(), "index");
        assert_eq!(current_page("/docs/").as_str(), "index");
        assert_eq!(current_page("/index.html").as_str(), "index");
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(current_page("/our%20team.html").as_str(), "our team");
    }

    #[test]
    fn index_html_matches_index() {
        let page = current_page("/");
        assert!(is_active("index.html", &page));
        assert!(!is_active("about.html", &page));
    }

    #[test]
    fn highlights_exactly_the_matching_link() {
        let page = current_page("/faq.html");
        let hrefs = ["index.html", "about.html", "services.html", "faq.html", "contact.html"];
        assert_eq!(
            apply_highlight(hrefs, &page),
            vec![false, false, false, true, false]
        );
        // Same input, same answer
        assert_eq!(apply_highlight(hrefs, &page), apply_highlight(hrefs, &page));
    }

    #[test]
    fn links_to_the_same_page_are_both_active() {
        let page = current_page("/contact.html");
        assert_eq!(
            apply_highlight(["contact.html", "contact", "about.html"], &page),
            vec![true, true, false]
        );
    }
}
