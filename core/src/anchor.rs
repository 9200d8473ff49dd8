#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// The bare `#` placeholder link.
    Bare,
    /// An in-page fragment, kept with its leading `#` so it doubles as an id
    /// selector.
    Fragment(&'a str),
    /// Anything that does not start with `#`.
    Foreign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click alone; no lookup is attempted.
    Ignore,
    /// Cancel the navigation and smooth-scroll the target to the top.
    SmoothScroll,
    /// No target; let the browser do its default navigation.
    PassThrough,
}

pub fn classify_href(href: &str) -> AnchorHref<'_> {
    if href == "#" {
        AnchorHref::Bare
    } else if href.starts_with('#') {
        AnchorHref::Fragment(href)
    } else {
        AnchorHref::Foreign
    }
}

/// `target_exists` is only consulted for fragments; the DOM lookup is skipped
/// entirely for bare and foreign hrefs.
pub fn decide<F>(href: &str, target_exists: F) -> AnchorAction
where
    F: FnOnce(&str) -> bool,
{
    match classify_href(href) {
        AnchorHref::Bare | AnchorHref::Foreign => AnchorAction::Ignore,
        AnchorHref::Fragment(selector) => {
            if target_exists(selector) {
                AnchorAction::SmoothScroll
            } else {
                AnchorAction::PassThrough
            }
        }
    }
}
