use crate::rules::HighlightRules;

/// Anything that looks like an anchor in a nav bar. In the browser this is a DOM element; in
/// tests and the cli it's a `StaticNavLink`.
pub trait NavLinkHandle {
    /// The link's `href` attribute, verbatim. `None` if the anchor doesn't have one.
    fn target_path(&self) -> Option<String>;

    /// Add `marker` to the link's classes. Adding a class that's already there must be a no-op,
    /// since the highlighter may run more than once against the same page.
    fn mark_active(&mut self, marker: &str);
}

impl<'a, L: NavLinkHandle + ?Sized> NavLinkHandle for &'a mut L {
    fn target_path(&self) -> Option<String> {
        (**self).target_path()
    }

    fn mark_active(&mut self, marker: &str) {
        (**self).mark_active(marker)
    }
}

/// Mark the link for `current_path` as live, using the stock rules. See `HighlightRules::apply`.
pub fn highlight_active_nav<L: NavLinkHandle>(links: &mut [L], current_path: &str) -> Option<usize> {
    HighlightRules::stock().apply(links, current_path)
}
