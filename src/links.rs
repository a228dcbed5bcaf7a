use std::collections::BTreeSet;
use std::fmt;

use crate::nav::NavLinkHandle;

/// A nav link that lives in memory rather than in a document.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StaticNavLink {
    href: Option<String>,
    classes: BTreeSet<String>,
}

impl StaticNavLink {
    pub fn new<S: Into<String>>(href: S) -> StaticNavLink {
        StaticNavLink {
            href: Some(href.into()),
            classes: BTreeSet::new(),
        }
    }

    /// An anchor with no `href` attribute at all, as opposed to an empty one.
    pub fn without_href() -> StaticNavLink {
        Default::default()
    }

    pub fn from_hrefs(hrefs: &[&str]) -> Vec<StaticNavLink> {
        hrefs.iter().map(|h| StaticNavLink::new(*h)).collect()
    }

    pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_ref().map(|h| &h[..])
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl NavLinkHandle for StaticNavLink {
    fn target_path(&self) -> Option<String> {
        self.href.clone()
    }

    fn mark_active(&mut self, marker: &str) {
        self.classes.insert(marker.to_string());
    }
}

impl fmt::Display for StaticNavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.href {
            Some(ref href) => write!(f, "{}", href)?,
            None => write!(f, "(no href)")?,
        }
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes.iter().map(|c| &c[..]).collect();
            write!(f, " [{}]", classes.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_is_a_set_add() {
        let mut link = StaticNavLink::new("/");
        link.mark_active("live");
        link.mark_active("live");
        assert_eq!(link.classes().len(), 1);
        assert!(link.has_class("live"));
    }

    #[test]
    fn test_missing_and_empty_href_differ() {
        assert_eq!(StaticNavLink::without_href().target_path(), None);
        assert_eq!(StaticNavLink::new("").target_path(), Some("".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(StaticNavLink::new("/players").to_string(), "/players");
        assert_eq!(StaticNavLink::without_href().to_string(), "(no href)");
        let link = StaticNavLink::new("/").with_class("live").with_class("brand");
        assert_eq!(link.to_string(), "/ [brand live]");
    }
}
