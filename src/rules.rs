use std::fs::File;
use std::io::Read;
use std::path::Path;

use failure::Error;

use crate::nav::NavLinkHandle;

/// The class we add to the link for the page we're on. The site's stylesheet keys off this.
pub const LIVE_MARKER: &str = "live";

/// Where the anchors we care about live in the document.
pub const NAV_SELECTOR: &str = "nav a";

lazy_static! {
    static ref DEFAULT_RULES: HighlightRules = HighlightRules::default();
}

/// Everything about how a page's nav bar gets highlighted that isn't the matching loop itself.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct HighlightRules {
    pub marker: String,
    pub selector: String,
    pub fallback_enabled: bool,
    pub fallback: FallbackRule,
}

/// Pages with no link of their own still light up a parent section. A player's detail page lives
/// under a path containing `view`, and there's no nav entry for it, so we light up `/players`
/// instead.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct FallbackRule {
    pub path_contains: String,
    pub href: String,
}

impl Default for FallbackRule {
    fn default() -> FallbackRule {
        FallbackRule {
            path_contains: "view".to_string(),
            href: "/players".to_string(),
        }
    }
}

impl FallbackRule {
    pub fn matches(&self, href: Option<&str>, current_path: &str) -> bool {
        current_path.contains(&self.path_contains[..]) && href == Some(&self.href[..])
    }
}

impl Default for HighlightRules {
    fn default() -> HighlightRules {
        HighlightRules {
            marker: LIVE_MARKER.to_string(),
            selector: NAV_SELECTOR.to_string(),
            fallback_enabled: true,
            fallback: FallbackRule::default(),
        }
    }
}

impl HighlightRules {
    /// The stock rules, shared rather than rebuilt on every page load.
    pub fn stock() -> &'static HighlightRules {
        &DEFAULT_RULES
    }

    pub fn without_fallback() -> HighlightRules {
        HighlightRules {
            fallback_enabled: false,
            ..Default::default()
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<HighlightRules, Error> {
        let mut fh = File::open(path.as_ref())?;
        let mut contents = String::new();
        fh.read_to_string(&mut contents)?;

        HighlightRules::from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(body: &str) -> Result<HighlightRules, Error> {
        let rules: HighlightRules = match toml::from_str(body) {
            Ok(rules) => rules,
            Err(e) => return Err(format_err!("Couldn't parse rules: {}", e)),
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Refuse markers that a browser's `classList.add` would throw on.
    pub fn validate(&self) -> Result<(), Error> {
        if self.marker.is_empty() {
            bail!("marker must not be empty");
        }
        if self.marker.chars().any(char::is_whitespace) {
            bail!("marker {:?} must be a single class token", self.marker);
        }
        Ok(())
    }

    /// Walk `links` in document order and mark the first one that belongs to `current_path`.
    ///
    /// A link belongs to the page if its href is exactly the current path. Failing that, and only
    /// for that same link, the fallback gets a look in. The first link either rule accepts is
    /// marked and we stop there, so at most one link is ever live. Returns the index of the
    /// marked link, if any.
    pub fn apply<L: NavLinkHandle>(&self, links: &mut [L], current_path: &str) -> Option<usize> {
        for (idx, link) in links.iter_mut().enumerate() {
            let href = link.target_path();
            let href = href.as_ref().map(|h| &h[..]);

            if href == Some(current_path) {
                debug!("{:?} is the current page", current_path);
                link.mark_active(&self.marker);
                return Some(idx);
            }

            if self.fallback_enabled && self.fallback.matches(href, current_path) {
                debug!(
                    "{:?} has no link of its own, falling back to {:?}",
                    current_path, self.fallback.href
                );
                link.mark_active(&self.marker);
                return Some(idx);
            }
        }

        trace!("Nothing in the nav matches {:?}", current_path);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::StaticNavLink;
    use std::io::Write;

    #[test]
    fn test_defaults_are_the_site_constants() {
        let rules = HighlightRules::default();
        assert_eq!(rules.marker, "live");
        assert_eq!(rules.selector, "nav a");
        assert!(rules.fallback_enabled);
        assert_eq!(rules.fallback.path_contains, "view");
        assert_eq!(rules.fallback.href, "/players");
        assert_eq!(HighlightRules::stock(), &rules);
    }

    #[test]
    fn test_empty_file_is_the_defaults() {
        assert_eq!(HighlightRules::from_str("").unwrap(), HighlightRules::default());
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let rules = HighlightRules::from_str(
            r#"
marker = "current"

[fallback]
href = "/tournaments"
"#,
        )
        .unwrap();

        assert_eq!(rules.marker, "current");
        assert_eq!(rules.selector, "nav a");
        assert_eq!(rules.fallback.path_contains, "view");
        assert_eq!(rules.fallback.href, "/tournaments");
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let rules = HighlightRules::from_str("fallback_enabled = false").unwrap();
        assert_eq!(rules, HighlightRules::without_fallback());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = HighlightRules::from_str("marker = [").unwrap_err();
        assert!(format!("{}", err).starts_with("Couldn't parse rules"));
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        assert!(HighlightRules::from_str(r#"marker = """#).is_err());
        assert!(HighlightRules::from_str(r#"marker = "two words""#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut fh = tempfile::NamedTempFile::new().unwrap();
        writeln!(fh, r#"selector = "header nav a""#).unwrap();

        let rules = HighlightRules::from_file(fh.path()).unwrap();
        assert_eq!(rules.selector, "header nav a");
        assert_eq!(rules.marker, "live");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HighlightRules::from_file(dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_fallback_matching() {
        let fallback = FallbackRule::default();
        assert!(fallback.matches(Some("/players"), "/player/view/3"));
        assert!(!fallback.matches(Some("/players"), "/players/help"));
        assert!(!fallback.matches(Some("/"), "/player/view/3"));
        assert!(!fallback.matches(None, "/player/view/3"));
        assert!(!fallback.matches(Some("/players"), ""));
    }

    #[test]
    fn test_custom_marker_is_applied() {
        let rules = HighlightRules::from_str(r#"marker = "current""#).unwrap();
        let mut links = StaticNavLink::from_hrefs(&["/", "/about"]);

        assert_eq!(rules.apply(&mut links, "/about"), Some(1));
        assert!(links[1].has_class("current"));
        assert!(!links[1].has_class("live"));
    }

    #[test]
    fn test_disabled_fallback_never_fires() {
        let mut links = StaticNavLink::from_hrefs(&["/", "/players"]);

        assert_eq!(HighlightRules::without_fallback().apply(&mut links, "/view/42"), None);
        assert!(links.iter().all(|l| l.classes().is_empty()));
    }
}
