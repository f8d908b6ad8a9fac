/// Named destinations of the site. Every key except `Projects` is an
/// anchorable region of the home view; `Projects` is the listing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Hero,
    Services,
    Philosophy,
    Showcase,
    Testimonials,
    Contact,
    Projects,
}

impl SectionKey {
    /// Registry order, which is also the order of the home view.
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Hero,
        SectionKey::Services,
        SectionKey::Philosophy,
        SectionKey::Showcase,
        SectionKey::Testimonials,
        SectionKey::Contact,
        SectionKey::Projects,
    ];

    /// Targets shown in the header navigation.
    pub const NAV: [SectionKey; 5] = [
        SectionKey::Services,
        SectionKey::Philosophy,
        SectionKey::Projects,
        SectionKey::Testimonials,
        SectionKey::Contact,
    ];

    /// Stable key, used as the element id of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Services => "services",
            SectionKey::Philosophy => "philosophy",
            SectionKey::Showcase => "showcase",
            SectionKey::Testimonials => "testimonials",
            SectionKey::Contact => "contact",
            SectionKey::Projects => "projects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Hero => "Home",
            SectionKey::Services => "Services",
            SectionKey::Philosophy => "Approach",
            SectionKey::Showcase => "Selected Work",
            SectionKey::Testimonials => "Clients",
            SectionKey::Contact => "Contact",
            SectionKey::Projects => "Projects",
        }
    }

    pub fn is_anchor(self) -> bool {
        self != SectionKey::Projects
    }

    pub fn from_key(key: &str) -> Option<SectionKey> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(key))
    }

    /// Resolves a URL fragment such as `#services` to an in-page section.
    /// `#projects` lands on the showcase, the home view's share of the work.
    pub fn from_fragment(fragment: &str) -> Option<SectionKey> {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        if raw.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(raw).ok()?;
        let section = Self::from_key(decoded.trim())?;
        if section.is_anchor() {
            Some(section)
        } else {
            Some(SectionKey::Showcase)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = SectionKey::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(keys.len(), SectionKey::ALL.len());
    }

    #[test]
    fn key_round_trips() {
        for section in SectionKey::ALL {
            assert_eq!(SectionKey::from_key(section.as_str()), Some(section));
        }
    }

    #[test]
    fn fragment_resolves_anchor_sections() {
        assert_eq!(SectionKey::from_fragment("#services"), Some(SectionKey::Services));
        assert_eq!(SectionKey::from_fragment("contact"), Some(SectionKey::Contact));
        assert_eq!(SectionKey::from_fragment("#Philosophy"), Some(SectionKey::Philosophy));
        assert_eq!(SectionKey::from_fragment("#%20showcase"), Some(SectionKey::Showcase));
    }

    #[test]
    fn fragment_ignores_unknown() {
        assert_eq!(SectionKey::from_fragment(""), None);
        assert_eq!(SectionKey::from_fragment("#"), None);
        assert_eq!(SectionKey::from_fragment("#pricing"), None);
    }

    #[test]
    fn projects_fragment_lands_on_showcase() {
        assert_eq!(SectionKey::from_fragment("#projects"), Some(SectionKey::Showcase));
        assert_eq!(SectionKey::from_fragment("#Projects"), Some(SectionKey::Showcase));
        let resolved = SectionKey::from_fragment("#projects").unwrap();
        assert!(resolved.is_anchor());
    }

    #[test]
    fn nav_targets_are_registered() {
        for section in SectionKey::NAV {
            assert!(SectionKey::ALL.contains(&section));
        }
    }
}
