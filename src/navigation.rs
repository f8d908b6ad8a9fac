use crate::sections::SectionKey;

/// Top-level page selector, independent of scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Projects,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Section(SectionKey),
    Top,
}

/// A scroll the view should perform once the current page has rendered.
/// `seq` changes on every request so repeating the same target still fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub seq: u32,
    pub target: ScrollTarget,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub page: Page,
    pub menu_open: bool,
    pub scroll: Option<ScrollRequest>,
    seq: u32,
}

impl NavState {
    /// `Projects` switches to the listing page; any other key shows the
    /// home view and asks for a scroll to that section.
    pub fn navigate_to(&self, key: SectionKey) -> Self {
        match key {
            SectionKey::Projects => self.go_to_projects(),
            section => self.with_request(Page::Home, ScrollTarget::Section(section)),
        }
    }

    pub fn go_to_projects(&self) -> Self {
        self.with_request(Page::Projects, ScrollTarget::Top)
    }

    pub fn toggle_menu(&self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self.clone()
        }
    }

    pub fn close_menu(&self) -> Self {
        Self {
            menu_open: false,
            ..self.clone()
        }
    }

    fn with_request(&self, page: Page, target: ScrollTarget) -> Self {
        let seq = self.seq.wrapping_add(1);
        Self {
            page,
            menu_open: false,
            scroll: Some(ScrollRequest { seq, target }),
            seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_with_menu_closed() {
        let state = NavState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert!(state.scroll.is_none());
    }

    #[test]
    fn projects_key_always_selects_projects_page() {
        let home = NavState::default();
        let from_projects = home.go_to_projects();
        for start in [home, from_projects] {
            assert_eq!(start.navigate_to(SectionKey::Projects).page, Page::Projects);
        }
    }

    #[test]
    fn section_keys_select_home_and_request_scroll() {
        let state = NavState::default()
            .go_to_projects()
            .navigate_to(SectionKey::Contact);
        assert_eq!(state.page, Page::Home);
        assert_eq!(
            state.scroll.map(|r| r.target),
            Some(ScrollTarget::Section(SectionKey::Contact))
        );
    }

    #[test]
    fn go_to_projects_requests_scroll_to_top() {
        let state = NavState::default().go_to_projects();
        assert_eq!(state.page, Page::Projects);
        assert_eq!(state.scroll.map(|r| r.target), Some(ScrollTarget::Top));
    }

    #[test]
    fn every_sequence_lands_on_a_defined_page() {
        let mut state = NavState::default();
        for (step, key) in SectionKey::ALL.iter().cycle().take(40).enumerate() {
            state = if step % 7 == 3 {
                state.go_to_projects()
            } else {
                state.navigate_to(*key)
            };
            let expected = if step % 7 == 3 || *key == SectionKey::Projects {
                Page::Projects
            } else {
                Page::Home
            };
            assert_eq!(state.page, expected);
        }
    }

    #[test]
    fn repeated_target_gets_fresh_request() {
        let first = NavState::default().navigate_to(SectionKey::Services);
        let second = first.navigate_to(SectionKey::Services);
        assert_ne!(first.scroll, second.scroll);
        assert_eq!(first.scroll.map(|r| r.target), second.scroll.map(|r| r.target));
    }

    #[test]
    fn navigation_collapses_menu() {
        let open = NavState::default().toggle_menu();
        assert!(open.menu_open);
        assert!(!open.navigate_to(SectionKey::Services).menu_open);
        assert!(!open.toggle_menu().go_to_projects().menu_open);
        assert!(!open.go_to_projects().menu_open);
    }

    #[test]
    fn menu_toggle_keeps_page() {
        let state = NavState::default().go_to_projects().toggle_menu();
        assert_eq!(state.page, Page::Projects);
        assert!(!state.close_menu().menu_open);
    }
}
