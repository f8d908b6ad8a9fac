use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::{Catalog, ContentRecord};
use crate::modal::{ClickOrigin, ModalKind, ModalState};
use crate::navigation::NavState;
use crate::sections::SectionKey;

/// Every user-driven change to the site state.
#[derive(Clone, Debug)]
pub enum SiteAction {
    NavigateTo(SectionKey),
    GoToProjects,
    ToggleMenu,
    CloseMenu,
    OpenModal(ModalKind, Rc<ContentRecord>),
    CloseModal,
    ModalClick(ClickOrigin),
}

/// UI state owned by the app root and handed down through context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub nav: NavState,
    pub modal: ModalState,
}

impl SiteState {
    pub fn apply(&self, action: SiteAction) -> Self {
        debug!("Applying {:?}", action);
        match action {
            SiteAction::NavigateTo(key) => Self {
                nav: self.nav.navigate_to(key),
                ..self.clone()
            },
            SiteAction::GoToProjects => Self {
                nav: self.nav.go_to_projects(),
                ..self.clone()
            },
            SiteAction::ToggleMenu => Self {
                nav: self.nav.toggle_menu(),
                ..self.clone()
            },
            SiteAction::CloseMenu => Self {
                nav: self.nav.close_menu(),
                ..self.clone()
            },
            SiteAction::OpenModal(kind, payload) => Self {
                modal: self.modal.open(kind, payload),
                ..self.clone()
            },
            SiteAction::CloseModal => Self {
                modal: self.modal.close(),
                ..self.clone()
            },
            SiteAction::ModalClick(origin) => Self {
                modal: self.modal.click(origin),
                ..self.clone()
            },
        }
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub type SiteContext = UseReducerHandle<SiteState>;

#[hook]
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext provider is missing")
}

#[hook]
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Page;

    fn record(title: &str) -> Rc<ContentRecord> {
        Rc::new(ContentRecord {
            id: 1,
            title: title.to_string(),
            description: String::new(),
            tags: Vec::new(),
            image: None,
            link: None,
        })
    }

    #[test]
    fn navigation_leaves_modal_alone() {
        let state = SiteState::default()
            .apply(SiteAction::OpenModal(ModalKind::Service, record("Design Systems")))
            .apply(SiteAction::NavigateTo(SectionKey::Contact));
        assert!(state.modal.is_open());
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn modal_actions_leave_page_alone() {
        let state = SiteState::default()
            .apply(SiteAction::GoToProjects)
            .apply(SiteAction::OpenModal(ModalKind::ProjectDescription, record("Fieldnote")))
            .apply(SiteAction::CloseModal)
            .apply(SiteAction::CloseModal);
        assert_eq!(state.nav.page, Page::Projects);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn menu_closes_after_navigation() {
        let state = SiteState::default()
            .apply(SiteAction::ToggleMenu)
            .apply(SiteAction::NavigateTo(SectionKey::Services));
        assert!(!state.nav.menu_open);
    }

    #[test]
    fn reduce_produces_new_value() {
        let before = Rc::new(SiteState::default());
        let after = before.clone().reduce(SiteAction::GoToProjects);
        assert_eq!(before.nav.page, Page::Home);
        assert_eq!(after.nav.page, Page::Projects);
    }

    #[test]
    fn clicks_inside_dialog_do_not_close_it() {
        let state = SiteState::default()
            .apply(SiteAction::OpenModal(ModalKind::Service, record("Product Design")))
            .apply(SiteAction::ModalClick(ClickOrigin::Content));
        assert!(state.modal.is_open());

        let state = state.apply(SiteAction::ModalClick(ClickOrigin::Backdrop));
        assert!(!state.modal.is_open());
    }
}
