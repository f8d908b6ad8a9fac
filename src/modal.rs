use std::rc::Rc;

use crate::content::ContentRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Service,
    Text,
    ProjectDescription,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalEntry {
    pub kind: ModalKind,
    pub payload: Rc<ContentRecord>,
}

/// Where a click inside the overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Content,
    CloseButton,
}

impl ClickOrigin {
    pub fn closes_modal(self) -> bool {
        self != ClickOrigin::Content
    }
}

/// The single overlay slot. Opening while open replaces the entry; there is
/// no stacking.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalEntry),
}

impl ModalState {
    pub fn open(&self, kind: ModalKind, payload: Rc<ContentRecord>) -> Self {
        ModalState::Open(ModalEntry { kind, payload })
    }

    pub fn close(&self) -> Self {
        ModalState::Closed
    }

    pub fn click(&self, origin: ClickOrigin) -> Self {
        if origin.closes_modal() {
            self.close()
        } else {
            self.clone()
        }
    }

    pub fn entry(&self) -> Option<&ModalEntry> {
        match self {
            ModalState::Open(entry) => Some(entry),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.entry().is_some()
    }
}
