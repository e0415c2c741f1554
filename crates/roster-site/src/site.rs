//! Named UI actions and the page state they act on.
//!
//! The host page translates browser events into [`UiAction`] values and
//! applies the returned [`Effect`]s. Handlers never touch the document
//! themselves.

use tracing::trace;

use roster_directory::MemberBuilder;

use crate::counter::CounterBoard;
use crate::drawer::{DomEffect, Drawer, DrawerElements};
use crate::page::DirectoryPage;

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    OpenMenu,
    CloseMenu,
    OverlayClicked,
    Escape,
    /// Text typed in the search box.
    SearchInput(String),
    /// New value of the role select; empty for every role.
    RoleChanged(String),
    /// A card was activated; carries its `data-id`.
    OpenMember(String),
    CloseModal,
    CounterVisible {
        index: usize,
        ratio: f64,
        now_ms: f64,
    },
    AnimationFrame {
        now_ms: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dom(DomEffect),
    /// The grid and status line must be redrawn.
    RenderDirectory,
    ShowModal,
    HideModal,
    CounterText { index: usize, text: String },
    /// Another animation frame is needed.
    RequestFrame,
}

/// Everything interactive on one page.
///
/// Pages without a member directory carry `None` and ignore directory
/// actions.
#[derive(Debug)]
pub struct Site {
    drawer: Drawer,
    counters: CounterBoard,
    directory: Option<DirectoryPage>,
}

impl Site {
    pub fn new(elements: DrawerElements, counters: CounterBoard) -> Self {
        Self {
            drawer: Drawer::new(elements),
            counters,
            directory: None,
        }
    }

    pub fn with_directory(mut self, builder: MemberBuilder) -> Self {
        self.directory = Some(DirectoryPage::new(builder));
        self
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    pub fn directory(&self) -> Option<&DirectoryPage> {
        self.directory.as_ref()
    }

    pub fn directory_mut(&mut self) -> Option<&mut DirectoryPage> {
        self.directory.as_mut()
    }

    pub fn handle(&mut self, action: UiAction) -> Vec<Effect> {
        trace!(?action, "ui action");
        match action {
            UiAction::OpenMenu => dom(self.drawer.open()),
            UiAction::CloseMenu | UiAction::OverlayClicked => dom(self.drawer.close()),
            UiAction::Escape => self.escape(),
            UiAction::SearchInput(text) => self.with_page(|page| {
                page.set_search(text);
                vec![Effect::RenderDirectory]
            }),
            UiAction::RoleChanged(role) => self.with_page(|page| {
                page.set_role(role);
                vec![Effect::RenderDirectory]
            }),
            UiAction::OpenMember(id) => self.with_page(|page| {
                if page.open_member(&id) {
                    vec![Effect::ShowModal]
                } else {
                    Vec::new()
                }
            }),
            UiAction::CloseModal => self.with_page(close_modal),
            UiAction::CounterVisible {
                index,
                ratio,
                now_ms,
            } => {
                if self.counters.on_intersection(index, ratio, now_ms) {
                    vec![Effect::RequestFrame]
                } else {
                    Vec::new()
                }
            }
            UiAction::AnimationFrame { now_ms } => self.frame(now_ms),
        }
    }

    /// An open modal takes Escape before the drawer does.
    fn escape(&mut self) -> Vec<Effect> {
        let closed = self.with_page(close_modal);
        if !closed.is_empty() {
            return closed;
        }
        dom(self.drawer.escape())
    }

    fn frame(&mut self, now_ms: f64) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .counters
            .frame(now_ms)
            .into_iter()
            .map(|(index, text)| Effect::CounterText { index, text })
            .collect();
        if self.counters.is_animating() {
            effects.push(Effect::RequestFrame);
        }
        effects
    }

    fn with_page(&mut self, f: impl FnOnce(&mut DirectoryPage) -> Vec<Effect>) -> Vec<Effect> {
        self.directory.as_mut().map(f).unwrap_or_default()
    }
}

fn close_modal(page: &mut DirectoryPage) -> Vec<Effect> {
    if page.close_modal() {
        vec![Effect::HideModal]
    } else {
        Vec::new()
    }
}

fn dom(effects: Vec<DomEffect>) -> Vec<Effect> {
    effects.into_iter().map(Effect::Dom).collect()
}
