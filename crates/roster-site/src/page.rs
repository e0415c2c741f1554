//! State behind the directory page: the load, the filters, and the modal.

use tracing::debug;

use roster_directory::{
    DirectoryIndex, DirectoryLoader, EMPTY_DIRECTORY_MESSAGE, LoadStatus, MemberBuilder,
};
use roster_ingest::CsvSource;
use roster_model::{FilterState, Member, MemberId};

use crate::counter::CounterBoard;
use crate::html::{render_counters, render_grid, render_modal};
use crate::view::{CardView, ModalView};

pub const LOADING_MESSAGE: &str = "Chargement de l'annuaire…";
pub const NO_MATCH_MESSAGE: &str = "Aucun membre ne correspond à votre recherche.";

/// Labels of the KPI block above the grid.
pub const KPI_LABELS: [&str; 2] = ["Membres", "Rôles"];

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}

#[derive(Debug, Default)]
pub struct DirectoryPage {
    loader: DirectoryLoader,
    filter: FilterState,
    selected: Option<MemberId>,
}

impl DirectoryPage {
    pub fn new(builder: MemberBuilder) -> Self {
        Self {
            loader: DirectoryLoader::new(builder),
            filter: FilterState::default(),
            selected: None,
        }
    }

    pub fn loader(&self) -> &DirectoryLoader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut DirectoryLoader {
        &mut self.loader
    }

    pub fn status(&self) -> &LoadStatus {
        self.loader.status()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn load(&mut self, source: &dyn CsvSource) -> &LoadStatus {
        self.loader.load(source)
    }

    fn index(&self) -> Option<&DirectoryIndex> {
        self.loader.index()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.filter.role = role.into();
    }

    /// Members passing the current filters, in directory order.
    pub fn visible(&self) -> Vec<&Member> {
        self.index()
            .map(|index| index.filtered(&self.filter))
            .unwrap_or_default()
    }

    /// Role dropdown entries, an empty string standing for "all roles".
    pub fn role_options(&self) -> Vec<&str> {
        let mut options = vec![""];
        if let Some(index) = self.index() {
            options.extend(index.roles());
        }
        options
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.visible().into_iter().map(CardView::from_member).collect()
    }

    /// Opens the modal for `id`. Unknown ids leave the modal closed.
    pub fn open_member(&mut self, id: &str) -> bool {
        match self.index().and_then(|index| index.get_str(id)) {
            Some(member) => {
                self.selected = Some(member.id.clone());
                true
            }
            None => {
                debug!(id, "no member with this id");
                self.selected = None;
                false
            }
        }
    }

    pub fn close_modal(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn selected_member(&self) -> Option<&Member> {
        let id = self.selected.as_ref()?;
        self.index()?.get(id)
    }

    pub fn modal(&self) -> Option<ModalView> {
        self.selected_member().map(ModalView::from_member)
    }

    /// Status line shown above the grid.
    pub fn status_text(&self) -> String {
        match self.status() {
            LoadStatus::Idle => String::new(),
            LoadStatus::Loading => LOADING_MESSAGE.to_string(),
            LoadStatus::Empty => EMPTY_DIRECTORY_MESSAGE.to_string(),
            LoadStatus::Failed { message } => message.clone(),
            LoadStatus::Ready { members } => {
                let total = *members;
                if !self.filter.is_active() {
                    return format!("{total} membre{}", plural(total));
                }
                match self.visible().len() {
                    0 => NO_MATCH_MESSAGE.to_string(),
                    shown => format!("{shown} membre{} sur {total}", plural(shown)),
                }
            }
        }
    }

    /// Page body: KPI counters at their final values, the status line and
    /// grid, then the open modal if any.
    pub fn render_body(&self) -> String {
        let roles = self.role_options().len().saturating_sub(1);
        let targets = [self.status().member_count() as f64, roles as f64];
        let board = CounterBoard::new(&targets, true);
        let texts: Vec<String> = (0..board.len())
            .filter_map(|index| board.text(index, 0.0))
            .collect();

        let mut body = render_counters(&KPI_LABELS, &texts);
        body.push_str(&render_grid(&self.status_text(), &self.cards()));
        if let Some(modal) = self.modal() {
            body.push_str(&render_modal(&modal));
        }
        body
    }
}
