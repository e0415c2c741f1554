//! Interactive behavior of the association's site.
//!
//! Each page feature is plain state driven by [`UiAction`] values:
//! the navigation [`drawer`], the KPI [`counter`]s, the footer [`year`],
//! and the member directory [`page`] with its [`view`] models and [`html`]
//! rendering.

pub mod counter;
pub mod drawer;
pub mod html;
pub mod page;
pub mod site;
pub mod view;
pub mod year;

pub use counter::{CounterAnimation, CounterBoard, format_fr};
pub use drawer::{DomEffect, Drawer, DrawerElements, Element};
pub use page::DirectoryPage;
pub use site::{Effect, Site, UiAction};
pub use view::{CardView, LinkView, ModalView};
pub use year::{current_footer_year, footer_year};
