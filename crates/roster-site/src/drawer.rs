//! Mobile navigation drawer.
//!
//! The drawer is opened by the menu button and closed by its close button,
//! a click on the overlay, or the Escape key. Each transition returns the
//! DOM changes the host page must apply.

/// Body class toggled while the drawer is open.
pub const OPEN_CLASS: &str = "is-open";

/// Page elements the drawer touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Body,
    MenuButton,
    Overlay,
    FirstDrawerLink,
}

/// A single change to apply to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEffect {
    AddClass {
        target: Element,
        class: &'static str,
    },
    RemoveClass {
        target: Element,
        class: &'static str,
    },
    SetAttribute {
        target: Element,
        name: &'static str,
        value: &'static str,
    },
    Focus(Element),
}

/// Which drawer elements exist on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerElements {
    pub menu_button: bool,
    pub overlay: bool,
    pub drawer: bool,
    pub first_link: bool,
}

impl DrawerElements {
    /// Every element present, as on the standard page layout.
    pub const fn complete() -> Self {
        Self {
            menu_button: true,
            overlay: true,
            drawer: true,
            first_link: true,
        }
    }

    /// A page without navigation markup.
    pub const fn missing() -> Self {
        Self {
            menu_button: false,
            overlay: false,
            drawer: false,
            first_link: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Drawer {
    elements: DrawerElements,
    open: bool,
}

impl Drawer {
    pub fn new(elements: DrawerElements) -> Self {
        Self {
            elements,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> Vec<DomEffect> {
        let DrawerElements {
            menu_button,
            overlay,
            drawer,
            first_link,
        } = self.elements;
        if !(menu_button && overlay && drawer) {
            return Vec::new();
        }
        self.open = true;
        let mut effects = vec![
            DomEffect::AddClass {
                target: Element::Body,
                class: OPEN_CLASS,
            },
            DomEffect::SetAttribute {
                target: Element::MenuButton,
                name: "aria-expanded",
                value: "true",
            },
            DomEffect::SetAttribute {
                target: Element::Overlay,
                name: "aria-hidden",
                value: "false",
            },
        ];
        if first_link {
            effects.push(DomEffect::Focus(Element::FirstDrawerLink));
        }
        effects
    }

    pub fn close(&mut self) -> Vec<DomEffect> {
        if !(self.elements.menu_button && self.elements.overlay) {
            return Vec::new();
        }
        self.open = false;
        vec![
            DomEffect::RemoveClass {
                target: Element::Body,
                class: OPEN_CLASS,
            },
            DomEffect::SetAttribute {
                target: Element::MenuButton,
                name: "aria-expanded",
                value: "false",
            },
            DomEffect::SetAttribute {
                target: Element::Overlay,
                name: "aria-hidden",
                value: "true",
            },
            DomEffect::Focus(Element::MenuButton),
        ]
    }

    /// Escape only closes an open drawer.
    pub fn escape(&mut self) -> Vec<DomEffect> {
        if self.open { self.close() } else { Vec::new() }
    }
}
