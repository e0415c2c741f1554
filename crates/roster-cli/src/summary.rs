use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_directory::DirectoryIndex;
use roster_model::Member;
use roster_site::{LinkView, ModalView};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn print_members(members: &[&Member], total: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Nom"),
        header_cell("Rôle"),
        header_cell("Localisation"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut table);
    for member in members {
        table.add_row(vec![
            Cell::new(member.id.as_str()).fg(Color::DarkGrey),
            Cell::new(&member.name).add_attribute(Attribute::Bold),
            Cell::new(&member.role).fg(Color::Blue),
            optional_cell(member.location()),
            Cell::new(member.tags.join(", ")),
        ]);
    }
    println!("{table}");
    println!("{} membre(s) sur {total}", members.len());
}

pub fn print_member(modal: &ModalView) {
    let card = &modal.card;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell(&card.name),
        Cell::new(card.id.as_str()).fg(Color::DarkGrey),
    ]);
    table.add_row(vec![label_cell("Rôle"), Cell::new(&card.role)]);
    table.add_row(vec![label_cell("Localisation"), Cell::new(&card.location)]);
    table.add_row(vec![label_cell("Bio"), Cell::new(&modal.bio)]);
    if !modal.skills.is_empty() {
        table.add_row(vec![label_cell("Compétences"), Cell::new(modal.skills.join(", "))]);
    }
    if !modal.programs.is_empty() {
        table.add_row(vec![label_cell("Programmes"), Cell::new(modal.programs.join(", "))]);
    }
    if !modal.tags.is_empty() {
        table.add_row(vec![label_cell("Tags"), Cell::new(modal.tags.join(", "))]);
    }
    for link in modal.contacts.iter().chain(&modal.socials) {
        table.add_row(link_row(link));
    }
    println!("{table}");
}

pub fn print_roles(index: &DirectoryIndex) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rôle"), header_cell("Membres")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for role in index.roles() {
        let count = index.apply_filter("", role).len();
        table.add_row(vec![Cell::new(role), Cell::new(count)]);
    }
    println!("{table}");
}

fn link_row(link: &LinkView) -> Vec<Cell> {
    vec![label_cell(&link.label), Cell::new(&link.href).fg(Color::Cyan)]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
