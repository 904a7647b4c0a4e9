use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use material_wiz::{Alias, Mode, system::SYSTEM_ROLES};

/// Prints the role table, reference form aliases, one column per mode.
pub fn execute(mode: Option<Mode>) {
    let modes: Vec<Mode> = match mode {
        Some(mode) => vec![mode],
        None => Mode::ALL.to_vec(),
    };

    let mut header = vec![
        Cell::new("Group").fg(Color::Cyan),
        Cell::new("Role").fg(Color::Cyan),
    ];
    header.extend(modes.iter().map(|mode| Cell::new(mode.key()).fg(Color::Cyan)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(header));

    for spec in SYSTEM_ROLES {
        let mut row = vec![Cell::new(spec.group.key()), Cell::new(spec.role)];
        row.extend(modes.iter().map(|&mode| {
            let raw = spec.alias(mode);
            match Alias::parse(raw) {
                Ok(alias) => Cell::new(alias),
                Err(_) => Cell::new(raw).fg(Color::Red),
            }
        }));
        table.add_row(Row::from(row));
    }

    println!("{table}");
}
