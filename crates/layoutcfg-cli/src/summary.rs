use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use layoutcfg_core::{LocaleCatalog, ThemeEntry, ThemeList};
use layoutcfg_model::Device;

use layoutcfg_cli::report::ResolveReport;

pub fn print_devices(devices: &[Device]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Device"),
        header_cell("Config"),
        header_cell("Qualifiers"),
        header_cell("xdpi"),
        header_cell("ydpi"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for device in devices {
        for (index, config) in device.configs.iter().enumerate() {
            let (name, xdpi, ydpi) = if index == 0 {
                (
                    Cell::new(&device.name)
                        .fg(Color::Blue)
                        .add_attribute(Attribute::Bold),
                    dpi_cell(device.finite_xdpi()),
                    dpi_cell(device.finite_ydpi()),
                )
            } else {
                (Cell::new(""), Cell::new(""), Cell::new(""))
            };
            let qualifiers = match config.qualifiers.to_display_string() {
                Some(text) => Cell::new(text),
                None => dim_cell("(Default)"),
            };
            table.add_row(vec![name, Cell::new(&config.name), qualifiers, xdpi, ydpi]);
        }
    }
    println!("{table}");
}

pub fn print_themes(themes: &ThemeList) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Theme"), header_cell("Owner")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, entry) in themes.entries().iter().enumerate() {
        let row = match entry {
            ThemeEntry::Framework(name) => {
                vec![Cell::new(index), Cell::new(name), Cell::new("framework")]
            }
            ThemeEntry::Project(name) => vec![
                Cell::new(index),
                Cell::new(name).add_attribute(Attribute::Bold),
                Cell::new("project").fg(Color::Green),
            ],
            ThemeEntry::Separator => {
                vec![dim_cell(index), dim_cell(entry.label()), dim_cell("-")]
            }
        };
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_locales(locales: &LocaleCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Locale"),
        header_cell("Language"),
        header_cell("Region"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, entry) in locales.entries().iter().enumerate() {
        if entry.is_sentinel() {
            table.add_row(vec![
                dim_cell(index),
                Cell::new(&entry.label).fg(Color::Cyan),
                dim_cell("any"),
                dim_cell("any"),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(index),
                Cell::new(&entry.label),
                Cell::new(&entry.language),
                match &entry.region {
                    Some(region) => Cell::new(region),
                    None => dim_cell("-"),
                },
            ]);
        }
    }
    println!("{table}");
}

pub fn print_report(report: &ResolveReport) {
    println!(
        "Configuration: {}",
        report.configuration.as_deref().unwrap_or("(Default)")
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let mut add = |label: &str, value: Cell| {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value]);
    };
    add("Device", optional_cell(report.device.as_deref()));
    add("Config", optional_cell(report.config.as_deref()));
    for row in &report.qualifiers {
        add(&row.kind, Cell::new(&row.value));
    }
    add("Density", Cell::new(&report.density));
    add("DPI", Cell::new(format!("{} x {}", report.xdpi, report.ydpi)));
    add(
        "Screen",
        Cell::new(format!("{} x {}", report.width, report.height)),
    );
    let theme = match (&report.theme, report.project_theme) {
        (Some(theme), true) => Cell::new(format!("{theme} (project)")).fg(Color::Green),
        (Some(theme), false) => Cell::new(theme),
        (None, _) => dim_cell("-"),
    };
    add("Theme", theme);
    add("Locale", optional_cell(report.locale.as_deref()));
    add(
        "Clipping",
        Cell::new(if report.clipping { "on" } else { "off" }),
    );
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dpi_cell(dpi: Option<f32>) -> Cell {
    match dpi {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
