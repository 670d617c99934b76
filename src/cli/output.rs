//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Well-known entry fields shown as their own table columns, in order.
const FIELD_COLUMNS: [&str; 6] = ["username", "account", "password", "website", "phone", "email"];

/// Mask shown in place of a password value unless `--reveal` is passed.
const PASSWORD_MASK: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Print a table of entries.
///
/// Password values are masked unless `reveal` is set.  Fields outside
/// the well-known set land in the "Other" column as `key=value` pairs.
pub fn print_entries_table(entries: &[Entry], reveal: bool) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passvault add <NAME>` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name", "Username", "Account", "Password", "Website", "Phone", "Email", "Other",
    ]);

    for entry in entries {
        let mut row = vec![entry.name.clone()];

        for column in FIELD_COLUMNS {
            let cell = match entry.field(column) {
                Some(_) if column == "password" && !reveal => PASSWORD_MASK.to_string(),
                Some(value) => value.to_string(),
                None => String::new(),
            };
            row.push(cell);
        }

        let other: Vec<String> = entry
            .fields
            .iter()
            .filter(|(key, _)| !FIELD_COLUMNS.contains(&key.as_str()))
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        row.push(other.join(", "));

        table.add_row(row);
    }

    println!("{table}");
}
