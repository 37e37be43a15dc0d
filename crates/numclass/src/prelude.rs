pub use crate::error::Error;

pub use anstream::eprintln;
pub use color_eyre::eyre::{eyre, Result};
pub use log::{debug, info, warn};

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}
