pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{answer, banner, bullet, header, info, section, success};
pub use table::{stats_table, TableBuilder};
pub use theme::{theme, Theme};
