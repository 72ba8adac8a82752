//! Name / Import / Export / Depends tables and the ancillary tables.

pub mod ancillary;
pub mod depends;
pub mod export;
pub mod import;
pub mod name;

pub use ancillary::{
    read_import_export_guids, read_texture_allocations, read_thumbnail_table,
    write_import_export_guids, write_texture_allocations, write_thumbnail_table,
};
pub use depends::{read_depends_table, write_depends_table};
pub use export::{read_export_table, write_export_table, ExportEntry, ExportShape};
pub use import::{read_import_table, write_import_table, ImportEntry};
pub use name::{read_name_table, write_name_table, NameEntry};
