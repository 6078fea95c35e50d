pub mod csv_import;
pub mod database;
pub mod validation;
