pub mod csv;

pub use self::csv::{export_to_path, to_csv_string, write_csv};
