pub mod csv;

// Re-export commonly used functions
pub use self::csv::{read_roster_csv, read_roster_from_reader, write_roster_csv};
