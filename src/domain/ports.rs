/// Settings the engine needs to open and validate a database.
pub trait ConfigProvider {
    /// Whether `PRAGMA foreign_keys = ON` is issued for every session.
    fn foreign_keys(&self) -> bool;
    /// Tables that must exist for a file to count as an airport database.
    fn required_tables(&self) -> &[String];
}
