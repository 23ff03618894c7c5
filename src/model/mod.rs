pub mod department;
pub mod numeric;
pub mod snapshot;
pub mod time_entry;

pub use department::{Department, DepartmentMap, DepartmentRate, PermittedDepartments};
pub use numeric::LooseDecimal;
pub use snapshot::TimeEntrySnapshot;
pub use time_entry::{EntryStatus, TimeEntry};
