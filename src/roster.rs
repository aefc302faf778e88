// In-memory roster: the ordered list of employee records for one
// session. All lookups are linear scans over a handful of records, and
// first-match semantics on duplicate IDs are part of the observable
// behavior, not an accident of the scan.

use crate::model::Employee;

/// The ordered collection of employee records.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records loaded from the store, keeping their file order.
    pub fn from_records(records: Vec<Employee>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// All records in insertion order, for display and for saving.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Iterates the records in order. Each call starts a fresh pass, so
    /// re-running View always reflects the current state.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.records.iter()
    }

    /// Appends a record. Duplicate IDs are accepted; lookups by ID then
    /// resolve to the earliest record carrying that ID.
    pub fn add(&mut self, employee: Employee) {
        self.records.push(employee);
    }

    /// First record with the given ID, if any.
    pub fn find_by_id(&self, id: i32) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == id)
    }

    /// Mutable access to the first record with the given ID, for
    /// overwriting name, designation and salary in place. The ID itself
    /// is never rewritten by any operation.
    pub fn find_by_id_mut(&mut self, id: i32) -> Option<&mut Employee> {
        self.records.iter_mut().find(|employee| employee.id == id)
    }

    /// Removes and returns the first record with the given ID.
    pub fn delete(&mut self, id: i32) -> Option<Employee> {
        let position = self.records.iter().position(|employee| employee.id == id)?;
        Some(self.records.remove(position))
    }

    /// Every record whose name equals `name` ignoring case, in list
    /// order.
    pub fn search_by_name(&self, name: &str) -> Vec<&Employee> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .filter(|employee| employee.name.to_lowercase() == needle)
            .collect()
    }
}
