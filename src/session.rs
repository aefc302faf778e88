// Session context: owns the roster and its backing store for one
// interactive run. Every operation receives the session instead of
// reaching for globals. When a save fails, the in-memory roster keeps
// the change and stays authoritative for the rest of the session.

use crate::roster::Roster;
use crate::store::FileStore;
use anyhow::Result;

pub struct RosterSession {
    pub store: FileStore,
    pub roster: Roster,
}

impl RosterSession {
    /// Opens a session by loading the full roster from the store.
    ///
    /// A missing roster file is a normal first run: a warning is printed
    /// and the session starts with an empty roster. A file that exists
    /// but fails to parse is a fatal error.
    pub fn open(store: FileStore) -> Result<Self> {
        let roster = match store.load()? {
            Some(records) => Roster::from_records(records),
            None => {
                println!("File not found: {}", store.path().display());
                Roster::new()
            }
        };
        Ok(Self { store, roster })
    }

    /// Rewrites the backing file from the current roster state.
    pub fn persist(&self) -> Result<()> {
        self.store.save(self.roster.records())
    }
}
