use crate::edit::Edit;
use crate::error::AppResult;
use crate::generator;
use crate::models::item::ItemRecord;
use crate::models::types::Target;

/// Maximum number of previous records kept for `undo`.
const MAX_HISTORY: usize = 100;

/// Editing state owned by the shell: the one live record and the active target.
#[derive(Debug)]
pub struct Session {
    /// Current record
    record: ItemRecord,
    /// Target shown by `preview` and used by copy/download
    target: Target,

    // Previous records (for "undo")
    history: Vec<ItemRecord>,
}

impl Session {
    pub fn new(target: Target) -> Self {
        Self::with_record(ItemRecord::default(), target)
    }

    pub fn with_record(record: ItemRecord, target: Target) -> Self {
        Self {
            record,
            target,
            history: Vec::new(),
        }
    }

    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// Replaces the record with the result of `edit`. On error the record is unchanged.
    pub fn apply(&mut self, edit: &Edit) -> AppResult<()> {
        let next = self.record.apply(edit)?;
        if next != self.record {
            let prev = std::mem::replace(&mut self.record, next);
            self.history.push(prev);
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        Ok(())
    }

    /// Restores the previous record. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.record = prev;
                true
            }
            None => false,
        }
    }

    pub fn can_export(&self) -> bool {
        self.record.is_exportable()
    }

    /// Snippet for the active target.
    pub fn snippet(&self) -> String {
        generator::generate(&self.record, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Field;

    fn set(sess: &mut Session, field: Field, value: &str) -> AppResult<()> {
        sess.apply(&Edit::Set { field, value: value.to_string() })
    }

    #[test]
    fn edits_and_undo() {
        let mut sess = Session::new(Target::Ox);
        set(&mut sess, Field::Name, "water_bottle").unwrap();
        set(&mut sess, Field::Label, "Water Bottle").unwrap();
        assert!(sess.can_export());

        assert!(sess.undo());
        assert_eq!(sess.record().label, "");
        assert!(!sess.can_export());
        assert!(sess.undo());
        assert!(!sess.undo());
    }

    #[test]
    fn failed_edit_keeps_record() {
        let mut sess = Session::new(Target::Ox);
        set(&mut sess, Field::Name, "x").unwrap();
        assert!(set(&mut sess, Field::Type, "vehicle").is_err());
        assert_eq!(sess.record().name, "x");
        // no-op edits are not recorded
        set(&mut sess, Field::Name, "x").unwrap();
        assert!(sess.undo());
        assert!(!sess.undo());
    }

    #[test]
    fn snippet_follows_target() {
        let mut sess = Session::new(Target::Ox);
        assert!(sess.snippet().starts_with("-- Add this to ox_inventory"));
        sess.set_target(Target::Qb);
        assert!(sess.snippet().starts_with("-- Add this to qb-core"));
    }
}
