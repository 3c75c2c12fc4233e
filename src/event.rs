//! Record lifecycle hook points.
//!
//! A persistence layer registers the converter for [`DateFieldConverter::events`]
//! and calls [`DateFieldConverter::handle`] when one of them fires.

use crate::converter::DateFieldConverter;
use crate::record::DateRecord;

/// A point in a record's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordEvent {
    BeforeInsert,
    BeforeUpdate,
    AfterFind,
    AfterSave,
}

/// The direction a lifecycle event converts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ToStorage,
    ToDisplay,
}

impl RecordEvent {
    /// Returns the conversion direction this event triggers.
    pub fn direction(&self) -> Direction {
        match self {
            RecordEvent::BeforeInsert | RecordEvent::BeforeUpdate => Direction::ToStorage,
            RecordEvent::AfterFind | RecordEvent::AfterSave => Direction::ToDisplay,
        }
    }
}

const WIRED_EVENTS: [RecordEvent; 3] = [
    RecordEvent::BeforeInsert,
    RecordEvent::BeforeUpdate,
    RecordEvent::AfterFind,
];

impl DateFieldConverter {
    /// Events the converter subscribes to. `AfterSave` is not among them;
    /// use [`after_save`](Self::after_save) to invoke it explicitly.
    pub fn events(&self) -> &'static [RecordEvent] {
        &WIRED_EVENTS
    }

    /// Run the conversion for `event` on `record`.
    pub fn handle<R: DateRecord + ?Sized>(&self, event: RecordEvent, record: &mut R) {
        match event.direction() {
            Direction::ToStorage => self.to_storage_format(record),
            Direction::ToDisplay => self.to_display_format(record),
        }
    }

    /// Restore display format after a record has been saved.
    pub fn after_save<R: DateRecord + ?Sized>(&self, record: &mut R) {
        self.handle(RecordEvent::AfterSave, record);
    }
}
