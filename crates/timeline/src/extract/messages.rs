use ordertrail_events::{EventId, EventKind, NoteEvent, NotificationEvent, TimelineEvent};
use ordertrail_sales::{Note, Notification};

use crate::extract::{Extraction, unique_by_id};

pub fn notes(notes: &[Note], out: &mut Extraction) {
    for note in unique_by_id(notes) {
        out.push(TimelineEvent::new(
            EventId::facet(note.id, "note"),
            note.created_at,
            out.order_id(),
            EventKind::Note(NoteEvent {
                author_id: note.author_id,
                value: note.value.clone(),
            }),
        ));
    }
}

pub fn notifications(notifications: &[Notification], out: &mut Extraction) {
    for notification in unique_by_id(notifications) {
        out.push(TimelineEvent::new(
            EventId::facet(notification.id, "notification"),
            notification.created_at,
            out.order_id(),
            EventKind::Notification(NotificationEvent {
                to: notification.to.clone(),
                event_name: notification.event_name.clone(),
            }),
        ));
    }
}
