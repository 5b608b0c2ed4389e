use ordertrail_events::{Event, TimelineEvent};

/// Orders events newest first and flags the earliest one as `first`.
///
/// The sort is stable: events sharing a timestamp keep their extraction
/// order. Returns `None` for an empty input so "nothing loaded" is never
/// confused with "nothing happened".
pub fn sequence(mut events: Vec<TimelineEvent>) -> Option<Vec<TimelineEvent>> {
    if events.is_empty() {
        return None;
    }

    events.sort_by_key(|e| core::cmp::Reverse(e.occurred_at()));
    for event in &mut events {
        event.first = false;
    }
    if let Some(earliest) = events.last_mut() {
        earliest.first = true;
    }
    Some(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use ordertrail_core::AggregateId;
    use ordertrail_events::{EventId, EventKind};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn event(id: &str, secs: i64) -> TimelineEvent {
        TimelineEvent::new(
            EventId::new(id),
            at(secs),
            AggregateId::from_uuid(Uuid::from_u128(1)),
            EventKind::Canceled,
        )
    }

    #[test]
    fn empty_input_is_not_ready() {
        assert!(sequence(Vec::new()).is_none());
    }

    #[test]
    fn newest_first_and_earliest_flagged() {
        let out = sequence(vec![event("a", 10), event("b", 30), event("c", 20)]).unwrap();
        let ids: Vec<_> = out.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert!(out[2].first);
        assert!(!out[0].first && !out[1].first);
    }

    #[test]
    fn stale_first_flags_are_cleared() {
        let mut stale = event("late", 50);
        stale.first = true;
        let out = sequence(vec![stale, event("early", 0)]).unwrap();
        assert_eq!(out.iter().filter(|e| e.first).count(), 1);
        assert_eq!(out[1].id.as_str(), "early");
    }

    #[test]
    fn ties_keep_input_order() {
        let out = sequence(vec![event("x", 5), event("y", 5)]).unwrap();
        assert_eq!(out[0].id.as_str(), "x");
        assert_eq!(out[1].id.as_str(), "y");
        assert!(out[1].first);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        #[test]
        fn sorted_descending_with_one_first(times in proptest::collection::vec(-1_000i64..1_000, 1..40)) {
            let events = times
                .iter()
                .enumerate()
                .map(|(i, t)| event(&i.to_string(), *t))
                .collect::<Vec<_>>();
            let out = sequence(events).unwrap();

            prop_assert_eq!(out.len(), times.len());
            prop_assert!(out.windows(2).all(|w| w[0].time >= w[1].time));
            prop_assert_eq!(out.iter().filter(|e| e.first).count(), 1);
            prop_assert!(out[out.len() - 1].first);
        }
    }
}
