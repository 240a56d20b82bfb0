//! Unit tests for GcType, GcReason and GcEvent

use gc_accounting::{GcEvent, GcReason, GcType, TagError};
use std::collections::HashSet;

#[cfg(test)]
mod gc_type_tests {
    use super::*;

    #[test]
    fn test_gc_type_count() {
        assert_eq!(GcType::COUNT, 3);
        assert_eq!(GcType::ALL.len(), 3);
    }

    #[test]
    fn test_gc_type_tags_distinct() {
        let tags: HashSet<GcType> = GcType::ALL.iter().copied().collect();
        assert_eq!(tags.len(), GcType::COUNT);

        let raw: HashSet<u8> = GcType::ALL.iter().map(|t| t.as_u8()).collect();
        assert_eq!(raw.len(), GcType::COUNT);
    }

    #[test]
    fn test_gc_type_raw_round_trip() {
        for gc_type in GcType::ALL {
            assert_eq!(GcType::try_from(gc_type.as_u8()), Ok(gc_type));
        }
    }

    #[test]
    fn test_gc_type_rejects_unknown() {
        for raw in [3u8, 4, 100, u8::MAX] {
            assert_eq!(GcType::try_from(raw), Err(TagError::UnknownGcType(raw)));
        }
    }

    #[test]
    fn test_gc_type_display() {
        assert_eq!(GcType::Scavenge.to_string(), "Scavenge");
        assert_eq!(GcType::MarkSweep.to_string(), "MarkSweep");
        assert_eq!(GcType::MarkCompact.to_string(), "MarkCompact");
    }
}

#[cfg(test)]
mod gc_reason_tests {
    use super::*;

    #[test]
    fn test_gc_reason_count() {
        assert_eq!(GcReason::COUNT, 11);
        assert_eq!(GcReason::ALL.len(), 11);
    }

    #[test]
    fn test_gc_reason_tags_distinct() {
        let tags: HashSet<GcReason> = GcReason::ALL.iter().copied().collect();
        assert_eq!(tags.len(), GcReason::COUNT);

        let raw: HashSet<u8> = GcReason::ALL.iter().map(|r| r.as_u8()).collect();
        assert_eq!(raw.len(), GcReason::COUNT);
    }

    #[test]
    fn test_gc_reason_raw_round_trip() {
        for reason in GcReason::ALL {
            assert_eq!(GcReason::try_from(reason.as_u8()), Ok(reason));
        }
    }

    #[test]
    fn test_gc_reason_rejects_unknown() {
        assert_eq!(GcReason::try_from(11), Err(TagError::UnknownGcReason(11)));
        assert_eq!(GcReason::try_from(64), Err(TagError::UnknownGcReason(64)));
    }

    #[test]
    fn test_gc_reason_names() {
        let names: Vec<&str> = GcReason::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "new space",
                "store buffer",
                "promotion",
                "old space",
                "finalize",
                "full",
                "external",
                "idle",
                "low memory",
                "debugging",
                "send and exit",
            ]
        );
    }
}

#[cfg(test)]
mod gc_event_tests {
    use super::*;

    #[test]
    fn test_every_pairing_is_accepted() {
        let mut events = HashSet::new();
        for gc_type in GcType::ALL {
            for reason in GcReason::ALL {
                let event = GcEvent::new(gc_type, reason);
                assert_eq!(event.gc_type, gc_type);
                assert_eq!(event.reason, reason);
                events.insert(event);
            }
        }
        assert_eq!(events.len(), GcType::COUNT * GcReason::COUNT);
    }

    #[test]
    fn test_event_display() {
        let event = GcEvent::new(GcType::MarkSweep, GcReason::External);
        assert_eq!(event.to_string(), "MarkSweep (external)");
    }

    #[test]
    fn test_event_serialize() {
        let event = GcEvent::new(GcType::Scavenge, GcReason::StoreBuffer);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "gc_type": "Scavenge", "reason": "StoreBuffer" })
        );

        let back: GcEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_policy_can_branch_on_reason() {
        let event = GcEvent::new(GcType::Scavenge, GcReason::External);
        let skip_next_scavenge = matches!(event.reason, GcReason::External);
        assert!(skip_next_scavenge);
    }
}
