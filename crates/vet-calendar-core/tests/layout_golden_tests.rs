//! Golden tests for the calendar layout engine.
//!
//! These tests verify column assignment and geometry against known schedules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use vet_calendar_core::layout::{assign_columns, overlaps, project, DAY_AXIS_MINUTES};
use vet_calendar_core::models::{AppointmentId, ScheduledSlot};
use vet_calendar_core::views::layout_day;
use vet_calendar_core::LayoutConfig;

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    /// (appointment id, start HH:MM, end HH:MM)
    slots: Vec<(&'static str, &'static str, &'static str)>,
    /// (appointment id, expected column)
    expected_columns: Vec<(&'static str, usize)>,
    expected_column_count: usize,
}

fn clinic_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
}

fn at(hhmm: &str) -> NaiveDateTime {
    clinic_day().and_time(NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap())
}

fn build_slots(case: &GoldenCase) -> Vec<ScheduledSlot> {
    case.slots
        .iter()
        .map(|(id, start, end)| ScheduledSlot::new(*id, at(start), at(end)))
        .collect()
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "three-way-chain",
            slots: vec![
                ("A", "09:00", "10:00"),
                ("B", "09:30", "10:30"),
                ("C", "10:00", "11:00"),
            ],
            expected_columns: vec![("A", 0), ("B", 1), ("C", 0)],
            expected_column_count: 2,
        },
        GoldenCase {
            id: "touching-back-to-back",
            slots: vec![("X", "09:00", "10:00"), ("Y", "10:00", "11:00")],
            expected_columns: vec![("X", 0), ("Y", 0)],
            expected_column_count: 1,
        },
        GoldenCase {
            id: "morning-surgery-block",
            slots: vec![
                ("surgery", "08:00", "12:00"),
                ("consult-1", "08:30", "09:00"),
                ("consult-2", "09:00", "09:30"),
                ("consult-3", "09:15", "09:45"),
                ("vaccine", "11:30", "11:45"),
            ],
            expected_columns: vec![
                ("surgery", 0),
                ("consult-1", 1),
                ("consult-2", 1),
                ("consult-3", 2),
                ("vaccine", 1),
            ],
            expected_column_count: 3,
        },
        GoldenCase {
            id: "four-concurrent",
            slots: vec![
                ("d", "14:00", "15:00"),
                ("c", "14:00", "15:00"),
                ("b", "14:00", "15:00"),
                ("a", "14:00", "15:00"),
            ],
            // Equal starts keep input order.
            expected_columns: vec![("d", 0), ("c", 1), ("b", 2), ("a", 3)],
            expected_column_count: 4,
        },
        GoldenCase {
            id: "staircase-reuses-freed-lane",
            slots: vec![
                ("s1", "09:00", "11:00"),
                ("s2", "10:00", "12:00"),
                ("s3", "11:00", "13:00"),
                ("s4", "12:00", "14:00"),
            ],
            expected_columns: vec![("s1", 0), ("s2", 1), ("s3", 0), ("s4", 1)],
            expected_column_count: 2,
        },
        GoldenCase {
            id: "nested-inside-long-slot",
            slots: vec![
                ("boarding", "07:00", "19:00"),
                ("checkup", "10:00", "10:30"),
                ("grooming", "10:15", "11:00"),
                ("dental", "15:00", "16:00"),
            ],
            expected_columns: vec![
                ("boarding", 0),
                ("checkup", 1),
                ("grooming", 2),
                ("dental", 1),
            ],
            expected_column_count: 3,
        },
        GoldenCase {
            id: "zero-width-same-instant",
            slots: vec![("reminder-1", "12:00", "12:00"), ("reminder-2", "12:00", "12:00")],
            expected_columns: vec![("reminder-1", 0), ("reminder-2", 0)],
            expected_column_count: 1,
        },
        GoldenCase {
            id: "disjoint-day",
            slots: vec![
                ("late", "16:00", "17:00"),
                ("early", "08:00", "09:00"),
                ("noon", "12:00", "13:00"),
            ],
            expected_columns: vec![("late", 0), ("early", 0), ("noon", 0)],
            expected_column_count: 1,
        },
    ]
}

#[test]
fn test_golden_column_assignment() {
    for case in get_golden_cases() {
        let slots = build_slots(&case);
        let assignment = assign_columns(&slots);

        for (id, expected) in &case.expected_columns {
            assert_eq!(
                assignment.column_of(&AppointmentId::from(*id)),
                Some(*expected),
                "Case {}: column mismatch for {}",
                case.id,
                id
            );
        }
        assert_eq!(
            assignment.column_count(),
            case.expected_column_count,
            "Case {}: column count mismatch",
            case.id
        );
    }
}

#[test]
fn test_golden_no_shared_column_overlaps() {
    for case in get_golden_cases() {
        let slots = build_slots(&case);
        let assignment = assign_columns(&slots);

        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                if assignment.column_of(&a.id) == assignment.column_of(&b.id) {
                    assert!(
                        !overlaps(a, b),
                        "Case {}: {} and {} share a column but overlap",
                        case.id,
                        a.id,
                        b.id
                    );
                }
            }
        }
    }
}

#[test]
fn test_empty_day() {
    let assignment = assign_columns(&[]);
    assert!(assignment.is_empty());
    assert_eq!(assignment.column_count(), 1);

    let layout = layout_day(&[], clinic_day(), &LayoutConfig::default());
    assert!(layout.entries.is_empty());
    assert_eq!(layout.column_count(), 1);
}

#[test]
fn test_touching_slots_do_not_overlap() {
    let x = ScheduledSlot::new("X", at("09:00"), at("10:00"));
    let y = ScheduledSlot::new("Y", at("10:00"), at("11:00"));
    assert!(!overlaps(&x, &y));
    assert!(!overlaps(&y, &x));
}

#[test]
fn test_full_day_geometry() {
    let start = at("00:00");
    let end = clinic_day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
    let geometry = project(&ScheduledSlot::new("all-day", start, end), 0, 1, DAY_AXIS_MINUTES);

    assert!(geometry.top_percent.abs() < 0.001);
    assert!((geometry.height_percent - 100.0).abs() < 0.001);
}

#[test]
fn test_golden_day_geometry() {
    let case = &get_golden_cases()[0];
    let layout = layout_day(&build_slots(case), clinic_day(), &LayoutConfig::default());

    let b = layout.entry(&AppointmentId::from("B")).unwrap();
    // 09:30 → 570 / 1440 minutes
    assert!((b.geometry.top_percent - 39.583).abs() < 0.001);
    assert!((b.geometry.height_percent - 4.1667).abs() < 0.001);
    assert!((b.geometry.left_percent - 50.5).abs() < 0.001);
    assert!((b.geometry.right_percent - 0.5).abs() < 0.001);

    let c = layout.entry(&AppointmentId::from("C")).unwrap();
    assert!((c.geometry.left_percent - 0.5).abs() < 0.001);
    assert!((c.geometry.right_percent - 50.5).abs() < 0.001);
}
