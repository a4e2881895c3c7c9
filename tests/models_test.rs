// ABOUTME: Unit tests for profile validation and label parsing
// ABOUTME: Covers the fill-in-all-fields path, range checks and goal parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fyturisme::errors::ErrorCode;
use fyturisme::models::{Goal, Profile, Segment, FILL_IN_ALL_FIELDS};

#[test]
fn test_valid_profile() {
    let profile = Profile::from_form(
        "Asha",
        34,
        70.0,
        "Person stay in the house",
        "Weight Loss",
    )
    .unwrap();

    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.segment, Segment::StayHome);
    assert_eq!(profile.goal, Goal::WeightLoss);
}

#[test]
fn test_zero_weight_triggers_fill_in_all_fields() {
    // The form minimum is 30, so zero should be unreachable in practice;
    // the required-field check still has to catch it before range checks.
    let error =
        Profile::from_form("Asha", 34, 0.0, "Person stay in the house", "Weight Loss").unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.message, FILL_IN_ALL_FIELDS);
}

#[test]
fn test_zero_age_triggers_fill_in_all_fields() {
    let error =
        Profile::from_form("Asha", 0, 70.0, "Person stay in the house", "Weight Loss").unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_blank_name_triggers_fill_in_all_fields() {
    let error =
        Profile::from_form("   ", 34, 70.0, "Person stay in the house", "Weight Loss").unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_empty_segment_or_goal_triggers_fill_in_all_fields() {
    let error = Profile::from_form("Asha", 34, 70.0, "", "Weight Loss").unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    let error = Profile::from_form("Asha", 34, 70.0, "Person stay in the house", "").unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_age_out_of_range() {
    let error = Profile::from_form("Asha", 15, 70.0, "Person stay in the house", "Weight Loss")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let error = Profile::from_form("Asha", 101, 70.0, "Person stay in the house", "Weight Loss")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_weight_out_of_range() {
    let error = Profile::from_form("Asha", 34, 29.9, "Person stay in the house", "Weight Loss")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let error = Profile::from_form("Asha", 34, 200.5, "Person stay in the house", "Weight Loss")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_unknown_goal_is_rejected() {
    let error = Profile::from_form("Asha", 34, 70.0, "Person stay in the house", "Bulk Cutting")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_unknown_segment_falls_back_silently() {
    let profile = Profile::from_form("Asha", 34, 70.0, "Deep sea welder", "Maintenance").unwrap();
    assert_eq!(profile.segment, Segment::StayHome);
}

#[test]
fn test_segment_labels_round_trip() {
    for segment in Segment::ALL {
        assert_eq!(Segment::from_label(segment.label()), segment);
    }
}

#[test]
fn test_goal_labels_round_trip() {
    for goal in Goal::ALL {
        assert_eq!(Goal::from_label(goal.label()).unwrap(), goal);
    }
}
