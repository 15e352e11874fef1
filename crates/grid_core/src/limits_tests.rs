use super::*;

#[test]
fn test_limits_follow_difficulty_depth() {
    assert_eq!(SearchLimits::for_difficulty(Difficulty::Easy).depth, 1);
    assert_eq!(SearchLimits::for_difficulty(Difficulty::Medium).depth, 3);
    assert_eq!(SearchLimits::for_difficulty(Difficulty::Hard).depth, 5);
}

#[test]
fn test_zero_depth_is_raised() {
    let limits = SearchLimits::new(0, Difficulty::Hard);
    assert_eq!(limits.depth, 1);
    assert_eq!(limits.difficulty, Difficulty::Hard);
}

#[test]
fn test_default_limits_are_medium() {
    let limits = SearchLimits::default();
    assert_eq!(limits.depth, 3);
    assert_eq!(limits.difficulty, Difficulty::Medium);
}
