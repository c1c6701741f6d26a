use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::Low.as_str(), "low");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::High.as_str(), "high");
    assert_eq!(Priority::Critical.as_str(), "critical");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert_eq!(Priority::from_str("critical").unwrap(), Priority::Critical);
    assert!(Priority::from_str("urgent").is_err());
    assert!(Priority::from_str("").is_err());
}

#[test]
fn test_priority_default() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_ordering() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Critical);
}
