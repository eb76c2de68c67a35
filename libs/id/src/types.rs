//! Typed ID definitions for routed platform resources.
//!
//! Each type wraps the backend's numeric primary key and renders as the
//! standard token, so a `CourseId` can go straight into a URL or JSON body.

use crate::define_token;
use crate::ResourceKind;

define_token!(CourseId, ResourceKind::Course);
define_token!(ProductId, ResourceKind::Product);
define_token!(InstructorId, ResourceKind::Instructor);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_roundtrip() {
        let id = CourseId::new(5);
        let s = id.to_string();
        assert_eq!(s, "CR0RX");
        let parsed: CourseId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_zero_is_a_real_id() {
        let id = ProductId::new(0);
        assert_eq!(id.to_string(), "CR0RS");
        assert_eq!("CR0RS".parse::<ProductId>().unwrap().value(), 0);
    }

    #[test]
    fn test_course_id_invalid_prefix() {
        let result: Result<CourseId, _> = "AB123".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::MissingPrefix { .. }
        ));
    }

    #[test]
    fn test_course_id_empty() {
        let result: Result<CourseId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), crate::IdError::Empty));
    }

    #[test]
    fn test_paths() {
        assert_eq!(CourseId::new(5).path(), "/course/CR0RX");
        assert_eq!(ProductId::new(5).path(), "/products/CR0RX");
        assert_eq!(InstructorId::new(5).path(), "/instructors/CR0RX");
    }

    #[test]
    fn test_from_path_checks_kind() {
        assert_eq!(CourseId::from_path("/course/CR0RX"), Ok(CourseId::new(5)));
        assert!(matches!(
            CourseId::from_path("/products/CR0RX"),
            Err(crate::IdError::UnknownResource { .. })
        ));
    }

    #[test]
    fn test_course_id_json_roundtrip() {
        let id = CourseId::new(987_654);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.encode()));
        let parsed: CourseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_non_canonical() {
        let result: Result<InstructorId, _> = serde_json::from_str("\"CR00RS\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_all_kinds_distinct() {
        let kinds = [CourseId::KIND, ProductId::KIND, InstructorId::KIND];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(kinds.len(), unique.len(), "Duplicate resource kinds found!");
    }
}
