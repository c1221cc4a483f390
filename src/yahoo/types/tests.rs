//! Unit tests for Yahoo data types

use super::*;
use serde_json::json;

#[cfg(test)]
mod stat_schema_tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut schema = StatSchema::new();
        schema.insert("Goals", "1");
        schema.insert("Assists", "2");
        schema.insert("Plus/Minus", "4");

        let names: Vec<_> = schema.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Goals", "Assists", "Plus/Minus"]);
        assert_eq!(schema.stat_ids().collect::<Vec<_>>(), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_duplicate_name_last_id_wins_in_first_position() {
        let schema: StatSchema = [("Wins", "19"), ("Saves", "25"), ("Wins", "99")]
            .into_iter()
            .collect();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("Wins"), Some("99"));
        assert_eq!(schema.stat_ids().collect::<Vec<_>>(), vec!["99", "25"]);
    }

    #[test]
    fn test_empty_schema() {
        let schema = StatSchema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.get("Goals"), None);
    }

    #[test]
    fn test_column_name() {
        assert_eq!(StatDefinition::new("Goals", "1").column_name(), "goals");
        assert_eq!(
            StatDefinition::new("Power Play Points", "8").column_name(),
            "power_play_points"
        );
        assert_eq!(
            StatDefinition::new("Goals Against Average", "23").column_name(),
            "goals_against_average"
        );
    }

    #[test]
    fn test_schema_serializes_as_list() {
        let schema: StatSchema = [("Goals", "1")].into_iter().collect();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value, json!([{ "name": "Goals", "stat_id": "1" }]));
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_token_response_full() {
        let body = json!({
            "access_token": "abc",
            "refresh_token": "def",
            "expires_in": 3600,
            "token_type": "bearer",
            "xoauth_yahoo_guid": "GUID"
        });

        let token: TokenResponse = serde_json::from_value(body).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, Some(3600));
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
    }

    #[test]
    fn test_token_response_requires_access_token() {
        let body = json!({ "error": "invalid_grant" });
        assert!(serde_json::from_value::<TokenResponse>(body).is_err());
    }

    #[test]
    fn test_bearer_token_debug_redacted() {
        let token = BearerToken::new("very-secret");
        assert_eq!(token.secret(), "very-secret");
        assert!(!format!("{:?}", token).contains("very-secret"));
    }
}
