//! Unit tests for shared command helpers

use super::*;

#[cfg(test)]
mod resolve_league_key_tests {
    use super::*;

    // One test so the env var is never touched concurrently.
    #[test]
    fn test_resolve_league_key_precedence() {
        let explicit: LeagueKey = "nfl.l.1".parse().unwrap();
        std::env::set_var(LEAGUE_KEY_ENV_VAR, "nba.l.2");

        assert_eq!(resolve_league_key(Some(explicit.clone())).unwrap(), explicit);
        assert_eq!(resolve_league_key(None).unwrap().as_str(), "nba.l.2");

        std::env::set_var(LEAGUE_KEY_ENV_VAR, "garbage");
        assert!(resolve_league_key(None).is_err());

        std::env::remove_var(LEAGUE_KEY_ENV_VAR);
        assert_eq!(resolve_league_key(None).unwrap().as_str(), DEFAULT_LEAGUE_KEY);
    }
}

#[cfg(test)]
mod code_provider_tests {
    use super::*;

    #[test]
    fn test_code_provider_static() {
        let provider = code_provider(Some("abc".to_string()));
        assert_eq!(provider.authorization_code("https://ignored").unwrap(), "abc");
    }
}
