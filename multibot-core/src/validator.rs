//! Structural validation of a bot configuration list.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{MultibotError, Result};
use crate::registry::BotRegistry;
use crate::types::{BotEntry, RunMode};

/// Validates `bots` and, on full success, commits `mode` into the registry.
///
/// Checks: non-empty list, exactly one main bot, a non-blank token and a positive unique id
/// per entry. Nothing is committed on failure and no network activity takes place here.
pub fn validate(registry: &BotRegistry, mode: RunMode, bots: &[BotEntry]) -> Result<()> {
    if bots.is_empty() {
        return Err(MultibotError::InvalidBotList);
    }

    let main_count = bots.iter().filter(|bot| bot.main).count();
    if main_count == 0 {
        return Err(MultibotError::NoMainBot);
    }
    if main_count > 1 {
        return Err(MultibotError::DuplicateMainBot);
    }

    let mut seen_ids = HashSet::new();
    for (index, bot) in bots.iter().enumerate() {
        if bot.token.trim().is_empty() {
            return Err(MultibotError::InvalidToken { index });
        }
        if bot.id <= 0 {
            return Err(MultibotError::InvalidId { index });
        }
        if !seen_ids.insert(bot.id) {
            return Err(MultibotError::DuplicateId { index, id: bot.id });
        }
    }

    debug!(%mode, bots = bots.len(), "Bot configuration validated");
    registry.commit_mode(mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, token: &str, main: bool) -> BotEntry {
        BotEntry::new(id, token, main)
    }

    #[test]
    fn test_validate_commits_mode() {
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "1:abc", true), entry(2, "2:xyz", false)];
        validate(&registry, RunMode::Multi, &bots).unwrap();
        assert_eq!(registry.mode(), Some(RunMode::Multi));
    }

    #[test]
    fn test_empty_list_rejected() {
        let registry = BotRegistry::new();
        let err = validate(&registry, RunMode::Multi, &[]).unwrap_err();
        assert!(matches!(err, MultibotError::InvalidBotList));
    }

    #[test]
    fn test_no_main_bot_rejected() {
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "1:abc", false), entry(2, "2:xyz", false)];
        let err = validate(&registry, RunMode::Multi, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::NoMainBot));
    }

    #[test]
    fn test_duplicate_main_bot_rejected() {
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "1:abc", true), entry(2, "2:xyz", true)];
        let err = validate(&registry, RunMode::One, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::DuplicateMainBot));
    }

    #[test]
    fn test_blank_token_reports_index() {
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "1:abc", true), entry(2, "   ", false)];
        let err = validate(&registry, RunMode::Multi, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::InvalidToken { index: 1 }));
    }

    #[test]
    fn test_non_positive_id_reports_index() {
        let registry = BotRegistry::new();
        let bots = vec![entry(0, "0:abc", true)];
        let err = validate(&registry, RunMode::One, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::InvalidId { index: 0 }));

        let bots = vec![entry(1, "1:abc", true), entry(-2, "2:xyz", false)];
        let err = validate(&registry, RunMode::Multi, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::InvalidId { index: 1 }));
    }

    #[test]
    fn test_duplicate_id_reports_index_and_value() {
        let registry = BotRegistry::new();
        let bots = vec![
            entry(1, "1:abc", true),
            entry(2, "2:xyz", false),
            entry(2, "2:other", false),
        ];
        let err = validate(&registry, RunMode::Multi, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::DuplicateId { index: 2, id: 2 }));
        assert!(err.to_string().contains("id 2"));
    }

    #[test]
    fn test_failure_commits_nothing() {
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "1:abc", false)];
        assert!(validate(&registry, RunMode::Multi, &bots).is_err());
        assert!(registry.mode().is_none());
    }

    #[test]
    fn test_main_count_checked_before_entry_shape() {
        // The main-bot check covers the whole list before per-entry checks run.
        let registry = BotRegistry::new();
        let bots = vec![entry(1, "", false), entry(2, "2:xyz", false)];
        let err = validate(&registry, RunMode::Multi, &bots).unwrap_err();
        assert!(matches!(err, MultibotError::NoMainBot));
    }
}
