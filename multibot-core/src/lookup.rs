//! Lookup of a bot client by the numeric prefix of its credential token.

use std::sync::Arc;

use crate::bot::BotClient;

/// Parses the numeric prefix of a bot token (`"<id>:<secret>"`). Returns `None` when the
/// text before the first `:` is not a valid `i64`.
pub fn token_bot_id(token: &str) -> Option<i64> {
    token.split(':').next()?.parse().ok()
}

/// Returns the first client whose token prefix equals `id`, or `None`. Comparison is
/// strict `i64` equality; tokens with a non-numeric prefix never match.
pub fn find_by_token_id(bots: &[Arc<dyn BotClient>], id: i64) -> Option<Arc<dyn BotClient>> {
    bots.iter()
        .find(|bot| token_bot_id(bot.token()) == Some(id))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockClient;

    fn clients(tokens: &[&str]) -> Vec<Arc<dyn BotClient>> {
        tokens
            .iter()
            .map(|t| Arc::new(MockClient::new(t)) as Arc<dyn BotClient>)
            .collect()
    }

    #[test]
    fn test_token_bot_id() {
        assert_eq!(token_bot_id("1:abc"), Some(1));
        assert_eq!(token_bot_id("123456789:AAF-x"), Some(123456789));
        assert_eq!(token_bot_id("-5:abc"), Some(-5));
    }

    #[test]
    fn test_token_bot_id_malformed() {
        assert_eq!(token_bot_id(""), None);
        assert_eq!(token_bot_id("abc"), None);
        assert_eq!(token_bot_id("abc:xyz"), None);
        assert_eq!(token_bot_id(":xyz"), None);
        assert_eq!(token_bot_id("1.5:xyz"), None);
    }

    #[test]
    fn test_find_by_token_id() {
        let bots = clients(&["1:abc", "2:xyz"]);
        let found = find_by_token_id(&bots, 2).unwrap();
        assert_eq!(found.token(), "2:xyz");
    }

    #[test]
    fn test_find_by_token_id_first_match_wins() {
        let bots = clients(&["7:first", "7:second"]);
        let found = find_by_token_id(&bots, 7).unwrap();
        assert_eq!(found.token(), "7:first");
    }

    #[test]
    fn test_find_by_token_id_missing() {
        let bots = clients(&["1:abc", "2:xyz"]);
        assert!(find_by_token_id(&bots, 3).is_none());
        assert!(find_by_token_id(&[], 1).is_none());
    }

    #[test]
    fn test_find_by_token_id_skips_malformed_tokens() {
        let bots = clients(&["notatoken", "2:xyz"]);
        assert!(find_by_token_id(&bots, 2).is_some());
        assert!(find_by_token_id(&bots, 1).is_none());
    }
}
