pub struct LanguageCode {
}

impl LanguageCode {
    /// Language used when the caller does not provide one, and the
    /// language geocoding falls back to.
    pub fn get_default() -> &'static str {
        return Self::en();
    }

    pub fn en() -> &'static str {
        return "en";
    }

    /// Languages whose descriptions must never be replaced with English
    /// ones, because a transliterated name is worse than no name at all.
    pub fn may_fall_back_to_english(language: &str) -> bool {
        !matches!(language, "zh" | "ja" | "ko")
    }
}
