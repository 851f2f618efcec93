//! ASCII art banners and per-species portraits.

/// Shown once when the application starts.
pub const WELCOME_BANNER: &str = r"
    🐒 Welcome to the Monkey Console Application! 🐒

            __
           /  \
          |  o o|
           \  ~/
           /   \
          /     \
         /       \

    Discover amazing monkeys from around the world!
";

/// Shown when the menu loop terminates.
pub const GOODBYE_BANNER: &str = r"
    🐒 Thank you for using the Monkey Console Application! 🐒

            __
           /  \
          |  ^ ^|
           \  ◡/
           /   \
          /     \
         /       \

    See you later, monkey lover! 🍌
";

const SPIDER_ART: &str = r"
       🕷️ Spider Monkey 🕷️
          \   o   /
           \ | | /
            \| |/
             \_/
";

const HOWLER_ART: &str = r"
       🔊 Howler Monkey 🔊
            ___
           /   \
          | O O |
           \ ~ /
            \_/
         AAHHHOOO!
";

const GOLDEN_ART: &str = r"
       ✨ Golden Monkey ✨
            ___
           /   \
          | ★ ★ |
           \ ◡ /
            \_/
";

const BABOON_ART: &str = r"
       🦧 Baboon 🦧
            ___
           /   \
          | o o |
           \ ~ /
            \_/
";

const GENERIC_ART: &str = r"
            🐒
           ___
          /   \
         | o o |
          \ ~ /
           \_/
";

/// Keyword → portrait, checked in order; the first keyword contained in the
/// species name wins.
const SPECIES_ART: &[(&str, &str)] = &[
    ("spider", SPIDER_ART),
    ("howler", HOWLER_ART),
    ("golden", GOLDEN_ART),
    ("baboon", BABOON_ART),
];

/// Pick the portrait for a species name, case-insensitively.
pub fn art_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    SPECIES_ART
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, art)| *art)
        .unwrap_or(GENERIC_ART)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_for_keywords() {
        assert_eq!(art_for("Spider Monkey"), SPIDER_ART);
        assert_eq!(art_for("Howler Monkey"), HOWLER_ART);
        assert_eq!(art_for("Golden Snub-nosed Monkey"), GOLDEN_ART);
        assert_eq!(art_for("Baboon"), BABOON_ART);
    }

    #[test]
    fn test_art_for_is_case_insensitive() {
        assert_eq!(art_for("SPIDER MONKEY"), SPIDER_ART);
        assert_eq!(art_for("baboon"), BABOON_ART);
    }

    #[test]
    fn test_art_for_falls_back_to_generic() {
        assert_eq!(art_for("Mandrill"), GENERIC_ART);
        assert_eq!(art_for(""), GENERIC_ART);
    }

    #[test]
    fn test_art_for_first_keyword_wins() {
        // Contains both "spider" and "golden"; spider is checked first.
        assert_eq!(art_for("Golden Spider Monkey"), SPIDER_ART);
    }
}
