//! French spelling of amounts for receipts.

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze", "douze",
    "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

/// Spell a non-negative integer in French.
///
/// Follows the traditional rules: "et un" for 21..61 and 71, plural "s" on
/// "quatre-vingts" and "cents" only when nothing follows, "mille" invariable.
pub fn number_to_french_words(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let scales: [(u64, &str, &str); 3] = [
        (1_000_000_000, "milliard", "milliards"),
        (1_000_000, "million", "millions"),
        (1_000, "mille", "mille"),
    ];

    let mut rest = n;
    for (scale, singular, plural) in scales {
        let count = rest / scale;
        rest %= scale;
        if count == 0 {
            continue;
        }
        if scale == 1_000 {
            // "mille", never "un mille"; the hundreds before it stay singular
            if count > 1 {
                parts.push(below_thousand(count, false));
            }
            parts.push(singular.to_string());
        } else {
            // Only milliards can reach four digits
            let words = if count >= 1000 {
                number_to_french_words(count)
            } else {
                below_thousand(count, true)
            };
            parts.push(words);
            parts.push(if count > 1 { plural } else { singular }.to_string());
        }
    }

    if rest > 0 {
        parts.push(below_thousand(rest, true));
    }

    parts.join(" ")
}

/// Spell 1..=999. `final_position` controls the plural "s" on
/// "cents" and "quatre-vingts", which drops before "mille".
fn below_thousand(n: u64, final_position: bool) -> String {
    debug_assert!(n > 0 && n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;

    let mut words = String::new();
    if hundreds > 0 {
        if hundreds > 1 {
            words.push_str(UNITS[hundreds as usize]);
            words.push(' ');
        }
        words.push_str("cent");
        if hundreds > 1 && rest == 0 && final_position {
            words.push('s');
        }
    }

    if rest > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        words.push_str(&below_hundred(rest, final_position));
    }

    words
}

fn below_hundred(n: u64, final_position: bool) -> String {
    debug_assert!(n > 0 && n < 100);
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens} et un"),
                unit => format!("{tens}-{}", UNITS[unit as usize]),
            }
        }
        70..=79 => {
            if n == 71 {
                "soixante et onze".to_string()
            } else {
                format!("soixante-{}", below_hundred(n - 60, final_position))
            }
        }
        _ => {
            if n == 80 {
                if final_position {
                    "quatre-vingts".to_string()
                } else {
                    "quatre-vingt".to_string()
                }
            } else {
                format!("quatre-vingt-{}", below_hundred(n - 80, final_position))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::number_to_french_words as words;

    #[test]
    fn test_units_and_teens() {
        assert_eq!(words(0), "zéro");
        assert_eq!(words(1), "un");
        assert_eq!(words(16), "seize");
        assert_eq!(words(17), "dix-sept");
        assert_eq!(words(19), "dix-neuf");
    }

    #[test]
    fn test_tens_with_et_un() {
        assert_eq!(words(20), "vingt");
        assert_eq!(words(21), "vingt et un");
        assert_eq!(words(22), "vingt-deux");
        assert_eq!(words(61), "soixante et un");
    }

    #[test]
    fn test_seventies_to_nineties() {
        assert_eq!(words(70), "soixante-dix");
        assert_eq!(words(71), "soixante et onze");
        assert_eq!(words(77), "soixante-dix-sept");
        assert_eq!(words(80), "quatre-vingts");
        assert_eq!(words(81), "quatre-vingt-un");
        assert_eq!(words(91), "quatre-vingt-onze");
        assert_eq!(words(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(words(100), "cent");
        assert_eq!(words(101), "cent un");
        assert_eq!(words(200), "deux cents");
        assert_eq!(words(280), "deux cent quatre-vingts");
        assert_eq!(words(305), "trois cent cinq");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words(1000), "mille");
        assert_eq!(words(1001), "mille un");
        assert_eq!(words(2000), "deux mille");
        assert_eq!(words(15_000), "quinze mille");
        assert_eq!(words(32_500), "trente-deux mille cinq cents");
        assert_eq!(words(65_000), "soixante-cinq mille");
        assert_eq!(words(80_000), "quatre-vingt mille");
        assert_eq!(words(200_000), "deux cent mille");
    }

    #[test]
    fn test_millions() {
        assert_eq!(words(1_000_000), "un million");
        assert_eq!(words(2_500_000), "deux millions cinq cent mille");
        assert_eq!(words(1_000_000_000), "un milliard");
    }
}
