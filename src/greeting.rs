use std::io::{self, BufRead, Write};

/// Message used for any label that is not a known card type.
pub const DEFAULT_GREETING: &str = "Best wishes!";

/// The kinds of greeting card the picker knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Birthday,
    Anniversary,
    ThankYou,
    Congratulations,
    GetWell,
    Sympathy,
}

impl CardType {
    /// All card types, in the order they are listed to the user.
    pub const ALL: [CardType; 6] = [
        CardType::Birthday,
        CardType::Anniversary,
        CardType::ThankYou,
        CardType::Congratulations,
        CardType::GetWell,
        CardType::Sympathy,
    ];

    /// Lowercase lookup key.
    pub fn key(self) -> &'static str {
        match self {
            CardType::Birthday => "birthday",
            CardType::Anniversary => "anniversary",
            CardType::ThankYou => "thank_you",
            CardType::Congratulations => "congratulations",
            CardType::GetWell => "get_well",
            CardType::Sympathy => "sympathy",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CardType::Birthday => "Happy Birthday! Wishing you a fantastic year ahead.",
            CardType::Anniversary => "Happy Anniversary! May your love continue to grow.",
            CardType::ThankYou => "Thank you so much! Your kindness is appreciated.",
            CardType::Congratulations => "Congratulations! Wishing you all the best.",
            CardType::GetWell => "Get well soon! Wishing you a speedy recovery.",
            CardType::Sympathy => "With deepest sympathy during your time of loss.",
        }
    }

    /// Match a free-text label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<CardType> {
        let normalized = label.trim().to_lowercase();
        CardType::ALL
            .into_iter()
            .find(|card| card.key() == normalized)
    }
}

/// The greeting for a label, falling back to [`DEFAULT_GREETING`].
pub fn greeting_for(label: &str) -> &'static str {
    CardType::from_label(label).map_or(DEFAULT_GREETING, CardType::message)
}

/// Comma separated list of the known keys.
pub fn available_card_types() -> String {
    CardType::ALL
        .iter()
        .map(|card| card.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run one interactive round: banner, prompt, a single line of input, message.
///
/// End of input counts as an empty answer.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Welcome to the Greeting Card Generator!")?;
    writeln!(output, "Available card types: {}", available_card_types())?;
    write!(output, "Enter the type of greeting card: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    writeln!(output)?;
    writeln!(output, "--- Your Greeting Card ---")?;
    writeln!(output, "{}", greeting_for(&line))?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    mod greeting_for {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn known_labels_in_any_case() {
                let cases = [
                    ("Birthday", CardType::Birthday),
                    ("ANNIVERSARY", CardType::Anniversary),
                    ("thank_you", CardType::ThankYou),
                    ("congratulations", CardType::Congratulations),
                    ("Get_Well", CardType::GetWell),
                    ("Sympathy", CardType::Sympathy),
                ];
                for (label, card) in cases {
                    assert_eq!(greeting_for(label), card.message(), "label {label}");
                }
            }

            #[test]
            fn surrounding_whitespace_is_ignored() {
                assert_eq!(
                    greeting_for("  birthday\n"),
                    "Happy Birthday! Wishing you a fantastic year ahead."
                );
            }

            #[test]
            fn unknown_labels_fall_back() {
                for label in ["", "   ", "\t\n", "wedding", "thank you", "birthdays"] {
                    assert_eq!(greeting_for(label), DEFAULT_GREETING, "label {label:?}");
                }
            }

            #[test]
            fn keys_are_lowercase_and_unique() {
                let keys: Vec<&str> = CardType::ALL.iter().map(|c| c.key()).collect();
                for key in &keys {
                    assert_eq!(*key, key.to_lowercase());
                }
                let mut deduped = keys.clone();
                deduped.sort_unstable();
                deduped.dedup();
                assert_eq!(deduped.len(), keys.len());
            }

            #[test]
            fn available_list_matches_keys() {
                assert_eq!(
                    available_card_types(),
                    "birthday, anniversary, thank_you, congratulations, get_well, sympathy"
                );
            }
        }

        mod prop {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                /// anything that does not normalize to a key gets the fallback
                #[test]
                fn unknown_strings_fall_back(label in "\\PC{0,24}") {
                    let normalized = label.trim().to_lowercase();
                    prop_assume!(CardType::ALL.iter().all(|c| c.key() != normalized));
                    prop_assert_eq!(greeting_for(&label), DEFAULT_GREETING);
                }

                /// case and padding never change the result for a known key
                #[test]
                fn case_and_padding_insensitive(
                    index in 0usize..6,
                    upper in proptest::collection::vec(proptest::bool::ANY, 16),
                    pad_left in " {0,3}",
                    pad_right in "[ \t]{0,3}"
                ) {
                    let card = CardType::ALL[index];
                    let mixed: String = card
                        .key()
                        .chars()
                        .zip(upper.iter().cycle())
                        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                        .collect();
                    let label = format!("{pad_left}{mixed}{pad_right}");
                    prop_assert_eq!(greeting_for(&label), card.message());
                }
            }
        }
    }

    mod run_session {
        use super::*;

        fn session(stdin: &str) -> String {
            let mut out = Vec::new();
            run_session(Cursor::new(stdin.as_bytes()), &mut out).unwrap();
            String::from_utf8(out).unwrap()
        }

        #[test]
        fn prints_banner_prompt_and_message() {
            let out = session("Birthday\n");
            assert_eq!(
                out,
                "Welcome to the Greeting Card Generator!\n\
                 Available card types: birthday, anniversary, thank_you, congratulations, get_well, sympathy\n\
                 Enter the type of greeting card: \n\
                 --- Your Greeting Card ---\n\
                 Happy Birthday! Wishing you a fantastic year ahead.\n"
            );
        }

        #[test]
        fn unknown_input_gets_fallback() {
            let out = session("graduation\n");
            assert!(out.ends_with("--- Your Greeting Card ---\nBest wishes!\n"));
        }

        #[test]
        fn empty_input_gets_fallback() {
            let out = session("");
            assert!(out.ends_with("Best wishes!\n"));
        }

        #[test]
        fn only_first_line_is_read() {
            let out = session("wedding\nbirthday\n");
            assert!(out.ends_with("Best wishes!\n"));
        }
    }
}
