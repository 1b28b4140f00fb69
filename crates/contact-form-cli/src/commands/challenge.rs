use colored::Colorize;
use contact_form::{ChallengeSource, RandomChallenges};

pub fn execute(seed: Option<u64>) {
    let mut challenges = match seed {
        Some(seed) => RandomChallenges::seeded(seed),
        None => RandomChallenges::from_entropy(),
    };
    let challenge = challenges.next_challenge();
    println!("{} {}", "What is".bold(), challenge.question().cyan().bold());
}
