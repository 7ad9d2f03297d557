//! Ranked-choice tally.
//!
//! Round `r` gives every voter `r` points to spend: one for each option they
//! ranked at position `r` or better. The first round whose leader is unique
//! and holds more than `total / n` points decides the poll. The last round
//! always decides it.

use crate::{PollSummary, Vote};

use std::collections::BTreeMap;

use log::debug;

/// Compute the summary of a poll over `options` from the cast `votes`.
pub fn compute_summary(options: &[String], votes: &BTreeMap<String, Vote>) -> PollSummary {
    let mut summary = PollSummary::default();
    let option_count = u32::try_from(options.len()).unwrap_or(u32::MAX);

    for round in 1..=option_count {
        let round_tally = tally_round(votes, round);
        let total: u32 = round_tally.values().sum();
        let leader = leader_of(&round_tally);

        let (winner, winner_count, is_unique) = match leader {
            Some((option, count, unique)) => (Some(option.to_string()), count, unique),
            None => (None, 0, true),
        };

        summary.rounds.push(round_tally);

        let more_than_fraction = winner_count > total / option_count;
        debug!(
            "Round {round}: leader={winner:?} unique={is_unique} {winner_count} > ({total} / {option_count})"
        );

        if (more_than_fraction && is_unique) || round == option_count {
            debug!("Winner: {winner:?}");
            summary.winner = winner;
            summary.winner_vote_count = winner_count;
            summary.total_vote_count = total;
            break;
        }
    }

    summary
}

/// Points per option counting every rank at `round` or better
fn tally_round(votes: &BTreeMap<String, Vote>, round: u32) -> BTreeMap<String, u32> {
    let mut tally = BTreeMap::new();
    for vote in votes.values() {
        for rank in vote.ranking.iter().filter(|rank| rank.position <= round) {
            *tally.entry(rank.option.clone()).or_insert(0) += 1;
        }
    }
    tally
}

/// Highest-scoring option, its score, and whether no other option ties it.
/// On a tie the lexicographically smallest option is reported.
fn leader_of(tally: &BTreeMap<String, u32>) -> Option<(&str, u32, bool)> {
    let mut leader: Option<(&str, u32, bool)> = None;
    for (option, &count) in tally {
        leader = match leader {
            Some((_, max, _)) if count > max => Some((option.as_str(), count, true)),
            Some((best, max, _)) if count == max => Some((best, max, false)),
            None => Some((option.as_str(), count, true)),
            unchanged => unchanged,
        };
    }
    leader
}
