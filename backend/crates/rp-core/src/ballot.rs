//! Turns a raw `{option: position}` submission into a validated [`Vote`].

use crate::{CoreError, Rank, Result as CoreErrorResult, Vote};

use std::collections::HashMap;

/// Build a ballot for `username` against the poll's `options`.
///
/// Every option must be ranked with a position in `1..=options.len()`.
/// Options are checked in poll order, so the first offending option is the
/// one reported. Entries for options the poll does not have are ignored.
pub fn build_vote(
    username: &str,
    options: &[String],
    positions: &HashMap<String, u32>,
) -> CoreErrorResult<Vote> {
    let max = u32::try_from(options.len()).unwrap_or(u32::MAX);
    let mut ranking = Vec::with_capacity(options.len());

    for option in options {
        let position = *positions
            .get(option)
            .ok_or_else(|| CoreError::incomplete_ballot(option))?;

        if position == 0 {
            return Err(CoreError::zero_rank(option));
        }

        if position > max {
            return Err(CoreError::rank_out_of_range(option, position, max));
        }

        ranking.push(Rank::new(option.clone(), position));
    }

    Ok(Vote {
        username: username.to_string(),
        ranking,
    })
}
