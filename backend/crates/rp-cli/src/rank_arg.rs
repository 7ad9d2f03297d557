/// Parse `OPTION=POSITION`. The last `=` splits, so option names may
/// contain `=`.
pub(crate) fn parse_rank(raw: &str) -> Result<(String, u32), String> {
    let (option, position) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected OPTION=POSITION, got '{raw}'"))?;

    if option.is_empty() {
        return Err(format!("missing option name in '{raw}'"));
    }

    let position = position
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid position in '{raw}': {e}"))?;

    Ok((option.to_string(), position))
}
