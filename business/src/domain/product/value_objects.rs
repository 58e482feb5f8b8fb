/// Result-count cap requested when listing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(usize);

impl ListLimit {
    /// Parses a raw `limit` query value.
    ///
    /// Only the leading integer part counts, so `"2.5"` and `"3items"` cap
    /// the listing at 2 and 3. Returns `None` when there is no leading digit
    /// or the value is not positive, in which case the full collection is
    /// listed.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first()? {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let digits = &unsigned[..digits_len];
        if negative || digits.trim_start_matches('0').is_empty() {
            return None;
        }
        Some(Self(digits.parse().unwrap_or(usize::MAX)))
    }

    pub fn new(limit: usize) -> Option<Self> {
        (limit > 0).then_some(Self(limit))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}
