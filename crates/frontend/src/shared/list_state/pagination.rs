/// Page arithmetic over `limit`/`offset`/`total`.
///
/// `offset` is kept on the page grid. An offset at or past `total` (a stale
/// or hand-edited URL) shows an empty range and steps back to the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl PageWindow {
    pub fn new(total: u64, limit: u32, offset: u32) -> Self {
        let limit = limit.max(1);
        Self {
            total,
            limit,
            offset: offset - offset % limit,
        }
    }

    /// Zero-based, clamped to the last page.
    pub fn page_index(&self) -> u32 {
        (self.offset / self.limit).min(self.page_count() - 1)
    }

    pub fn is_past_end(&self) -> bool {
        self.offset > 0 && u64::from(self.offset) >= self.total
    }

    /// Never below 1, so an empty result still reads "1 / 1".
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.limit)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < self.total
    }

    pub fn prev_offset(&self) -> u32 {
        if self.is_past_end() {
            return self.last_offset();
        }
        self.offset.saturating_sub(self.limit)
    }

    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }

    pub fn last_offset(&self) -> u32 {
        (self.page_count() - 1).saturating_mul(self.limit)
    }

    /// `"{from}–{to} of {total}"`, or `"0–0 of {total}"` when the page is
    /// empty.
    pub fn range_label(&self) -> String {
        if self.total == 0 || self.is_past_end() {
            return format!("0–0 of {}", self.total);
        }
        let from = u64::from(self.offset) + 1;
        let to = (u64::from(self.offset) + u64::from(self.limit)).min(self.total);
        format!("{}–{} of {}", from, to, self.total)
    }
}
