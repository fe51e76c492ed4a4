/// Half-open `[start, end)` range into the full id list for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// `page` is 1-based; a page of 0 is treated as 1.
    pub fn new(page: u32, size: usize) -> Self {
        let index = (page.max(1) - 1) as usize;
        let start = index.saturating_mul(size);
        Self {
            start,
            end: start.saturating_add(size),
        }
    }

    /// Slice `list` to this window, clamped to the list bounds.
    pub fn slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        let start = self.start.min(list.len());
        let end = self.end.min(list.len());
        &list[start..end]
    }
}
