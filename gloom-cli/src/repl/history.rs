use std::collections::VecDeque;

/**
Previously entered lines, oldest first, capped at `capacity`.

`cursor` points into `entries` while the user is browsing with up/down. It
sits one past the newest entry when they aren't.
*/
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Records a line and stops browsing. Blank lines and immediate repeats aren't kept.
    pub fn push(&mut self, line: &str) {
        let repeated = self.entries.back().map_or(false, |last| last == line);
        if !line.trim().is_empty() && !repeated && self.capacity > 0 {
            if self.entries.len() == self.capacity {
                self.entries.pop_front();
            }
            self.entries.push_back(String::from(line));
        }
        self.cursor = self.entries.len();
    }

    /// One entry further back, staying on the oldest.
    pub fn older(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// One entry forward. `None` once the cursor moves past the newest entry.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
