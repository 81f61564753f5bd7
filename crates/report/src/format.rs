use std::fmt::Write;

/// The two report lines emitted after every counted sort, plus the trailing
/// blank line. The wording is fixed output format, not free prose.
pub fn sort_report(len: usize, comparisons: u64) -> String {
    format!("Number of values in array: {len}\nNumber of comparisons required: {comparisons}\n")
}

pub fn algorithm_header(display_name: &str) -> String {
    format!("SORTING ALGORITHM: {display_name}")
}

fn bracketed_list(values: &[i32]) -> String {
    let mut out = String::from("[");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v}");
    }
    out.push(']');
    out
}

/// Deferred verbatim dump of the showcase-sized array for each algorithm.
/// Unsorted/sorted snapshots are recorded as the run progresses and emitted
/// as one block after every kernel has finished.
#[derive(Debug, Default)]
pub struct ShowcaseBlock {
    sections: String,
}

impl ShowcaseBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unsorted(&mut self, display_name: &str, values: &[i32]) {
        if !self.sections.is_empty() {
            self.sections.push('\n');
        }
        let _ = writeln!(self.sections, "Unsorted array for {display_name}:");
        let _ = writeln!(self.sections, "{}", bracketed_list(values));
    }

    pub fn record_sorted(&mut self, values: &[i32]) {
        let _ = writeln!(self.sections, "Sorted array:");
        let _ = writeln!(self.sections, "{}", bracketed_list(values));
    }

    pub fn into_block(self) -> String {
        self.sections
    }
}
