//! Aggregates decomposed flairs into the tallies for one run.

use crate::count::FlairCounter;
use crate::flair::{Flair, SplitRule};

/// One ingested post: its title and its decomposed flair.
#[derive(Clone, Debug)]
pub struct FlairRecord {
    title: String,
    flair: Flair,
}

impl FlairRecord {
    /// The post's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The primary flair label.
    pub fn primary(&self) -> &str {
        self.flair.primary()
    }

    /// The secondary flair label, if the flair had one.
    ///
    /// This is the true decomposition result; sinks that display a missing
    /// secondary as a copy of the primary apply that convention themselves.
    pub fn secondary(&self) -> Option<&str> {
        self.flair.secondary()
    }
}

/// The aggregate of every record ingested during one run.
///
/// A `ResultSet` grows monotonically while records stream in, then is
/// handed immutably to the presentation sinks. A partially fed set is
/// always valid to render.
#[derive(Debug)]
pub struct ResultSet {
    rule: SplitRule,
    records: Vec<FlairRecord>,
    primary: FlairCounter,
    secondary: FlairCounter,
}

impl ResultSet {
    /// Creates an empty result set whose flairs will be decomposed with
    /// `rule`.
    pub fn new(rule: SplitRule) -> Self {
        Self {
            rule,
            records: Vec::new(),
            primary: FlairCounter::new(),
            secondary: FlairCounter::new(),
        }
    }

    /// Ingests one post.
    ///
    /// The flair text is decomposed with the run's rule; the primary
    /// counter is always incremented, the secondary counter only when the
    /// decomposition actually produced two parts. Every call appends a
    /// record, so after any number of calls the primary counter total
    /// equals the number of records and the secondary total never exceeds
    /// it.
    pub fn ingest(&mut self, title: impl Into<String>, flair_text: &str) {
        let flair = self.rule.decompose(flair_text);
        self.primary.increment(flair.primary());
        if let Some(secondary) = flair.secondary() {
            self.secondary.increment(secondary);
        }
        self.records.push(FlairRecord {
            title: title.into(),
            flair,
        });
    }

    /// The number of records ingested so far.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ingested records, in arrival order.
    pub fn records(&self) -> impl Iterator<Item = &FlairRecord> {
        self.records.iter()
    }

    /// The primary-label frequency counter.
    pub fn primary(&self) -> &FlairCounter {
        &self.primary
    }

    /// The secondary-label frequency counter.
    pub fn secondary(&self) -> &FlairCounter {
        &self.secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::LabelCount;

    fn cfb_results() -> ResultSet {
        let mut results = ResultSet::new(SplitRule::default());
        results.ingest("Game thread", "Tag: Ohio State • Big Ten");
        results.ingest("Post game thread", "Tag: Michigan • Big Ten");
        results.ingest("Rivalry discussion", "Tag: Ohio State • Big Ten");
        results
    }

    #[test]
    fn it_tallies_primary_and_secondary_labels() {
        let results = cfb_results();
        assert_eq!(results.count(), 3);
        assert_eq!(results.primary().get("Ohio State"), 2);
        assert_eq!(results.primary().get("Michigan"), 1);
        assert_eq!(results.secondary().get("Big Ten"), 3);
    }

    #[test]
    fn it_ranks_the_primary_labels() {
        let results = cfb_results();
        let ranked: Vec<LabelCount> = results.primary().ranked().collect();
        let expected = vec![
            (String::from("Ohio State"), 2),
            (String::from("Michigan"), 1),
        ];
        assert_eq!(ranked, expected);
    }

    #[test]
    fn it_does_not_count_a_secondary_for_single_part_flairs() {
        let mut results = cfb_results();
        results.ingest("Unflaired post", "None");
        assert_eq!(results.primary().get("None"), 1);
        assert_eq!(results.secondary().total(), 3);
    }

    #[test]
    fn it_counts_every_record_in_the_primary_counter() {
        let mut results = ResultSet::new(SplitRule::default());
        let flairs = ["Ohio State • Big Ten", "None", "", "Alabama"];
        for (n, flair) in flairs.iter().enumerate() {
            results.ingest(format!("post {n}"), flair);
            assert_eq!(results.primary().total(), results.count());
            assert!(results.secondary().total() <= results.count());
        }
        assert_eq!(results.count(), 4);
    }

    #[test]
    fn it_does_not_deduplicate_records() {
        let mut results = ResultSet::new(SplitRule::default());
        results.ingest("same post", "Ohio State • Big Ten");
        results.ingest("same post", "Ohio State • Big Ten");
        assert_eq!(results.count(), 2);
        assert_eq!(results.primary().get("Ohio State"), 2);
    }

    #[test]
    fn it_keeps_records_in_arrival_order() {
        let results = cfb_results();
        let titles: Vec<&str> = results.records().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec!["Game thread", "Post game thread", "Rivalry discussion"]
        );
    }

    #[test]
    fn it_stores_the_true_secondary_on_each_record() {
        let mut results = ResultSet::new(SplitRule::default());
        results.ingest("flaired", "Ohio State • Big Ten");
        results.ingest("unflaired", "None");
        let records: Vec<&FlairRecord> = results.records().collect();
        assert_eq!(records[0].secondary(), Some("Big Ten"));
        assert_eq!(records[1].secondary(), None);
    }
}
