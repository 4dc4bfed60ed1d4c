//! Renders result sets as terminal and file reports.

use crate::count::FlairCounter;
use crate::tally::{FlairRecord, ResultSet};
use indoc::formatdoc;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// How the title table displays a record whose flair had no secondary label.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SecondaryDisplay {
    /// Repeat the primary label in the secondary column.
    ///
    /// This matches the historical display, where a one-part flair filled
    /// both columns.
    #[default]
    DuplicatePrimary,

    /// Leave the secondary column empty.
    Blank,
}

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    details: bool,
    titles: bool,
    secondary_display: SecondaryDisplay,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use flairtally::view::ViewOptions;
    /// let opts = ViewOptions::build().titles(true).details(true).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    details: bool,
    titles: bool,
    secondary_display: SecondaryDisplay,
}

impl ViewOptionsBuilder {
    /// Sets whether the ranked flair sections are included.
    pub fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Sets whether the per-post title table is included.
    pub fn titles(mut self, titles: bool) -> Self {
        self.titles = titles;
        self
    }

    /// Sets how a missing secondary label is displayed in the title table.
    pub fn secondary_display(mut self, secondary_display: SecondaryDisplay) -> Self {
        self.secondary_display = secondary_display;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions {
            details: self.details,
            titles: self.titles,
            secondary_display: self.secondary_display,
        }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

impl Viewable for ResultSet {
    /// Renders the full report: the results count, the title table if
    /// requested, and the two ranked flair sections if requested.
    ///
    /// Rendering does not modify the result set, so the same frozen set
    /// renders to identical text every time.
    fn view(&self, opts: &ViewOptions) -> String {
        let mut out = format!("Number of results: {}\n\n", self.count());
        if opts.titles {
            out.push_str(&title_table(self.records(), opts.secondary_display));
            out.push('\n');
        }
        if opts.details {
            out.push_str(&ranked_sections(self.primary(), self.secondary()));
        }
        out
    }
}

/// Writes the same report the console prints to an explicit `sink`.
///
/// The output is byte-identical to what [`Viewable::view`] produces for the
/// same options. Partial writes are not rolled back on error.
pub fn export<W: Write>(mut sink: W, results: &ResultSet, opts: &ViewOptions) -> io::Result<()> {
    sink.write_all(results.view(opts).as_bytes())
}

/// Writes the report to a newly created file at `path`.
pub fn export_to_path<P: AsRef<Path>>(
    path: P,
    results: &ResultSet,
    opts: &ViewOptions,
) -> io::Result<()> {
    let file = File::create(path)?;
    export(file, results, opts)
}

fn title_table<'a>(
    records: impl Iterator<Item = &'a FlairRecord>,
    convention: SecondaryDisplay,
) -> String {
    let rows = records
        .map(|record| {
            let secondary = match (record.secondary(), convention) {
                (Some(secondary), _) => secondary,
                (None, SecondaryDisplay::DuplicatePrimary) => record.primary(),
                (None, SecondaryDisplay::Blank) => "",
            };
            format!("\"{}\", {}, {}", record.title(), record.primary(), secondary)
        })
        .join("\n");
    formatdoc! {r#"
        "Post Title", Primary Flair, Secondary Flair
        --------------------------------------------
        {rows}
    "#}
}

fn ranked_sections(primary: &FlairCounter, secondary: &FlairCounter) -> String {
    formatdoc! {"
        Primary flairs:
        ---------------
        {primary}

        Secondary flairs:
        -----------------
        {secondary}
    ",
        primary = ranked_rows(primary),
        secondary = ranked_rows(secondary),
    }
}

fn ranked_rows(counter: &FlairCounter) -> String {
    counter
        .ranked()
        .map(|(label, count)| format!("{label}, {count}"))
        .join("\n")
}

#[cfg(test)]
mod tests {
    mod view_options {
        use super::super::*;

        #[test]
        fn it_returns_default_options() {
            let opts = ViewOptions::default();
            assert!(!opts.details);
            assert!(!opts.titles);
            assert_eq!(opts.secondary_display, SecondaryDisplay::DuplicatePrimary);
        }

        #[test]
        fn it_returns_custom_options() {
            let opts = ViewOptions::build()
                .details(true)
                .titles(true)
                .secondary_display(SecondaryDisplay::Blank)
                .build();
            assert!(opts.details);
            assert!(opts.titles);
            assert_eq!(opts.secondary_display, SecondaryDisplay::Blank);
        }

        #[test]
        fn it_returns_custom_options_with_only_details() {
            let opts = ViewOptions::build().details(true).build();
            assert!(opts.details);
            assert!(!opts.titles);
            assert_eq!(opts.secondary_display, SecondaryDisplay::DuplicatePrimary);
        }
    }

    mod format_report {
        use super::super::*;
        use crate::flair::SplitRule;
        use crate::test_utils::load_output;
        use pretty_assertions::assert_eq;

        fn sample_results() -> ResultSet {
            let mut results = ResultSet::new(SplitRule::default());
            results.ingest("Game thread", ":osu: Ohio State • Big Ten");
            results.ingest("Scores", ":mich: Michigan • Big Ten");
            results.ingest("Highlights", "None");
            results
        }

        #[test]
        fn it_formats_the_results_count() {
            let results = sample_results();
            let actual = results.view(&ViewOptions::default());
            assert_eq!(actual, "Number of results: 3\n\n");
        }

        #[test]
        fn it_formats_the_ranked_sections() {
            let results = sample_results();
            let opts = ViewOptions::build().details(true).build();
            let actual = results.view(&opts);
            let expected = "Number of results: 3\n\n\
                            Primary flairs:\n\
                            ---------------\n\
                            Ohio State, 1\n\
                            Michigan, 1\n\
                            None, 1\n\
                            \n\
                            Secondary flairs:\n\
                            -----------------\n\
                            Big Ten, 2\n";
            assert_eq!(actual, expected);
        }

        #[test]
        fn it_duplicates_the_primary_for_one_part_flairs() {
            let results = sample_results();
            let opts = ViewOptions::build().titles(true).build();
            let actual = results.view(&opts);
            assert!(actual.contains("\"Highlights\", None, None"));
        }

        #[test]
        fn it_leaves_the_secondary_blank_when_configured() {
            let results = sample_results();
            let opts = ViewOptions::build()
                .titles(true)
                .secondary_display(SecondaryDisplay::Blank)
                .build();
            let actual = results.view(&opts);
            assert!(actual.contains("\"Highlights\", None, \n"));
        }

        #[tokio::test]
        async fn it_formats_a_full_report() {
            let results = crate::test_utils::cfb_result_set().await;
            let opts = ViewOptions::build().titles(true).details(true).build();
            let actual = results.view(&opts);
            let expected = load_output("report_cfb");
            assert_eq!(actual.trim_end(), expected);
        }

        #[test]
        fn it_renders_identical_text_twice() {
            let results = sample_results();
            let opts = ViewOptions::build().titles(true).details(true).build();
            assert_eq!(results.view(&opts), results.view(&opts));
        }

        #[test]
        fn it_renders_an_empty_result_set() {
            let results = ResultSet::new(SplitRule::default());
            let actual = results.view(&ViewOptions::default());
            assert_eq!(actual, "Number of results: 0\n\n");
        }
    }

    mod export {
        use super::super::*;
        use crate::flair::SplitRule;
        use pretty_assertions::assert_eq;

        fn sample_results() -> ResultSet {
            let mut results = ResultSet::new(SplitRule::default());
            results.ingest("Game thread", "Ohio State • Big Ten");
            results
        }

        #[test]
        fn it_writes_the_console_report_to_a_sink() {
            let results = sample_results();
            let opts = ViewOptions::build().titles(true).details(true).build();
            let mut sink: Vec<u8> = Vec::new();
            export(&mut sink, &results, &opts).unwrap();
            assert_eq!(String::from_utf8(sink).unwrap(), results.view(&opts));
        }

        #[test]
        fn it_propagates_errors_for_unwritable_paths() {
            let results = sample_results();
            let opts = ViewOptions::default();
            let path = std::env::temp_dir()
                .join("flairtally-no-such-dir")
                .join("report.txt");
            let result = export_to_path(&path, &results, &opts);
            assert!(result.is_err());
            // The console sink is unaffected by the failed export.
            assert_eq!(results.view(&opts), "Number of results: 1\n\n");
        }
    }
}
