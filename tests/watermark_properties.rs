// tests/watermark_properties.rs

mod common;
use crate::common::builders::WatchConfigBuilder;

use std::sync::Arc;

use proptest::prelude::*;

use dirwatch::fs::mock::MockFileSystem;
use dirwatch::watch::Reconciler;

#[derive(Debug, Clone)]
enum Op {
    /// Append lines; `true` lines contain the magic string.
    Append(Vec<bool>),
    Poll,
}

fn line_strategy() -> impl Strategy<Value = bool> {
    prop_oneof![3 => Just(false), 1 => Just(true)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::collection::vec(line_strategy(), 1..6).prop_map(Op::Append),
        Just(Op::Poll),
    ]
}

fn render(is_match: bool, n: usize) -> String {
    if is_match {
        // Several occurrences in one line must still count once.
        format!("line {n}: MaGiC and magic\n")
    } else {
        format!("line {n}: nothing here\n")
    }
}

proptest! {
    #[test]
    fn every_matching_line_is_reported_exactly_once(
        ops in proptest::collection::vec(op_strategy(), 1..30)
    ) {
        let fs = MockFileSystem::new();
        fs.add_file("/watch/a.txt", "");
        let cfg = WatchConfigBuilder::new("/watch").ext(".txt").build();
        let mut rec = Reconciler::new(Arc::new(fs.clone()), &cfg);

        let mut total_lines = 0usize;
        let mut expected_matches = Vec::new();
        let mut reported = Vec::new();

        for op in ops.into_iter().chain(std::iter::once(Op::Poll)) {
            match op {
                Op::Append(lines) => {
                    for is_match in lines {
                        total_lines += 1;
                        if is_match {
                            expected_matches.push(total_lines);
                        }
                        fs.append("/watch/a.txt", render(is_match, total_lines));
                    }
                }
                Op::Poll => {
                    let report = rec.pass().unwrap();
                    let lines = report.lines_for("a.txt");

                    // Strictly above everything reported before.
                    if let (Some(last), Some(first_new)) = (reported.last(), lines.first()) {
                        prop_assert!(first_new > last);
                    }
                    reported.extend(lines);
                }
            }
        }

        prop_assert_eq!(&reported, &expected_matches);
        prop_assert_eq!(
            rec.ledger().get("a.txt"),
            Some(expected_matches.last().copied().unwrap_or(0))
        );

        // Nothing changed since the last poll.
        let idle = rec.pass().unwrap();
        prop_assert!(idle.matches.is_empty());
    }
}
