use chrono::DateTime;
use har::error::RequiredAttribute;
use har::types::*;
use har::validate::missing_attributes;
use proptest::prelude::*;

fn valid_request() -> Request {
    Request {
        method: Some("GET".to_string()),
        url: Some("https://example.org/".to_string()),
        http_version: Some("HTTP/1.1".to_string()),
        cookies: Some(vec![]),
        headers: Some(vec![]),
        query_string: Some(vec![]),
        post_data: None,
    }
}

fn valid_entry() -> Entry {
    Entry {
        pageref: None,
        started_date_time: Some(
            DateTime::parse_from_rfc3339("2017-03-19T20:52:35+01:00").unwrap(),
        ),
        time: Some(1.0),
        request: Some(valid_request()),
    }
}

fn valid_page(id: &str) -> Page {
    Page {
        started_date_time: Some(
            DateTime::parse_from_rfc3339("2017-03-19T20:52:34+01:00").unwrap(),
        ),
        id: Some(id.to_string()),
        title: Some(id.to_string()),
        page_timings: Some(PageTimings::default()),
        comment: None,
    }
}

fn har_with_entries(entries: Vec<Option<Entry>>) -> Har {
    Har {
        log: Some(Log {
            version: Some("1.2".to_string()),
            creator: Some(CreatorBrowser {
                name: Some("tool-har".to_string()),
                version: Some("1.0".to_string()),
                comment: None,
            }),
            browser: None,
            pages: None,
            entries: Some(entries),
            comment: None,
        }),
    }
}

proptest! {
    /// Null list elements are tolerated: any mix of valid entries and nulls
    /// produces no violations at all.
    #[test]
    fn null_elements_never_produce_violations(layout in prop::collection::vec(any::<bool>(), 0..8)) {
        let entries = layout
            .iter()
            .map(|&is_null| if is_null { None } else { Some(valid_entry()) })
            .collect();
        let har = har_with_entries(entries);
        prop_assert_eq!(missing_attributes(Some(&har)), vec![]);
    }

    /// A single broken entry is reported once, at its raw index, regardless
    /// of how many null elements surround it.
    #[test]
    fn broken_entry_is_reported_at_its_raw_index(
        layout in prop::collection::vec(any::<bool>(), 1..8),
        broken in any::<prop::sample::Index>(),
    ) {
        let broken = broken.index(layout.len());
        let entries = layout
            .iter()
            .enumerate()
            .map(|(i, &is_null)| {
                if i == broken {
                    let mut entry = valid_entry();
                    entry.request.as_mut().unwrap().method = None;
                    Some(entry)
                } else if is_null {
                    None
                } else {
                    Some(valid_entry())
                }
            })
            .collect();
        let har = har_with_entries(entries);
        let expected = RequiredAttribute::new(
            &format!("log.entries[{}].request", broken),
            "method",
        );
        prop_assert_eq!(missing_attributes(Some(&har)), vec![expected]);
    }

    /// Inserting a null element at position k does not change the violation
    /// count and shifts only the raw indices at or after k.
    #[test]
    fn inserting_a_null_element_preserves_other_violations(
        size in 1usize..6,
        broken in any::<prop::sample::Index>(),
        insert_at in any::<prop::sample::Index>(),
    ) {
        let broken = broken.index(size);
        let insert_at = insert_at.index(size + 1);

        let mut entries: Vec<Option<Entry>> = (0..size).map(|_| Some(valid_entry())).collect();
        entries[broken].as_mut().unwrap().time = None;

        let before = missing_attributes(Some(&har_with_entries(entries.clone())));
        entries.insert(insert_at, None);
        let after = missing_attributes(Some(&har_with_entries(entries)));

        prop_assert_eq!(after.len(), before.len());
        let expected_index = if insert_at <= broken { broken + 1 } else { broken };
        let expected = RequiredAttribute::new(
            &format!("log.entries[{}]", expected_index),
            "time",
        );
        prop_assert_eq!(after, vec![expected]);
    }

    /// Two walks over the same unmutated model yield identical results.
    #[test]
    fn validation_is_order_stable(
        layout in prop::collection::vec(any::<bool>(), 0..6),
        drop_version in any::<bool>(),
    ) {
        let entries = layout
            .iter()
            .map(|&is_null| if is_null { None } else { Some(valid_entry()) })
            .collect();
        let mut har = har_with_entries(entries);
        if drop_version {
            har.log.as_mut().unwrap().version = None;
        }
        let first = missing_attributes(Some(&har));
        let second = missing_attributes(Some(&har));
        prop_assert_eq!(first, second);
    }
}

/// Nulling any single required scalar on an otherwise valid model adds
/// exactly one violation at the expected path. The table covers every
/// required scalar in the schema.
#[test]
fn nulling_each_required_scalar_adds_exactly_one_violation() {
    type Mutation = (fn(&mut Har), &'static str, &'static str);
    let mutations: &[Mutation] = &[
        (|h| h.log.as_mut().unwrap().version = None, "log", "version"),
        (
            |h| h.log.as_mut().unwrap().creator.as_mut().unwrap().name = None,
            "log.creator",
            "name",
        ),
        (
            |h| h.log.as_mut().unwrap().creator.as_mut().unwrap().version = None,
            "log.creator",
            "version",
        ),
        (
            |h| page_at(h, 0).started_date_time = None,
            "log.pages[0]",
            "startedDateTime",
        ),
        (|h| page_at(h, 0).id = None, "log.pages[0]", "id"),
        (|h| page_at(h, 1).title = None, "log.pages[1]", "title"),
        (
            |h| page_at(h, 1).page_timings = None,
            "log.pages[1]",
            "pageTimings",
        ),
        (
            |h| entry_at(h, 0).started_date_time = None,
            "log.entries[0]",
            "startedDateTime",
        ),
        (|h| entry_at(h, 1).time = None, "log.entries[1]", "time"),
        (
            |h| request_at(h, 0).method = None,
            "log.entries[0].request",
            "method",
        ),
        (
            |h| request_at(h, 0).url = None,
            "log.entries[0].request",
            "url",
        ),
        (
            |h| request_at(h, 1).http_version = None,
            "log.entries[1].request",
            "httpVersion",
        ),
    ];

    for (mutate, parent, attribute) in mutations {
        let mut har = full_har_with_pages();
        mutate(&mut har);
        assert_eq!(
            missing_attributes(Some(&har)),
            vec![RequiredAttribute::new(parent, attribute)],
            "nulling {}/{} should add exactly that violation",
            parent,
            attribute
        );
    }
}

fn full_har_with_pages() -> Har {
    let mut har = har_with_entries(vec![Some(valid_entry()), Some(valid_entry())]);
    har.log.as_mut().unwrap().pages =
        Some(vec![Some(valid_page("page_0")), Some(valid_page("page_1"))]);
    har
}

fn page_at(har: &mut Har, index: usize) -> &mut Page {
    har.log.as_mut().unwrap().pages.as_mut().unwrap()[index]
        .as_mut()
        .unwrap()
}

fn entry_at(har: &mut Har, index: usize) -> &mut Entry {
    har.log.as_mut().unwrap().entries.as_mut().unwrap()[index]
        .as_mut()
        .unwrap()
}

fn request_at(har: &mut Har, index: usize) -> &mut Request {
    entry_at(har, index).request.as_mut().unwrap()
}
