//! Required-attribute validation over a parsed HAR model.
//!
//! Returns **all** missing required attributes, not just the first.
//! Validation does not modify the model and never fails on tolerable input:
//! null list elements are skipped without being reported or dereferenced,
//! and absent optional attributes emit nothing.
//!
//! The walk is depth-first and pre-order, visiting attributes in schema
//! declaration order, so the result order is fully deterministic:
//!
//! ```text
//! log:      version, creator, browser, pages, entries
//! page:     startedDateTime, id, title, pageTimings
//! entry:    startedDateTime, time, request
//! request:  method, url, httpVersion, cookies, headers, queryString
//! ```
//!
//! When a required object is itself absent, exactly one violation is emitted
//! for the object and its attributes are not reported separately.

use crate::error::{AttributeRequiredError, RequiredAttribute};
use crate::types::{Cookie, CreatorBrowser, Entry, Har, Log, NameValuePair, Page, Request};

/// Collect every missing required attribute from the model.
///
/// A null root reports a single violation with parent `""` and attribute
/// `"har"`; a present root with a null log reports `("", "log")`. If nothing
/// is missing the list is empty.
pub fn missing_attributes(har: Option<&Har>) -> Vec<RequiredAttribute> {
    let mut missing = Vec::new();
    match har {
        None => missing.push(RequiredAttribute::new("", "har")),
        Some(har) => check_log("", har.log.as_ref(), &mut missing),
    }
    missing
}

/// Check the model and fail on the first missing required attribute.
///
/// The full list is always computed first so that "first" is well-defined by
/// the canonical walk order; only the head is reported.
pub fn check_required_attributes(har: Option<&Har>) -> Result<(), AttributeRequiredError> {
    let missing = missing_attributes(har);
    match missing.first() {
        Some(first) => Err(AttributeRequiredError {
            path: first.parent.clone(),
            attribute: first.attribute.clone(),
        }),
        None => Ok(()),
    }
}

fn check_log(parent: &str, log: Option<&Log>, missing: &mut Vec<RequiredAttribute>) {
    let Some(log) = log else {
        missing.push(RequiredAttribute::new(parent, "log"));
        return;
    };
    let path = child_path(parent, "log");
    if log.version.is_none() {
        missing.push(RequiredAttribute::new(&path, "version"));
    }
    check_creator_browser(&path, "creator", true, log.creator.as_ref(), missing);
    check_creator_browser(&path, "browser", false, log.browser.as_ref(), missing);
    // `pages` is optional: absent emits nothing, present is walked by index.
    if let Some(pages) = &log.pages {
        for (i, page) in pages.iter().enumerate() {
            if let Some(page) = page {
                check_page(&child_path(&path, &indexed("pages", i)), page, missing);
            }
        }
    }
    match &log.entries {
        None => missing.push(RequiredAttribute::new(&path, "entries")),
        Some(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                if let Some(entry) = entry {
                    check_entry(&child_path(&path, &indexed("entries", i)), entry, missing);
                }
            }
        }
    }
}

/// Shared creator/browser check. The two objects have identical shape but
/// different requiredness: a missing `creator` is a violation, a missing
/// `browser` is not.
fn check_creator_browser(
    parent: &str,
    attribute: &str,
    required: bool,
    tool: Option<&CreatorBrowser>,
    missing: &mut Vec<RequiredAttribute>,
) {
    match tool {
        None => {
            if required {
                missing.push(RequiredAttribute::new(parent, attribute));
            }
        }
        Some(tool) => {
            let path = child_path(parent, attribute);
            if tool.name.is_none() {
                missing.push(RequiredAttribute::new(&path, "name"));
            }
            if tool.version.is_none() {
                missing.push(RequiredAttribute::new(&path, "version"));
            }
        }
    }
}

fn check_page(path: &str, page: &Page, missing: &mut Vec<RequiredAttribute>) {
    if page.started_date_time.is_none() {
        missing.push(RequiredAttribute::new(path, "startedDateTime"));
    }
    if page.id.is_none() {
        missing.push(RequiredAttribute::new(path, "id"));
    }
    if page.title.is_none() {
        missing.push(RequiredAttribute::new(path, "title"));
    }
    // pageTimings must be present, but none of its own attributes are
    // required, so there is nothing to descend into.
    if page.page_timings.is_none() {
        missing.push(RequiredAttribute::new(path, "pageTimings"));
    }
}

fn check_entry(path: &str, entry: &Entry, missing: &mut Vec<RequiredAttribute>) {
    if entry.started_date_time.is_none() {
        missing.push(RequiredAttribute::new(path, "startedDateTime"));
    }
    if entry.time.is_none() {
        missing.push(RequiredAttribute::new(path, "time"));
    }
    match &entry.request {
        None => missing.push(RequiredAttribute::new(path, "request")),
        Some(request) => check_request(&child_path(path, "request"), request, missing),
    }
}

fn check_request(path: &str, request: &Request, missing: &mut Vec<RequiredAttribute>) {
    if request.method.is_none() {
        missing.push(RequiredAttribute::new(path, "method"));
    }
    if request.url.is_none() {
        missing.push(RequiredAttribute::new(path, "url"));
    }
    if request.http_version.is_none() {
        missing.push(RequiredAttribute::new(path, "httpVersion"));
    }
    check_name_value_list(path, "cookies", request.cookies.as_ref(), missing);
    check_name_value_list(path, "headers", request.headers.as_ref(), missing);
    check_name_value_list(path, "queryString", request.query_string.as_ref(), missing);
}

/// Common name/value requiredness shared by cookies, headers, and query
/// string parameters.
trait NameValue {
    fn name(&self) -> Option<&str>;
    fn value(&self) -> Option<&str>;
}

impl NameValue for Cookie {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl NameValue for NameValuePair {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Check a required-but-nullable name/value list. An absent list is a
/// violation at the owning object; a present list (even empty) is walked by
/// raw index, skipping null elements without renumbering.
fn check_name_value_list<T: NameValue>(
    parent: &str,
    attribute: &str,
    list: Option<&Vec<Option<T>>>,
    missing: &mut Vec<RequiredAttribute>,
) {
    let Some(list) = list else {
        missing.push(RequiredAttribute::new(parent, attribute));
        return;
    };
    for (i, item) in list.iter().enumerate() {
        if let Some(item) = item {
            let path = child_path(parent, &indexed(attribute, i));
            if item.name().is_none() {
                missing.push(RequiredAttribute::new(&path, "name"));
            }
            if item.value().is_none() {
                missing.push(RequiredAttribute::new(&path, "value"));
            }
        }
    }
}

/// Join a parent path and a child segment with a dot. An empty parent yields
/// the child alone, so the root's children have no leading dot.
fn child_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}

fn indexed(attribute: &str, index: usize) -> String {
    format!("{}[{}]", attribute, index)
}
