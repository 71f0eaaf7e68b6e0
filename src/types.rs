use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

// Every schema field is `Option`: requiredness is the validator's contract,
// not serde's. Lists produced by lenient capture tools may be absent or may
// contain null elements, hence `Option<Vec<Option<T>>>`; element indices in
// validation paths always reflect raw positions including nulls.

// ─── Har ────────────────────────────────────────────────────────────────────

/// The top-level container for a parsed HAR document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Har {
    pub log: Option<Log>,
}

// ─── Log ────────────────────────────────────────────────────────────────────

/// One capture session.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub version: Option<String>,
    pub creator: Option<CreatorBrowser>,
    pub browser: Option<CreatorBrowser>,
    pub pages: Option<Vec<Option<Page>>>,
    pub entries: Option<Vec<Option<Entry>>>,
    pub comment: Option<String>,
}

impl Log {
    /// Number of pages, 0 when the list is absent.
    pub fn pages_len(&self) -> usize {
        list_len(&self.pages)
    }

    /// Page at `index`; `None` for an absent list, an out-of-range index, or
    /// a null element. Never panics.
    pub fn page(&self, index: usize) -> Option<&Page> {
        list_get(&self.pages, index)
    }

    /// Number of entries, 0 when the list is absent.
    pub fn entries_len(&self) -> usize {
        list_len(&self.entries)
    }

    /// Entry at `index`; `None` for an absent list, an out-of-range index, or
    /// a null element. Never panics.
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        list_get(&self.entries, index)
    }
}

// ─── Creator / Browser ──────────────────────────────────────────────────────

/// Identity of the tool that produced the capture. The `creator` and
/// `browser` attributes of the log share this shape; only `creator` is
/// required to be present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreatorBrowser {
    pub name: Option<String>,
    pub version: Option<String>,
    pub comment: Option<String>,
}

// ─── Page ───────────────────────────────────────────────────────────────────

/// One loaded page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default, deserialize_with = "crate::timestamp::rfc3339_opt")]
    pub started_date_time: Option<DateTime<FixedOffset>>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub page_timings: Option<PageTimings>,
    pub comment: Option<String>,
}

/// Page load metrics. No attribute of this object is required.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTimings {
    pub on_content_load: Option<f64>,
    pub on_load: Option<f64>,
    pub comment: Option<String>,
}

// ─── Entry ──────────────────────────────────────────────────────────────────

/// One request/response pair.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub pageref: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::rfc3339_opt")]
    pub started_date_time: Option<DateTime<FixedOffset>>,
    pub time: Option<f64>,
    pub request: Option<Request>,
}

// ─── Request ────────────────────────────────────────────────────────────────

/// One HTTP request. The `cookies`, `headers`, and `queryString` lists are
/// required: an absent list is a violation, an empty one is not.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: Option<String>,
    pub url: Option<String>,
    pub http_version: Option<String>,
    pub cookies: Option<Vec<Option<Cookie>>>,
    pub headers: Option<Vec<Option<NameValuePair>>>,
    // Schema quirk: the list of query parameters is named "queryString",
    // singular. Preserved verbatim for compatibility.
    pub query_string: Option<Vec<Option<NameValuePair>>>,
    pub post_data: Option<PostData>,
}

impl Request {
    /// Number of cookies, 0 when the list is absent.
    pub fn cookies_len(&self) -> usize {
        list_len(&self.cookies)
    }

    /// Cookie at `index`; `None` for an absent list, an out-of-range index,
    /// or a null element. Never panics.
    pub fn cookie(&self, index: usize) -> Option<&Cookie> {
        list_get(&self.cookies, index)
    }

    /// Number of headers, 0 when the list is absent.
    pub fn headers_len(&self) -> usize {
        list_len(&self.headers)
    }

    /// Header at `index`; `None` for an absent list, an out-of-range index,
    /// or a null element. Never panics.
    pub fn header(&self, index: usize) -> Option<&NameValuePair> {
        list_get(&self.headers, index)
    }

    /// Number of query string parameters, 0 when the list is absent.
    pub fn query_string_len(&self) -> usize {
        list_len(&self.query_string)
    }

    /// Query string parameter at `index`; `None` for an absent list, an
    /// out-of-range index, or a null element. Never panics.
    pub fn query_string(&self, index: usize) -> Option<&NameValuePair> {
        list_get(&self.query_string, index)
    }
}

// ─── Cookie / Header / QueryString ──────────────────────────────────────────

/// One request cookie. Shares the name/value requiredness of
/// [`NameValuePair`] plus cookie-only optional attributes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: Option<String>,
    pub value: Option<String>,
    pub path: Option<String>,
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::rfc3339_opt")]
    pub expires: Option<DateTime<FixedOffset>>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub comment: Option<String>,
}

/// One request header or query string parameter.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NameValuePair {
    pub name: Option<String>,
    pub value: Option<String>,
    pub comment: Option<String>,
}

// ─── PostData ───────────────────────────────────────────────────────────────

/// Posted request body. Entirely optional; no attribute of this object is
/// required.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: Option<String>,
    pub text: Option<String>,
    pub comment: Option<String>,
}

// ─── Collection accessors ───────────────────────────────────────────────────

fn list_len<T>(list: &Option<Vec<Option<T>>>) -> usize {
    list.as_ref().map_or(0, Vec::len)
}

fn list_get<T>(list: &Option<Vec<Option<T>>>, index: usize) -> Option<&T> {
    list.as_ref()?.get(index)?.as_ref()
}
