//! Page corpus and the directory crawler that builds it

mod link_extractor;
mod scanner;

pub use link_extractor::extract_links;
pub use scanner::{scan_pages, ScanOptions, ScanResult};

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Closed set of pages and the intra-corpus links between them.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. Pages and link sets iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from raw outgoing links, pruning self links and
    /// targets that are not pages of the corpus.
    pub fn new<I, P, L, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = raw
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let pages = raw
            .iter()
            .map(|(page, links)| {
                let kept = links
                    .iter()
                    .filter(|target| *target != page && raw.contains_key(*target))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page identifiers in lexicographic order
    pub fn pages(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.pages.keys().map(String::as_str)
    }

    /// Outgoing links of `page`, `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of intra-corpus links
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }
}

/// Crawl a directory of hyperlinked documents into a corpus.
///
/// Each matching file becomes a page named by its path relative to `root`.
/// Any read failure aborts the crawl.
pub fn crawl(root: &Path, options: &ScanOptions) -> Result<Corpus> {
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in scan_pages(root, options)? {
        let content = std::fs::read_to_string(&entry.path)?;
        let links = extract_links(&content);
        tracing::debug!(page = %entry.relative_path, links = links.len(), "parsed page");
        raw.insert(entry.relative_path, links);
    }

    let corpus = Corpus::new(raw);
    tracing::info!(
        root = %root.display(),
        pages = corpus.len(),
        links = corpus.link_count(),
        "built corpus"
    );
    Ok(corpus)
}
