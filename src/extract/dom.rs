//! Document-order navigation over a parsed [`Html`] tree.
//!
//! `scraper` answers "which elements match this selector", but the AS table is
//! located relative to a heading: the first matching table *after* the
//! heading, wherever it sits in the tree. [`DocumentTree`] adds the two lookups
//! that need.

use scraper::{ElementRef, Html};

/// Read-only element lookups in document (pre-order) order.
pub trait DocumentTree {
    /// First element anywhere in the document for which `pred` holds.
    fn find_first<'a, P>(&'a self, pred: P) -> Option<ElementRef<'a>>
    where
        P: FnMut(&ElementRef<'a>) -> bool;

    /// First element that starts after `node` in document order for which
    /// `pred` holds. Descendants of `node` count as "after".
    fn find_next_after<'a, P>(&'a self, node: ElementRef<'a>, pred: P) -> Option<ElementRef<'a>>
    where
        P: FnMut(&ElementRef<'a>) -> bool;
}

impl DocumentTree for Html {
    fn find_first<'a, P>(&'a self, mut pred: P) -> Option<ElementRef<'a>>
    where
        P: FnMut(&ElementRef<'a>) -> bool,
    {
        self.tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| pred(el))
    }

    fn find_next_after<'a, P>(&'a self, node: ElementRef<'a>, mut pred: P) -> Option<ElementRef<'a>>
    where
        P: FnMut(&ElementRef<'a>) -> bool,
    {
        let anchor = *node;
        self.tree
            .root()
            .descendants()
            .skip_while(|n| *n != anchor)
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| pred(el))
    }
}
