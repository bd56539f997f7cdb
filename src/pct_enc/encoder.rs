//! Percent-encoders for URI components.

use super::{table::*, Encoder, Table};

/// An encoder for the path component.
#[derive(Clone, Copy, Debug)]
pub struct Path(());

impl Encoder for Path {
    const TABLE: Table = PATH;
}

/// An encoder for the query component.
#[derive(Clone, Copy, Debug)]
pub struct Query(());

impl Encoder for Query {
    const TABLE: Table = QUERY;
}

/// An encoder for the fragment component.
#[derive(Clone, Copy, Debug)]
pub struct Fragment(());

impl Encoder for Fragment {
    const TABLE: Table = FRAGMENT;
}
