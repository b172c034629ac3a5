//! Stable ordering of records by a sort key

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::record::Record;

/// Sort records by `key`, keeping equal records in their input order.
///
/// Returns a new vector; the input is only borrowed.
pub fn sort<'a, R, I>(records: I, key: R::SortKey) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut sorted: Vec<&'a R> = records.into_iter().collect();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| a.compare_by(b, key));
    sorted
}

/// Compare titles the way a reader would alphabetize them.
///
/// Accents are transliterated and case is folded for the primary comparison,
/// so "Élan" sorts with "elan" and "apple" sorts before "Banana". Titles that
/// tie there are ordered unaccented before accented, then lowercase before
/// uppercase ("cafe" < "café", "report" < "Report"). Only identical titles
/// compare equal.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_key(a).cmp(case_key(b)))
}

fn collation_key(title: &str) -> String {
    deunicode(title).to_lowercase()
}

/// Per-character key that puts lowercase letters before their uppercase forms
fn case_key(title: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    title.chars().map(|c| (c.is_uppercase(), c))
}
