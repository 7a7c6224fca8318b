//! Sort criteria and the locale-style string comparison used by the visible list.

use std::cmp::Ordering;

use crate::User;

/// Column the visible list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Keep the filtered order.
    #[default]
    None,
    Country,
    /// First name.
    Name,
    /// Last name.
    Last,
}

impl SortBy {
    /// The field a user is ordered by, `None` when the list is unsorted.
    pub fn key<'u>(&self, user: &'u User) -> Option<&'u str> {
        match self {
            Self::None => None,
            Self::Country => Some(user.location.country.as_str()),
            Self::Name => Some(user.name.first.as_str()),
            Self::Last => Some(user.name.last.as_str()),
        }
    }
}

/// Orders a copy of `users` by the key of `sort_by`.
///
/// The sort is stable: users whose keys compare equal keep their input order.
pub fn sort_users(users: &[User], sort_by: SortBy) -> Vec<User> {
    let mut sorted = users.to_vec();
    if sort_by != SortBy::None {
        sorted.sort_by(|a, b| match (sort_by.key(a), sort_by.key(b)) {
            (Some(a), Some(b)) => locale_cmp(a, b),
            _ => Ordering::Equal,
        });
    }
    sorted
}

/// Compares two strings ignoring case and common Latin diacritics.
///
/// `"spain"` and `"Spain"` compare equal, `"Émile"` sorts next to `"Emile"`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).flat_map(expand)
}

/// Ligatures and letters without a single-letter base spell out as two letters.
fn expand(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'æ' => ('a', Some('e')),
        'œ' => ('o', Some('e')),
        'ß' => ('s', Some('s')),
        'þ' => ('t', Some('h')),
        other => (base_letter(other), None),
    };
    std::iter::once(first).chain(second)
}

fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
