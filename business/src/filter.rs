use crate::User;

/// Whether `country` contains `filter`, both lowercased.
#[inline]
pub fn country_matches(country: &str, filter: &str) -> bool {
    country.to_lowercase().contains(&filter.to_lowercase())
}

/// Keeps the users whose country contains `filter`, case-insensitively, in input order.
///
/// An absent or empty filter keeps everyone.
pub fn filter_by_country(users: &[User], filter: Option<&str>) -> Vec<User> {
    match filter {
        Some(filter) if !filter.is_empty() => users
            .iter()
            .filter(|user| country_matches(&user.location.country, filter))
            .cloned()
            .collect(),
        _ => users.to_vec(),
    }
}
