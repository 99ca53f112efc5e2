use crate::types::CanonicalOffice;

/// City portion of an office id: lowercase with spaces and periods replaced
/// by underscores (yes, st__george is the right style for this key)
pub fn city_key(city: &str) -> String {
    city.to_lowercase().replace([' ', '.'], "_")
}

/// Generate the id for a newly added office, numbering duplicates in the
/// same city like `philadelphia`, `philadelphia-1`, `philadelphia-2`.
///
/// Must be called once per added office against the offices already in the
/// list, including ones added earlier in the same pass, so repeated cities
/// pick up sequential suffixes.
pub fn next_office_key(bioguide: &str, city: &str, existing: &[CanonicalOffice]) -> String {
    let base = format!("{}-{}", bioguide, city_key(city));

    let mut count = 0u32;
    for office in existing {
        let Some(suffix) = office.id.strip_prefix(&base) else {
            continue;
        };
        if suffix.is_empty() {
            count = 1;
            continue;
        }
        // the last id scanned decides the count, which matches a dataset
        // kept in insertion order
        if let Some(n) = suffix.strip_prefix('-').and_then(|s| s.parse::<u32>().ok()) {
            count = n + 1;
        }
    }

    if count > 0 {
        format!("{}-{}", base, count)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_with_id(id: &str) -> CanonicalOffice {
        CanonicalOffice {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_city_key() {
        assert_eq!(city_key("Philadelphia"), "philadelphia");
        assert_eq!(city_key("New York"), "new_york");
        assert_eq!(city_key("St. George"), "st__george");
    }

    #[test]
    fn test_first_office_gets_the_base_key() {
        assert_eq!(next_office_key("X000001", "Boston", &[]), "X000001-boston");
    }

    #[test]
    fn test_same_city_offices_number_sequentially() {
        let mut offices = Vec::new();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let id = next_office_key("X000001", "Springfield", &offices);
            ids.push(id.clone());
            offices.push(office_with_id(&id));
        }
        assert_eq!(
            ids,
            vec![
                "X000001-springfield",
                "X000001-springfield-1",
                "X000001-springfield-2"
            ]
        );
    }

    #[test]
    fn test_scan_order_decides_the_suffix() {
        // the count follows the last matching id scanned, not the max, so an
        // out-of-order list can regenerate a low suffix
        let offices = vec![
            office_with_id("X000001-springfield-2"),
            office_with_id("X000001-springfield"),
        ];
        assert_eq!(
            next_office_key("X000001", "Springfield", &offices),
            "X000001-springfield-1"
        );
    }

    #[test]
    fn test_unparsable_suffixes_are_ignored() {
        let offices = vec![office_with_id("X000001-springfield-old")];
        assert_eq!(
            next_office_key("X000001", "Springfield", &offices),
            "X000001-springfield"
        );
    }

    #[test]
    fn test_longer_city_names_do_not_collide() {
        // "X-spring" is a prefix of "X-springfield" but the leftover text is
        // not a numeric suffix, so it contributes nothing
        let offices = vec![office_with_id("X000001-springfield")];
        assert_eq!(next_office_key("X000001", "Spring", &offices), "X000001-spring");
    }

    #[test]
    fn test_other_cities_do_not_affect_the_count() {
        let offices = vec![
            office_with_id("X000001-boston"),
            office_with_id("X000001-worcester-1"),
        ];
        assert_eq!(
            next_office_key("X000001", "Lowell", &offices),
            "X000001-lowell"
        );
    }
}
