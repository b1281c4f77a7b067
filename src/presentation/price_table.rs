// src/presentation/price_table.rs
// DOCUMENTATION: Price table composition
// PURPOSE: Group tiers by category, pick the best value, compose feature lists

use crate::models::{Price, RoomSpecs};
use std::cmp::Ordering;

/// Every card shows exactly this many features
pub const FEATURES_PER_CARD: usize = 4;

/// Capability flags that surface as card features, in display order
const SPEC_FEATURES: [(&str, &str); 5] = [
    ("wifi", "Free WiFi"),
    ("parking", "Free Parking"),
    ("ac", "Air Conditioning"),
    ("tv", "Smart TV"),
    ("geyser", "Hot Water"),
];

/// Used to pad short feature lists
const FILLER_FEATURES: [&str; 4] = [
    "Room Service",
    "Fitness Center Access",
    "24/7 Security",
    "Laundry Service",
];

/// A single rendered price card
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub price_id: i32,
    pub title: String,
    pub subtitle: &'static str,
    pub amount: String,
    pub unit: &'static str,
    pub features: Vec<String>,
    pub best_value: bool,
    /// Day stays that are not already the best value
    pub popular: bool,
}

/// All cards of one category
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGroup {
    pub category_title: String,
    pub options_label: String,
    pub cards: Vec<PriceCard>,
}

/// Group prices by category title, keeping first-seen order
pub fn group_by_category(prices: &[Price]) -> Vec<(String, Vec<&Price>)> {
    let mut groups: Vec<(String, Vec<&Price>)> = Vec::new();

    for price in prices {
        match groups
            .iter()
            .position(|(title, _)| *title == price.category.title)
        {
            Some(i) => groups[i].1.push(price),
            None => groups.push((price.category.title.clone(), vec![price])),
        }
    }

    groups
}

/// Index of the tier with the lowest per-hour rate
/// DOCUMENTATION: None for groups with fewer than two tiers; ties go to
/// the earlier tier; tiers without hours never win
pub fn best_value_index(prices: &[&Price]) -> Option<usize> {
    if prices.len() < 2 {
        return None;
    }

    prices
        .iter()
        .enumerate()
        .filter_map(|(i, price)| price.per_hour_rate().map(|rate| (i, rate)))
        .min_by(|(ia, a), (ib, b)| {
            a.partial_cmp(b)
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        })
        .map(|(i, _)| i)
}

/// Feature list for a card: capability flags, a stay-length perk, then filler
pub fn compose_features(specs: Option<&RoomSpecs>, hourly_hours: i32) -> Vec<String> {
    let enabled = |key: &str| specs.and_then(|s| s.get(key)).copied().unwrap_or(false);

    let mut features: Vec<String> = SPEC_FEATURES
        .iter()
        .filter(|(key, _)| enabled(*key))
        .map(|(_, label)| label.to_string())
        .collect();

    if hourly_hours >= 12 {
        features.push("Complimentary Breakfast".to_string());
    } else {
        features.push("Welcome Drink".to_string());
    }

    for filler in FILLER_FEATURES {
        if features.len() >= FEATURES_PER_CARD {
            break;
        }
        if !features.iter().any(|f| f == filler) {
            features.push(filler.to_string());
        }
    }

    features.truncate(FEATURES_PER_CARD);
    features
}

/// "1 Hour", "3 Hours", or the tier's own label
pub fn duration_label(price: &Price) -> String {
    match price.label.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ if price.hourly_hours == 1 => "1 Hour".to_string(),
        _ => format!("{} Hours", price.hourly_hours),
    }
}

/// Render paise as rupees with thousands separators, e.g. ₹1,250.5
pub fn format_rupees(rate_cents: i64) -> String {
    let sign = if rate_cents < 0 { "-" } else { "" };
    let cents = rate_cents.unsigned_abs();
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = match fraction {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };

    format!("{}₹{}{}", sign, grouped, fraction)
}

/// Build every group and card for a price listing
pub fn build_price_table(prices: &[Price]) -> Vec<PriceGroup> {
    group_by_category(prices)
        .into_iter()
        .map(|(category_title, members)| {
            let best = best_value_index(&members);
            let options_label = format!(
                "{} pricing {} available",
                members.len(),
                if members.len() == 1 { "option" } else { "options" }
            );

            let cards = members
                .iter()
                .enumerate()
                .map(|(i, price)| {
                    let best_value = best == Some(i);
                    let full_day = price.hourly_hours >= 24;
                    PriceCard {
                        price_id: price.id,
                        title: duration_label(price),
                        subtitle: if full_day { "Full Day Experience" } else { "Hourly Rate" },
                        amount: format_rupees(price.rate_cents),
                        unit: if full_day { "per day" } else { "per hour" },
                        features: compose_features(
                            price.category.specs.as_ref(),
                            price.hourly_hours,
                        ),
                        best_value,
                        popular: price.hourly_hours == 24 && !best_value,
                    }
                })
                .collect();

            PriceGroup {
                category_title,
                options_label,
                cards,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceCategory;

    fn price(id: i32, category: &str, hours: i32, rate_cents: i64) -> Price {
        Price {
            id,
            label: None,
            hourly_hours: hours,
            rate_cents,
            category: PriceCategory {
                id: category.len() as i32,
                title: category.to_string(),
                specs: None,
            },
        }
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let prices = vec![
            price(1, "Suite", 3, 300000),
            price(2, "Standard", 3, 100000),
            price(3, "Suite", 24, 900000),
        ];

        let groups = group_by_category(&prices);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Suite");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Standard");
    }

    #[test]
    fn test_best_value_is_lowest_per_hour_rate() {
        let tiers = vec![
            price(1, "Suite", 3, 150000),  // 50000/h
            price(2, "Suite", 6, 240000),  // 40000/h
            price(3, "Suite", 24, 720000), // 30000/h
        ];
        let refs: Vec<&Price> = tiers.iter().collect();
        assert_eq!(best_value_index(&refs), Some(2));
    }

    #[test]
    fn test_best_value_needs_two_tiers() {
        let tiers = vec![price(1, "Suite", 3, 150000)];
        let refs: Vec<&Price> = tiers.iter().collect();
        assert_eq!(best_value_index(&refs), None);
    }

    #[test]
    fn test_best_value_skips_zero_hour_tiers() {
        let tiers = vec![price(1, "Suite", 0, 1), price(2, "Suite", 2, 5000)];
        let refs: Vec<&Price> = tiers.iter().collect();
        assert_eq!(best_value_index(&refs), Some(1));
    }

    #[test]
    fn test_features_always_four() {
        let mut specs = RoomSpecs::new();
        for key in ["wifi", "parking", "ac", "tv", "geyser"] {
            specs.insert(key.to_string(), true);
        }

        let full = compose_features(Some(&specs), 24);
        assert_eq!(
            full,
            vec!["Free WiFi", "Free Parking", "Air Conditioning", "Smart TV"]
        );

        let bare = compose_features(None, 3);
        assert_eq!(
            bare,
            vec![
                "Welcome Drink",
                "Room Service",
                "Fitness Center Access",
                "24/7 Security"
            ]
        );

        let mut wifi_only = RoomSpecs::new();
        wifi_only.insert("wifi".into(), true);
        assert_eq!(
            compose_features(Some(&wifi_only), 12),
            vec![
                "Free WiFi",
                "Complimentary Breakfast",
                "Room Service",
                "Fitness Center Access"
            ]
        );
    }

    #[test]
    fn test_duration_label() {
        let mut p = price(1, "Suite", 1, 100);
        assert_eq!(duration_label(&p), "1 Hour");
        p.hourly_hours = 6;
        assert_eq!(duration_label(&p), "6 Hours");
        p.label = Some("Half Day".into());
        assert_eq!(duration_label(&p), "Half Day");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(99900), "₹999");
        assert_eq!(format_rupees(125050), "₹1,250.5");
        assert_eq!(format_rupees(123456789), "₹1,234,567.89");
    }

    #[test]
    fn test_table_marks_popular_day_stays() {
        let prices = vec![
            price(1, "Suite", 3, 90000),   // 30000/h, best value
            price(2, "Suite", 24, 960000), // 40000/h
        ];

        let table = build_price_table(&prices);
        let cards = &table[0].cards;
        assert!(cards[0].best_value);
        assert!(!cards[0].popular);
        assert!(cards[1].popular);
        assert_eq!(cards[1].unit, "per day");
        assert_eq!(table[0].options_label, "2 pricing options available");
    }
}
