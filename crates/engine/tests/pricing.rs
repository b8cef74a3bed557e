use engine::{
    EngineError, Money, PriceBreakdown, PricingEngine, PromoRule, PromoTable, Rate,
    ServiceCatalog, ServiceCatalogEntry, ServiceCategory, calculate_service_price, format_price,
};

const CODES: [Option<&str>; 7] = [
    None,
    Some("FIRST20"),
    Some("wash10"),
    Some("Mechanic15"),
    Some("NOPE"),
    Some(""),
    Some("  first20  "),
];

fn assert_consistent(quote: &PriceBreakdown) {
    assert!(!quote.base_price.is_negative(), "{quote:?}");
    assert!(!quote.discount.is_negative(), "{quote:?}");
    assert!(!quote.subtotal.is_negative(), "{quote:?}");
    assert!(!quote.taxes.is_negative(), "{quote:?}");
    assert!(quote.discount <= quote.base_price, "{quote:?}");
    assert_eq!(quote.subtotal, quote.base_price - quote.discount);
    assert_eq!(quote.total, quote.subtotal + quote.taxes);
    assert_eq!(quote.total, quote.base_price - quote.discount + quote.taxes);
}

#[test]
fn every_builtin_service_prices_consistently() {
    let engine = PricingEngine::default();
    for category in ServiceCategory::ALL {
        for entry in engine.catalog().entries(category) {
            for code in CODES {
                let quote = engine
                    .calculate_service_price(&entry.id, category, code)
                    .unwrap();
                assert_consistent(&quote);
                assert_eq!(quote.service_id, entry.id);
                assert_eq!(quote.category, category);
            }
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let first = calculate_service_price("premium-wash", ServiceCategory::Wash, Some("FIRST20"));
    let second = calculate_service_price("premium-wash", ServiceCategory::Wash, Some("FIRST20"));
    assert_eq!(first, second);
}

#[test]
fn effective_discount_is_max_of_standing_and_promo() {
    let engine = PricingEngine::default();
    for category in ServiceCategory::ALL {
        for entry in engine.catalog().entries(category) {
            for code in CODES {
                let quote = engine
                    .calculate_service_price(&entry.id, category, code)
                    .unwrap();
                let promo = code
                    .and_then(|c| engine.promos().lookup(c, category))
                    .map(|r| r.rate)
                    .unwrap_or(Rate::ZERO);
                assert_eq!(quote.discount_rate, entry.standing_discount().max(promo));
            }
        }
    }
}

#[test]
fn emergency_roadside_with_mechanic_promo() {
    let quote = calculate_service_price(
        "emergency-roadside",
        ServiceCategory::Mechanic,
        Some("MECHANIC15"),
    )
    .unwrap();
    // 29900 * 0.15 = 4485; 25415 * 0.18 = 4574.7
    assert_eq!(quote.discount, Money::new(4_485));
    assert_eq!(quote.subtotal, Money::new(25_415));
    assert_eq!(quote.taxes, Money::new(4_574));
    assert_eq!(quote.total, Money::new(29_989));
    assert_eq!(format_price(quote.total), "₹299");
}

#[test]
fn unknown_ids_never_default() {
    for (id, category) in [
        ("", ServiceCategory::Wash),
        ("BASIC-WASH", ServiceCategory::Wash),
        ("emergency-roadside", ServiceCategory::Wash),
        ("premium-wash", ServiceCategory::Mechanic),
    ] {
        assert_eq!(
            calculate_service_price(id, category, Some("FIRST20")),
            Err(EngineError::ServiceNotFound(id.to_string()))
        );
    }
}

#[test]
fn custom_catalog_and_promos() {
    let catalog = ServiceCatalog::builder()
        .service(
            ServiceCategory::Wash,
            ServiceCatalogEntry::new("foam-wash", Money::new(24_999), "0.18".parse().unwrap())
                .with_discount("0.05".parse().unwrap()),
        )
        .build()
        .unwrap();
    let promos = PromoTable::from_rules([PromoRule::new(
        "monsoon25",
        &[ServiceCategory::Wash],
        "25%".parse().unwrap(),
    )])
    .unwrap();
    let engine = PricingEngine::builder()
        .catalog(catalog)
        .promos(promos)
        .build();

    let quote = engine
        .calculate_service_price("foam-wash", ServiceCategory::Wash, Some("Monsoon25"))
        .unwrap();
    // floor(24999 * 0.25) = 6249; floor(18750 * 0.18) = 3375
    assert_eq!(quote.discount, Money::new(6_249));
    assert_eq!(quote.subtotal, Money::new(18_750));
    assert_eq!(quote.taxes, Money::new(3_375));
    assert_eq!(quote.total, Money::new(22_125));
    assert_eq!(quote.display_name, "foam-wash");

    // The built-in codes are gone with the custom table.
    let quote = engine
        .calculate_service_price("foam-wash", ServiceCategory::Wash, Some("FIRST20"))
        .unwrap();
    assert_eq!(quote.discount, Money::new(1_249));
    assert_consistent(&quote);

    assert!(matches!(
        engine.calculate_service_price("basic-wash", ServiceCategory::Wash, None),
        Err(EngineError::ServiceNotFound(_))
    ));
}

#[test]
fn overflowing_custom_price_is_reported() {
    let catalog = ServiceCatalog::builder()
        .service(
            ServiceCategory::Mechanic,
            ServiceCatalogEntry::new("engine-swap", Money::new(i64::MAX), "0.5".parse().unwrap()),
        )
        .build()
        .unwrap();
    let engine = PricingEngine::builder().catalog(catalog).build();
    assert!(matches!(
        engine.calculate_service_price("engine-swap", ServiceCategory::Mechanic, None),
        Err(EngineError::InvalidAmount(_))
    ));
}
