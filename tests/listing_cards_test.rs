use anyhow::Result;
use chrono::Weekday;
use lawyer_directory::core::card::write_csv;
use lawyer_directory::core::{ConfigProvider, ListingSource};
use lawyer_directory::utils::validation::Validate;
use lawyer_directory::{sort_by_popularity, JsonFileSource, ListingCard, SiteConfig};
use tempfile::TempDir;

const LISTINGS: &str = r#"[
    {
        "name": "Richardson Injury Law",
        "slug": "richardson-injury-law",
        "phone": "(972) 555-0111",
        "website": "https://richardson-injury.example",
        "address": "500 Campbell Rd, Richardson, TX",
        "rating": 4.6,
        "reviewsCount": 87,
        "hours": {"Monday": ["8 AM-6 PM"], "Sunday": ["Closed"]},
        "hoursText": null,
        "businessStatus": "OPERATIONAL",
        "categories": "Personal injury attorney",
        "mapsUrl": null,
        "placeId": "ChIJ-1",
        "lat": 32.97,
        "lng": -96.71
    },
    {
        "name": "Collins Accident Attorneys",
        "slug": "collins-accident",
        "phone": null,
        "website": null,
        "address": "12 Belt Line Rd, Richardson, TX",
        "rating": null,
        "reviewsCount": null,
        "hours": {"Monday": ["Open 24 hours"]},
        "hoursText": null,
        "businessStatus": "OPERATIONAL",
        "categories": "Lawyer",
        "mapsUrl": null,
        "placeId": "ChIJ-2",
        "lat": 32.95,
        "lng": -96.73
    },
    {
        "name": "Arapaho Legal Group",
        "slug": "arapaho-legal",
        "phone": "+1 972 555 0133",
        "website": null,
        "address": "900 Arapaho Rd, Richardson, TX",
        "rating": 4.9,
        "reviewsCount": 87,
        "hours": null,
        "hoursText": "Call for hours",
        "businessStatus": "OPERATIONAL",
        "categories": "Lawyer",
        "mapsUrl": null,
        "placeId": "ChIJ-3",
        "lat": 32.96,
        "lng": -96.72
    }
]"#;

#[test]
fn test_end_to_end_popular_cards() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("lawyers.json");
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(&data_path, LISTINGS)?;
    std::fs::write(
        &config_path,
        "[site]\nname = \"Test Directory\"\nurl = \"https://directory.example/\"\n\n[listings]\nrelated_count = 1\n",
    )?;

    let config = SiteConfig::from_file(&config_path)?;
    config.validate()?;
    let lawyers = JsonFileSource::new(&data_path).load()?;

    let cards: Vec<ListingCard> = sort_by_popularity(&lawyers)
        .into_iter()
        .map(|lawyer| ListingCard::from_lawyer(lawyer, config.site_url(), Weekday::Mon))
        .collect();

    let order: Vec<&str> = cards.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(
        order,
        vec!["arapaho-legal", "richardson-injury-law", "collins-accident"]
    );

    assert_eq!(cards[0].url, "https://directory.example/lawyers/arapaho-legal/");
    assert_eq!(cards[0].tel.as_deref(), Some("+19725550133"));
    assert_eq!(cards[0].today_hours.as_deref(), Some("Call for hours"));
    assert!(!cards[0].open_now);

    assert_eq!(cards[1].stars, "★★★★½☆");
    assert!(cards[1].open_now);

    assert_eq!(cards[2].tel, None);
    assert_eq!(cards[2].stars, "☆☆☆☆☆");
    assert_eq!(cards[2].rating, "N/A");
    assert_eq!(cards[2].reviews, "0");
    assert!(cards[2].open_now);

    Ok(())
}

#[test]
fn test_cards_serialize_to_json_and_csv() -> Result<()> {
    let lawyers = lawyer_directory::adapters::json_source::parse_listings(LISTINGS)?;
    let cards: Vec<ListingCard> = lawyers
        .iter()
        .map(|lawyer| ListingCard::from_lawyer(lawyer, lawyer_directory::SITE_URL, Weekday::Sun))
        .collect();

    let json = serde_json::to_value(&cards)?;
    assert_eq!(json[0]["open_now"], serde_json::Value::Bool(false));
    assert_eq!(json[0]["today_hours"], "Closed");

    let mut buffer = Vec::new();
    write_csv(&cards, &mut buffer)?;
    let csv_text = String::from_utf8(buffer)?;
    assert_eq!(csv_text.lines().count(), 4);
    assert!(csv_text.contains("https://caraccidentlawyerrichardson.com/lawyers/collins-accident/"));

    Ok(())
}

#[test]
fn test_unreadable_inputs_map_to_cli_exit_codes() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let data_err = JsonFileSource::new(temp_dir.path().join("missing.json"))
        .load()
        .unwrap_err();
    assert_eq!(data_err.exit_code(), 2);

    let config_err = SiteConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert_eq!(config_err.exit_code(), 1);

    Ok(())
}
