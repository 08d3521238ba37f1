use std::thread;

use phonerecord::{parse_phone, split_phone, PhoneNumberType, Record, PHONE_RECORD_BUILDER};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
    let backend = PHONE_RECORD_BUILDER.backend();
    backend.geocoding().load_str("en", "1212|New York, NY\n4420|London").unwrap();
    backend.load_timezones_str("1212|America/New_York\n44|Europe/London").unwrap();
}

#[test]
fn parse_phone_with_process_wide_builder() {
    init();

    let record = parse_phone("2125551212", "US", "en").unwrap();
    assert!(record.valid);
    assert_eq!(record.international, "+1 212-555-1212");
    assert_eq!(record.e164, "+12125551212");
    assert_eq!(record.geocode, "New York, NY");
    assert_eq!(record.timezone, "America/New_York");
    assert_eq!(
        split_phone(&record.international),
        [
            record.country_code.as_str(),
            record.ndc.as_str(),
            record.ldc.as_str(),
            record.local.as_str(),
        ]
    );
}

#[test]
fn parse_phone_defaults_region_and_language() {
    init();

    assert_eq!(
        parse_phone("(212) 555-1212", "", "").unwrap(),
        parse_phone("(212) 555-1212", "US", "en").unwrap()
    );
}

#[test]
fn parse_phone_rejects_garbage() {
    init();

    assert!(parse_phone("not a number", "ZZ", "en").is_err());
}

#[test]
fn parse_phone_from_many_threads() {
    init();

    let handles: Vec<_> = ["+44 20 8765 4321", "020 8765 4321", "+442087654321"]
        .into_iter()
        .map(|number| thread::spawn(move || parse_phone(number, "GB", "en")))
        .collect();

    let records: Vec<Record> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    for record in &records {
        assert_eq!(record.e164, "+442087654321");
        assert_eq!(record.geocode, "London");
        assert_eq!(record.number_type, PhoneNumberType::FixedLine);
    }
}
