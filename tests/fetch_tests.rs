use geo_allow::fetch::{HttpAddressSource, parse_zone_text, source_url};
use reqwest::Client;

#[test]
fn parse_zone_text_drops_comments_and_blank_lines() {
    let text = "# ipverse zone file\n# JP\n1.0.16.0/20\r\n\n1.0.64.0/18  \n#trailing\n2400:4000::/22\n";
    assert_eq!(
        parse_zone_text(text),
        vec!["1.0.16.0/20", "1.0.64.0/18", "2400:4000::/22"]
    );
}

#[test]
fn parse_zone_text_keeps_garbage_for_validator() {
    // 不正な行の除外はバリデータの責任
    assert_eq!(parse_zone_text("bogus\n1.2.3.0/24"), vec!["bogus", "1.2.3.0/24"]);
    assert!(parse_zone_text("").is_empty());
}

#[test]
fn source_url_uses_lowercase_country_code() {
    let url = source_url("http://ipverse.net/ipblocks/data/countries/{cc}.zone", "JP");
    assert_eq!(url, "http://ipverse.net/ipblocks/data/countries/jp.zone");

    let source = HttpAddressSource::new(Client::new(), "https://example.test/{cc}/v4.txt");
    assert_eq!(source.url_for("US"), "https://example.test/us/v4.txt");
}
