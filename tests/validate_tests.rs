use geo_allow::validate::{check_addresses, is_valid_network};

#[test]
fn drops_invalid_entries_and_keeps_order() {
    let input = ["10.0.0.0/8", "not-an-ip", "2001:db8::/32"];
    let validated = check_addresses(&input);
    assert_eq!(validated.accepted, vec!["10.0.0.0/8", "2001:db8::/32"]);
    assert_eq!(validated.rejected, vec!["not-an-ip"]);
}

#[test]
fn validation_is_idempotent() {
    let input = vec![
        "1.0.16.0/20".to_string(),
        "300.1.1.0/24".to_string(),
        "1.0.64.0/18".to_string(),
        "".to_string(),
        "2400:4000::/22".to_string(),
    ];
    let once = check_addresses(&input).accepted;
    let twice = check_addresses(&once);
    assert_eq!(twice.accepted, once);
    assert!(twice.rejected.is_empty());
}

#[test]
fn empty_input_yields_empty_output() {
    let input: Vec<String> = Vec::new();
    let validated = check_addresses(&input);
    assert!(validated.accepted.is_empty());
    assert!(validated.rejected.is_empty());
}

#[test]
fn network_parsing_rules() {
    // ホスト部にビットが立っているものは不正
    assert!(!is_valid_network("10.0.0.1/8"));
    assert!(!is_valid_network("1.2.3.0/33"));
    assert!(!is_valid_network("2001:db8::1/32"));
    assert!(!is_valid_network(" 1.2.3.0/24"));
    assert!(!is_valid_network("1.2.3.0/24; rm -rf /"));

    // プレフィックスなしの単一アドレスは許容
    assert!(is_valid_network("192.0.2.1"));
    assert!(is_valid_network("2001:db8::1"));
    assert!(is_valid_network("192.0.2.0/24"));
    assert!(is_valid_network("0.0.0.0/0"));
}

#[test]
fn netmask_and_zero_padded_prefixes_are_rejected() {
    // gcloud に渡す前提のため、素直なプレフィックス長表記のみ受け付ける
    assert!(!is_valid_network("10.0.0.0/255.0.0.0"));
    assert!(!is_valid_network("1.2.3.0/024"));

    let validated = check_addresses(&["10.0.0.0/255.0.0.0", "10.0.0.0/8"]);
    assert_eq!(validated.accepted, vec!["10.0.0.0/8"]);
    assert_eq!(validated.rejected, vec!["10.0.0.0/255.0.0.0"]);
}
