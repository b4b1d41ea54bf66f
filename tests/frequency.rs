use cabrillo::freq::{format_qso_frequency, hz_to_dotted_mhz, parse_dotted_mhz, parse_frequency};

#[test]
fn plain_tokens_are_kilohertz() {
    assert_eq!(parse_frequency("14325"), Some(14_325_000));
    assert_eq!(parse_frequency("1810"), Some(1_810_000));
    assert_eq!(parse_frequency(""), None);
    assert_eq!(parse_frequency("14k"), None);
    assert_eq!(parse_frequency("-7"), None);
}

#[test]
fn dotted_groups_are_right_padded() {
    assert_eq!(parse_dotted_mhz("14"), Some(14_000_000));
    assert_eq!(parse_dotted_mhz("14.2"), Some(14_200_000));
    assert_eq!(parse_dotted_mhz("14.025"), Some(14_025_000));
    assert_eq!(parse_dotted_mhz("14.025.5"), Some(14_025_500));
    assert_eq!(parse_dotted_mhz("14.025.500"), Some(14_025_500));
    assert_eq!(parse_frequency("7.1"), Some(7_100_000));

    assert_eq!(parse_dotted_mhz("14.0250"), None);
    assert_eq!(parse_dotted_mhz("14.025.500.1"), None);
    assert_eq!(parse_dotted_mhz("14..5"), None);
}

#[test]
fn dotted_rendering_groups_triples_from_the_right() {
    assert_eq!(hz_to_dotted_mhz(14_325_000), "14.325.000");
    assert_eq!(hz_to_dotted_mhz(7_025_500), "7.025.500");
    assert_eq!(hz_to_dotted_mhz(500), "500");
    assert_eq!(hz_to_dotted_mhz(1_296_000_000), "1.296.000.000");
}

#[test]
fn qso_column_prefers_whole_kilohertz() {
    assert_eq!(format_qso_frequency(14_325_000), "14325");
    assert_eq!(format_qso_frequency(7_025_500), "7.025.500");
    assert_eq!(parse_frequency(&format_qso_frequency(7_025_500)), Some(7_025_500));
    assert_eq!(parse_frequency(&format_qso_frequency(50_000)), Some(50_000));
}
