use crate::serde::three_decimals::format;

#[test]
fn keep_trailing_zeros() {
    assert_eq!(format(100.0), "100.000");
    assert_eq!(format(0.0), "0.000");
    assert_eq!(format(180.5), "180.500");
}

#[test]
fn round_from_the_exact_binary_value() {
    // Both values are stored slightly below the written half.
    assert_eq!(format(1.0005), "1.000");
    assert_eq!(format(1.2345), "1.234");
    assert_eq!(format(78.184_999_9), "78.185");
    assert_eq!(format(32.123_456_7), "32.123");
}
