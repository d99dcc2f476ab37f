use crate::zone::{ZoneConfig, NIBBLES};

pub const REVERSE_SUFFIX: &str = "ip6.arpa.";

/// Recognizes `<nibble>.<nibble>. ... ip6.arpa.` with a bounded label count.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReverseMatcher {
    min_labels: usize,
    max_labels: usize,
}

impl ReverseMatcher {
    pub fn new(min_labels: usize, max_labels: usize) -> Self {
        ReverseMatcher {
            min_labels,
            max_labels,
        }
    }

    /// Returns the nibble labels in the order they appear in `name`.
    pub fn captures<'a>(&self, name: &'a str) -> Option<Vec<&'a str>> {
        let run = name.strip_suffix(REVERSE_SUFFIX)?;
        let labels: Vec<&str> = if run.is_empty() {
            Vec::new()
        } else {
            run.strip_suffix('.')?.split('.').collect()
        };
        if labels.len() < self.min_labels || labels.len() > self.max_labels {
            return None;
        }
        if !labels.iter().all(|l| is_nibble(l)) {
            return None;
        }
        Some(labels)
    }
}

fn is_nibble(label: &str) -> bool {
    label.len() == 1 && label.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Recognizes `<host-prefix><1..=max_digits hex digits><domain-suffix>`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ForwardMatcher {
    host_prefix: String,
    domain_suffix: String,
    max_digits: usize,
}

impl ForwardMatcher {
    pub fn new(host_prefix: &str, domain_suffix: &str, max_digits: usize) -> Self {
        ForwardMatcher {
            host_prefix: host_prefix.to_string(),
            domain_suffix: domain_suffix.to_string(),
            max_digits,
        }
    }

    /// Returns the hex digit run between the host prefix and the domain suffix.
    pub fn captures<'a>(&self, name: &'a str) -> Option<&'a str> {
        let digits = name
            .strip_prefix(self.host_prefix.as_str())?
            .strip_suffix(self.domain_suffix.as_str())?;
        if digits.is_empty() || digits.len() > self.max_digits {
            return None;
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(digits)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NameMatchers {
    pub zone: ReverseMatcher,
    pub ptr: ReverseMatcher,
    pub aaaa: ForwardMatcher,
}

impl NameMatchers {
    pub fn from(zone: &ZoneConfig) -> Self {
        NameMatchers {
            zone: ReverseMatcher::new(zone.prefix().len(), NIBBLES),
            ptr: ReverseMatcher::new(NIBBLES, NIBBLES),
            aaaa: ForwardMatcher::new(zone.host_prefix(), zone.domain_suffix(), zone.host_id_len()),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use crate::matcher::{NameMatchers, ReverseMatcher, ForwardMatcher};
    use crate::zone::tests::get_test_zone;

    #[test]
    fn should_return_labels_when_captures_given_full_reverse_name() {
        let matchers = NameMatchers::from(&get_test_zone());
        let name = get_test_reverse_name();

        let result = matchers.ptr.captures(&name);

        let labels = result.unwrap();
        assert_eq!(32, labels.len());
        assert_eq!("1", labels[0]);
        assert_eq!("f", labels[31]);
    }

    #[test]
    fn should_return_none_when_ptr_captures_given_31_labels() {
        let matchers = NameMatchers::from(&get_test_zone());
        let name = get_test_reverse_name()[2..].to_string();

        let result = matchers.ptr.captures(&name);

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_ptr_captures_given_33_labels() {
        let matchers = NameMatchers::from(&get_test_zone());
        let name = format!("0.{}", get_test_reverse_name());

        let result = matchers.ptr.captures(&name);

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_captures_given_multi_char_label() {
        let matcher = ReverseMatcher::new(0, 32);

        let result = matcher.captures("10.8.e.f.ip6.arpa.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_captures_given_non_hex_label() {
        let matcher = ReverseMatcher::new(0, 32);

        let result = matcher.captures("g.8.e.f.ip6.arpa.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_accept_upper_case_when_captures_given_upper_case_nibbles() {
        let matcher = ReverseMatcher::new(4, 32);

        let result = matcher.captures("0.8.E.F.ip6.arpa.");

        assert_eq!(Some(vec!["0", "8", "E", "F"]), result);
    }

    #[test]
    fn should_return_none_when_captures_given_upper_case_suffix() {
        let matcher = ReverseMatcher::new(0, 32);

        let result = matcher.captures("0.8.e.f.IP6.ARPA.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_captures_given_missing_label_separator() {
        let matcher = ReverseMatcher::new(0, 32);

        assert_eq!(None, matcher.captures("fip6.arpa."));
        assert_eq!(None, matcher.captures("f..ip6.arpa."));
        assert_eq!(None, matcher.captures("ip6.arpa"));
    }

    #[test]
    fn should_return_empty_run_when_captures_given_bare_suffix_and_no_minimum() {
        let matcher = ReverseMatcher::new(0, 32);

        let result = matcher.captures("ip6.arpa.");

        assert_eq!(Some(vec![]), result);
    }

    #[test]
    fn should_return_none_when_zone_captures_given_fewer_labels_than_prefix() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.zone.captures("8.e.f.ip6.arpa.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_labels_when_zone_captures_given_prefix_length_run() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.zone.captures("0.0.0.0.0.0.0.0.0.0.0.0.0.8.e.f.ip6.arpa.");

        assert_eq!(16, result.unwrap().len());
    }

    #[test]
    fn should_return_digits_when_aaaa_captures_given_forward_name() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.aaaa.captures("ip-1a2B.v6.example.com.");

        assert_eq!(Some("1a2B"), result);
    }

    #[test]
    fn should_return_none_when_aaaa_captures_given_too_many_digits() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.aaaa.captures("ip-1ffffffffffffffff.v6.example.com.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_aaaa_captures_given_empty_digits() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.aaaa.captures("ip-.v6.example.com.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_aaaa_captures_given_non_hex_digit() {
        let matchers = NameMatchers::from(&get_test_zone());

        let result = matchers.aaaa.captures("ip-12g4.v6.example.com.");

        assert_eq!(None, result);
    }

    #[test]
    fn should_return_none_when_aaaa_captures_given_wrong_prefix_or_suffix() {
        let matchers = NameMatchers::from(&get_test_zone());

        assert_eq!(None, matchers.aaaa.captures("host-1.v6.example.com."));
        assert_eq!(None, matchers.aaaa.captures("ip-1.v6.example.com"));
        assert_eq!(None, matchers.aaaa.captures("IP-1.v6.example.com."));
        assert_eq!(None, matchers.aaaa.captures("x.ip-1.v6.example.com."));
    }

    #[test]
    fn should_split_at_suffix_when_captures_given_suffix_starting_with_hex() {
        let matcher = ForwardMatcher::new("ip-", "a.example.", 4);

        let result = matcher.captures("ip-1a.example.");

        assert_eq!(Some("1"), result);
    }

    #[test]
    fn should_never_match_when_aaaa_captures_given_no_host_bits() {
        let matcher = ForwardMatcher::new("ip-", ".v6.example.com.", 0);

        let result = matcher.captures("ip-1.v6.example.com.");

        assert_eq!(None, result);
    }

    /// Reverse name of `fe80::1`.
    pub fn get_test_reverse_name() -> String {
        "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.e.f.ip6.arpa.".to_string()
    }
}
