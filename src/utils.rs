use chrono::{Local, NaiveDateTime, Utc};

/// Capitalize the first letter of each word and lower-case the rest.
///
/// A word starts after any character that is not a letter, so
/// `"o'neil"` becomes `"O'Neil"` and `"saint-malo"` becomes `"Saint-Malo"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Parse timezone string and validate
pub fn parse_timezone(tz_str: &str) -> Result<chrono_tz::Tz, String> {
    tz_str.parse::<chrono_tz::Tz>().map_err(|_| format!("Invalid timezone: {}", tz_str))
}

/// Current wall-clock time in `timezone`, or in the system zone when unset.
pub fn local_now(timezone: Option<chrono_tz::Tz>) -> NaiveDateTime {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("london"), "London");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("NEW YORK"), "New York");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("saint-malo"), "Saint-Malo");
        assert_eq!(title_case("são paulo"), "São Paulo");
        assert_eq!(title_case("  spaced  out "), "  Spaced  Out ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Asia/Jakarta").is_ok());
        assert!(parse_timezone("Europe/Oslo").is_ok());
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }

    #[test]
    fn test_local_now_in_zone() {
        let tz = parse_timezone("UTC").unwrap();
        let now = local_now(Some(tz));
        let utc = Utc::now().naive_utc();
        assert!((utc - now).num_seconds().abs() < 5);
    }
}
