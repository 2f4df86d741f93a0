use std::iter::repeat;

/// Width padding for the rendered form of a number.
pub trait PadNum {
    #[must_use]
    fn pad_start(&self, width: usize, fill: char) -> String;
    #[must_use]
    fn pad_end(&self, width: usize, fill: char) -> String;
}

macro_rules! pad_num {
    ($t: ty) => {
        impl PadNum for $t {
            fn pad_start(&self, width: usize, fill: char) -> String {
                let rendered = self.to_string();
                let missing = width.saturating_sub(rendered.chars().count());
                let mut padded = String::with_capacity(rendered.len() + missing);
                padded.extend(repeat(fill).take(missing));
                padded.push_str(&rendered);
                padded
            }

            fn pad_end(&self, width: usize, fill: char) -> String {
                let rendered = self.to_string();
                let missing = width.saturating_sub(rendered.chars().count());
                let mut padded = rendered;
                padded.extend(repeat(fill).take(missing));
                padded
            }
        }
    };
}

pad_num!(u8);
pad_num!(u16);
pad_num!(u32);
pad_num!(u64);
pad_num!(usize);
pad_num!(i8);
pad_num!(i16);
pad_num!(i32);
pad_num!(i64);
pad_num!(isize);
pad_num!(f32);
pad_num!(f64);

/// Renders `value` with exactly two fraction digits, rounding half away
/// from zero.
///
/// Rounding happens on the value's shortest round-trip decimal
/// representation, not on the binary value, so `format_fixed2(1.005)` is
/// `"1.01"` even though `1.005_f64` is slightly below that decimal. The
/// carry propagates into the integer part (`9.995` becomes `"10.00"`).
/// Infinities and NaN are rendered via their `Display` form unchanged.
pub fn format_fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = value.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut int_part = int_part.to_string();
    let mut frac: Vec<u8> = frac_part.bytes().collect();
    let round_up = frac.get(2).is_some_and(|&digit| digit >= b'5');
    frac.truncate(2);
    while frac.len() < 2 {
        frac.push(b'0');
    }

    if round_up {
        let mut carry = true;
        for digit in frac.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            int_part = increment_decimal(&int_part);
        }
    }

    let frac: String = frac.iter().map(|&digit| digit as char).collect();
    format!("{sign}{int_part}.{frac}")
}

// Adds one to a non-empty string of decimal digits.
fn increment_decimal(digits: &str) -> String {
    let mut digits: Vec<u8> = digits.bytes().collect();
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return digits.iter().map(|&digit| digit as char).collect();
        }
    }
    let mut carried = String::with_capacity(digits.len() + 1);
    carried.push('1');
    carried.extend(digits.iter().map(|&digit| digit as char));
    carried
}

#[cfg(test)]
mod test {
    use super::{format_fixed2, PadNum};

    #[test]
    fn pads_at_the_start() {
        assert_eq!(7.pad_start(3, '0'), "007");
        assert_eq!(42.pad_start(2, ' '), "42");
        assert_eq!(1234.pad_start(2, '0'), "1234");
        assert_eq!((-5).pad_start(4, ' '), "  -5");
    }

    #[test]
    fn pads_at_the_end() {
        assert_eq!(7.pad_end(3, ' '), "7  ");
        assert_eq!(3.5f64.pad_end(5, '0'), "3.500");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_fixed2(3.14159), "3.14");
        assert_eq!(format_fixed2(2.0), "2.00");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(-0.125), "-0.13");
    }

    #[test]
    fn rounds_half_away_from_zero_on_the_decimal_form() {
        assert_eq!(format_fixed2(1.005), "1.01");
        assert_eq!(format_fixed2(2.675), "2.68");
        assert_eq!(format_fixed2(-1.005), "-1.01");
    }

    #[test]
    fn carries_into_the_integer_part() {
        assert_eq!(format_fixed2(9.995), "10.00");
        assert_eq!(format_fixed2(0.999), "1.00");
        assert_eq!(format_fixed2(99.999), "100.00");
    }

    #[test]
    fn passes_non_finite_values_through() {
        assert_eq!(format_fixed2(f64::INFINITY), "inf");
        assert_eq!(format_fixed2(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_fixed2(f64::NAN), "NaN");
    }
}
