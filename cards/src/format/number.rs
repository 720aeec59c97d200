//Browser-compatible number handling: prefix parsing like `parseFloat` and
//fixed-point output like `Number.prototype.toFixed`.

const TIE_PROBE_DIGITS: usize = 30;

/// Parses the longest numeric prefix of `text`, skipping leading whitespace.
/// Returns `None` if the text does not start with a number.
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with("Infinity") {
        let infinity = f64::INFINITY;
        return Some(if text.starts_with('-') { -infinity } else { infinity });
    }

    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.len() > unsigned.len());

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats `value` with exactly `precision` fraction digits, rounding exact
/// ties away from zero. A value that rounds to zero is never signed.
pub fn to_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let digits = round_half_up(value.abs(), precision);

    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        format!("-{digits}")
    } else {
        digits
    }
}

//std formatting rounds exact ties to even, so ties are pushed up by one ulp
fn round_half_up(magnitude: f64, precision: usize) -> String {
    let probe = format!("{:.*}", precision + TIE_PROBE_DIGITS, magnitude);
    let tail = &probe[probe.len() - TIE_PROBE_DIGITS..];

    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if is_tie {
        let above = f64::from_bits(magnitude.to_bits() + 1);
        format!("{:.*}", precision, above)
    } else {
        format!("{:.*}", precision, magnitude)
    }
}
